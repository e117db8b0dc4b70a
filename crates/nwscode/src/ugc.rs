//! Universal Geographic Code

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::code::{DecodeError, FieldValue, NwsCode};
use crate::time::RelativeTime;

// UGC grammar
//
// One or more groups of a three-letter identifier followed by
// three-digit numbers. Numbers are separated by `-` (single area)
// or `>` (inclusive range). A `-` may be followed by a newline
// when the code continues onto the next line. The code ends with
// a six-digit `DDHHMM` expiration time and a trailing `-`.
const IDENT: &str = r"[A-Z]{3}";
const NUMBER: &str = r"[0-9]{3}";
const DELIM: &str = r">|-\n?";
const TIME: &str = r"[0-9]{6}";

lazy_static! {
    static ref AREA: String = format!(r"{}(?:{}(?:{}))+", IDENT, NUMBER, DELIM);
    static ref RE_ANCHORED: Regex =
        Regex::new(&format!(r"\A((?:{})+)({})-\z", *AREA, TIME)).expect("bad UGC regexp");
    static ref RE_SEARCH: Regex =
        Regex::new(&format!(r"(?m)^((?:{})+)({})-$", *AREA, TIME)).expect("bad UGC regexp");
    static ref RE_GROUP: Regex =
        Regex::new(r"([A-Z]{3})((?:[0-9]{3}[>-]?)+)").expect("bad UGC regexp");
}

/// Universal Geographic Code
///
/// A UGC lists the zones or counties which a product (or a segment
/// of a product) applies to, and the time at which it expires.
///
/// ```txt
/// NCZ001>003-VAZ007-142030-
/// ```
///
/// Each area is a three-letter identifier, like `NCZ` for North
/// Carolina zones, followed by a three-digit number. An identifier
/// applies to every number which follows it until the next
/// identifier. Ranges like `001>003` are inclusive and are
/// expanded into individual areas.
///
/// ```
/// use nwscode::{NwsCode, Ugc};
///
/// let ugc = Ugc::decode("NCZ001>003-VAZ007-142030-").expect("bad UGC");
/// assert_eq!(ugc.areas(), &["NCZ001", "NCZ002", "NCZ003", "VAZ007"]);
/// assert_eq!(ugc.expiration().day(), 14);
/// assert_eq!(ugc.expiration().hour(), 20);
/// assert_eq!(ugc.expiration().minute(), 30);
/// ```
///
/// Area order is preserved exactly as listed, including any
/// duplicates. Codes which continue onto multiple lines are
/// accepted as long as each line break follows a `-`.
///
/// For the complete format, see NWSI 10-1702,
/// <https://www.weather.gov/directives/>.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ugc {
    raw: String,
    areas: Vec<String>,
    expiration: RelativeTime,
}

impl Ugc {
    /// Locate the first UGC in a block of text
    ///
    /// The UGC must begin at the start of a line and end, with its
    /// trailing `-`, at the end of a line. It may span several lines.
    /// Returns the byte range of the match.
    pub fn find(text: &str) -> Option<Range<usize>> {
        RE_SEARCH.find(text).map(|m| m.range())
    }

    /// Affected areas, like `NCZ001`
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    /// Product expiration time
    ///
    /// Resolve it against a reference time to obtain a UTC time.
    pub fn expiration(&self) -> RelativeTime {
        self.expiration
    }
}

impl NwsCode for Ugc {
    fn pattern() -> &'static Regex {
        &RE_ANCHORED
    }

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        let caps = RE_ANCHORED
            .captures(raw)
            .ok_or_else(|| DecodeError::Malformed(raw.to_owned()))?;

        let areas = expand_areas(&caps[1]).ok_or_else(|| DecodeError::Malformed(raw.to_owned()))?;
        let expiration = RelativeTime::from_ddhhmm(&caps[2])
            .ok_or_else(|| DecodeError::Malformed(raw.to_owned()))?;

        Ok(Self {
            raw: raw.to_owned(),
            areas,
            expiration,
        })
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "raw" => Some(FieldValue::Text(&self.raw)),
            "areas" => Some(FieldValue::Areas(&self.areas)),
            "expiration" => Some(FieldValue::Relative(self.expiration)),
            _ => None,
        }
    }
}

impl FromStr for Ugc {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Ugc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

// Expand the area portion of a UGC into individual areas
//
// Line breaks are continuations, not delimiters, and are removed
// first. Returns `None` for a malformed range: a `>` which is not
// between two numbers, or a range which runs backwards.
fn expand_areas(area_string: &str) -> Option<Vec<String>> {
    let area_string = area_string.replace('\n', "");
    let mut areas = Vec::new();

    for group in RE_GROUP.captures_iter(&area_string) {
        let ident = &group[1];
        for num in group[2].split('-').filter(|num| !num.is_empty()) {
            match num.split_once('>') {
                Some((first, last)) => {
                    let first: u16 = parse_number(first)?;
                    let last: u16 = parse_number(last)?;
                    if first > last {
                        return None;
                    }
                    areas.extend((first..=last).map(|n| format!("{}{:03}", ident, n)));
                }
                None => areas.push(format!("{}{}", ident, num)),
            }
        }
    }

    Some(areas)
}

// Parse exactly three digits
fn parse_number(num: &str) -> Option<u16> {
    if num.len() == 3 && num.bytes().all(|b| b.is_ascii_digit()) {
        num.parse().ok()
    } else {
        None
    }
}
