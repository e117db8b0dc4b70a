//! WMO abbreviated header

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::code::{DecodeError, FieldValue, NwsCode};
use crate::time::RelativeTime;

lazy_static! {
    // TTAAii CCCC YYGGgg (BBB)
    static ref RE_HEADER: Regex =
        Regex::new(r"\A([A-Z]{4}[0-9]{2}) ([A-Z0-9]{4}) ([0-9]{6})(?: ([A-Z]{3}))?\z")
            .expect("bad WMO regexp");

    // TTAAiiCCCC
    static ref RE_FILE: Regex =
        Regex::new(r"\A([A-Z]{4}[0-9]{2})([A-Z0-9]{4})\z").expect("bad WMO regexp");
}

/// WMO abbreviated heading
///
/// The first line of every NWS text product. Identifies the
/// bulletin's contents, the station which produced it, and the
/// day and time of issuance.
///
/// ```txt
/// FZAK52 PAFG 271242 AAA
/// ```
///
/// ```
/// use nwscode::{NwsCode, WmoHeader};
///
/// let wmo = WmoHeader::decode("FZAK52 PAFG 271242 AAA").expect("bad header");
/// assert_eq!("FZAK52", wmo.designator());
/// assert_eq!("PAFG", wmo.station());
/// assert_eq!(27, wmo.issuance().day());
/// assert_eq!(12, wmo.issuance().hour());
/// assert_eq!(42, wmo.issuance().minute());
/// assert_eq!(Some("AAA"), wmo.addendum());
/// ```
///
/// The issuance time carries only the day of month. Use
/// [`RelativeTime::resolve()`] to obtain a full date.
///
/// The heading format is defined by WMO Manual 386.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WmoHeader {
    raw: String,
    designator: String,
    station: String,
    issuance: RelativeTime,
    addendum: Option<String>,
}

impl WmoHeader {
    /// Data designator (`TTAAii`), like `FZAK52`
    pub fn designator(&self) -> &str {
        &self.designator
    }

    /// Originating station (`CCCC`), like `PAFG`
    pub fn station(&self) -> &str {
        &self.station
    }

    /// Day and time of issuance
    pub fn issuance(&self) -> RelativeTime {
        self.issuance
    }

    /// Optional `BBB` group
    ///
    /// Present only for delayed, corrected, or amended bulletins:
    /// `RRx`, `CCx`, or `AAx`.
    pub fn addendum(&self) -> Option<&str> {
        self.addendum.as_deref()
    }
}

impl NwsCode for WmoHeader {
    fn pattern() -> &'static Regex {
        &RE_HEADER
    }

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        let caps = RE_HEADER
            .captures(raw)
            .ok_or_else(|| DecodeError::Malformed(raw.to_owned()))?;

        Ok(Self {
            raw: raw.to_owned(),
            designator: caps[1].to_owned(),
            station: caps[2].to_owned(),
            issuance: RelativeTime::from_ddhhmm(&caps[3])
                .ok_or_else(|| DecodeError::Malformed(raw.to_owned()))?,
            addendum: caps.get(4).map(|m| m.as_str().to_owned()),
        })
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "raw" => Some(FieldValue::Text(&self.raw)),
            "designator" => Some(FieldValue::Text(&self.designator)),
            "station" => Some(FieldValue::Text(&self.station)),
            "issuance" => Some(FieldValue::Relative(self.issuance)),
            "addendum" => self.addendum.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }
}

impl FromStr for WmoHeader {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for WmoHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

/// WMO bulletin file name
///
/// The designator and station of a [`WmoHeader`], run together
/// with no separator. Bulletins are often stored or requested
/// under this name.
///
/// ```
/// use nwscode::{NwsCode, WmoFile};
///
/// let file: WmoFile = "FZAK52PAFG".parse().expect("bad file name");
/// assert_eq!("FZAK52", file.designator());
/// assert_eq!("PAFG", file.station());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WmoFile {
    raw: String,
    designator: String,
    station: String,
}

impl WmoFile {
    /// Data designator (`TTAAii`)
    pub fn designator(&self) -> &str {
        &self.designator
    }

    /// Originating station (`CCCC`)
    pub fn station(&self) -> &str {
        &self.station
    }
}

impl NwsCode for WmoFile {
    fn pattern() -> &'static Regex {
        &RE_FILE
    }

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        let caps = RE_FILE
            .captures(raw)
            .ok_or_else(|| DecodeError::Malformed(raw.to_owned()))?;

        Ok(Self {
            raw: raw.to_owned(),
            designator: caps[1].to_owned(),
            station: caps[2].to_owned(),
        })
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "raw" => Some(FieldValue::Text(&self.raw)),
            "designator" => Some(FieldValue::Text(&self.designator)),
            "station" => Some(FieldValue::Text(&self.station)),
            _ => None,
        }
    }
}

impl FromStr for WmoFile {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for WmoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

impl From<&WmoHeader> for WmoFile {
    fn from(hdr: &WmoHeader) -> Self {
        Self {
            raw: format!("{}{}", hdr.designator, hdr.station),
            designator: hdr.designator.clone(),
            station: hdr.station.clone(),
        }
    }
}
