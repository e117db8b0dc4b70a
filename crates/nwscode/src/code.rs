//! Common decoding contract for fixed-format NWS codes

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use regex::Regex;
use thiserror::Error;

use crate::time::RelativeTime;

/// Error decoding a fixed-format code
///
/// Every decoder in this crate fails with one of two kinds of
/// error. A `Malformed` code does not match the decoder's
/// pattern at all. An `UnknownCode` matches structurally, but one
/// of its fields holds a value which is not in that field's
/// closed vocabulary.
///
/// ```
/// use nwscode::{DecodeError, NwsCode, Pvtec};
///
/// // two-letter office identifier
/// let err = Pvtec::decode("/O.NEW.KBM.FL.W.0098.041226T1800Z-041227T0000Z/").unwrap_err();
/// assert!(matches!(err, DecodeError::Malformed(_)));
///
/// // `C` is not a significance code
/// let err = Pvtec::decode("/O.NEW.KOUN.WS.C.0006.040128T0530Z-040129T0000Z/").unwrap_err();
/// assert_eq!(
///     err,
///     DecodeError::UnknownCode { field: "significance", value: "C".to_owned() }
/// );
/// ```
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// Input does not match the required pattern
    #[error("invalid code: \"{0}\"")]
    Malformed(String),

    /// Field value is not in its vocabulary
    #[error("invalid code \"{value}\" for `{field}`")]
    UnknownCode {
        /// Name of the field which failed lookup
        field: &'static str,

        /// The rejected value, as it appeared in the input
        value: String,
    },
}

/// A fixed-format NWS code
///
/// Implementors match their input against a fixed pattern which
/// is anchored at both ends. Substring matches are never accepted.
/// Decoding is a pure function of the input string and of static,
/// read-only vocabulary tables.
pub trait NwsCode: Sized {
    /// Anchored pattern for this code
    fn pattern() -> &'static Regex;

    /// Decode from string
    ///
    /// Fails with [`DecodeError::Malformed`] if `raw` does not
    /// match [`pattern()`](NwsCode::pattern), or with
    /// [`DecodeError::UnknownCode`] if a field lookup fails.
    fn decode(raw: &str) -> Result<Self, DecodeError>;

    /// The raw, undecoded code text
    fn raw(&self) -> &str;

    /// Look up a decoded field by name
    ///
    /// Returns `None` if this code has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// True if `raw` matches the code's pattern
    ///
    /// This is a structural check only. Vocabulary lookups are not
    /// performed, so a valid string may still fail to
    /// [`decode()`](NwsCode::decode).
    fn is_valid(raw: &str) -> bool {
        Self::pattern().is_match(raw)
    }
}

/// Value of a named field
///
/// Returned by [`NwsCode::field()`] and
/// [`Event::field()`](crate::Event::field).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free or interpreted text
    Text(&'a str),

    /// An ordered list of area identifiers
    Areas(&'a [String]),

    /// An integer, such as an event tracking number
    Number(u16),

    /// An absolute time, or `None` if the code is untimed
    Time(Option<DateTime<Utc>>),

    /// A day/hour/minute time which requires a reference to resolve
    Relative(RelativeTime),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => s.fmt(f),
            FieldValue::Areas(areas) => areas.join(" ").fmt(f),
            FieldValue::Number(n) => n.fmt(f),
            FieldValue::Time(Some(tm)) => tm.format("%Y-%m-%dT%H:%MZ").fmt(f),
            FieldValue::Time(None) => "untimed".fmt(f),
            FieldValue::Relative(rel) => rel.fmt(f),
        }
    }
}

/// Look up `code` in the vocabulary for `field`
///
/// Vocabularies are enums which parse from their code string.
/// A miss is a hard [`DecodeError::UnknownCode`] failure.
pub(crate) fn interpret<T>(field: &'static str, code: &str) -> Result<T, DecodeError>
where
    T: FromStr,
{
    code.parse().map_err(|_| DecodeError::UnknownCode {
        field,
        value: code.to_owned(),
    })
}
