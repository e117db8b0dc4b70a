//! VTEC significance

use std::fmt;

use strum::EnumMessage;

/// VTEC significance code
///
/// The last letter-group of a P-VTEC phenomenon, which describes
/// how important the occurrence is.
///
/// | Code | Significance                                |
/// |------|---------------------------------------------|
/// | `W`  | [warning](crate::Significance::Warning)     |
/// | `A`  | [watch](crate::Significance::Watch)         |
/// | `Y`  | [advisory](crate::Significance::Advisory)   |
/// | `S`  | [statement](crate::Significance::Statement) |
/// | `F`  | [forecast](crate::Significance::Forecast)   |
/// | `O`  | [outlook](crate::Significance::Outlook)     |
/// | `N`  | [synopsis](crate::Significance::Synopsis)   |
///
/// ```
/// use nwscode::Significance;
///
/// let sig: Significance = "Y".parse().unwrap();
/// assert_eq!(Significance::Advisory, sig);
/// assert_eq!("Advisory", sig.as_display_str());
/// assert_eq!("Y", format!("{:#}", sig));
/// ```
///
/// Significance codes are `Ord`. Higher codes are more urgent.
///
/// ```
/// # use nwscode::Significance;
/// assert!(Significance::Advisory < Significance::Watch);
/// assert!(Significance::Watch < Significance::Warning);
/// ```
///
/// Unlike SAME significance levels, there is no "unknown"
/// significance. Unrecognized codes fail to parse.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[repr(u8)]
pub enum Significance {
    /// Synopsis
    ///
    /// A broad overview of conditions, usually for marine zones.
    #[strum(serialize = "N", detailed_message = "Synopsis")]
    Synopsis,

    /// Outlook
    #[strum(serialize = "O", detailed_message = "Outlook")]
    Outlook,

    /// Forecast
    #[strum(serialize = "F", detailed_message = "Forecast")]
    Forecast,

    /// Statement
    ///
    /// Follow-up information for a watch, warning, or advisory.
    #[strum(serialize = "S", detailed_message = "Statement")]
    Statement,

    /// Advisory
    ///
    /// The occurrence is less serious than a warning but may cause
    /// significant inconvenience.
    #[strum(serialize = "Y", detailed_message = "Advisory")]
    Advisory,

    /// Watch
    ///
    /// Conditions are favorable for the occurrence, but its onset,
    /// location, or probability is uncertain.
    #[strum(serialize = "A", detailed_message = "Watch")]
    Watch,

    /// Warning (the most severe)
    ///
    /// The occurrence is imminent or happening and poses a threat
    /// to life or property.
    #[strum(serialize = "W", detailed_message = "Warning")]
    Warning,
}

impl Significance {
    /// Human-readable string representation
    ///
    /// Converts to a human-readable string, like "`Warning`."
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// VTEC string representation
    ///
    /// Returns the one-character VTEC code for this `Significance`.
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl AsRef<str> for Significance {
    fn as_ref(&self) -> &'static str {
        self.as_code_str()
    }
}

impl fmt::Display for Significance {
    /// Printable string
    ///
    /// * The normal form is a human-readable string like "`Watch`"
    /// * The alternate form is a one-character string like "`A`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_code_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    use strum::IntoEnumIterator;

    #[test]
    fn test_significance_roundtrip() {
        let all: Vec<Significance> = Significance::iter().collect();
        assert_eq!(7, all.len());

        for sig in all {
            assert_eq!(1, sig.as_code_str().len());
            assert_eq!(sig, Significance::from_str(sig.as_code_str()).unwrap());
        }

        assert!(Significance::from_str("C").is_err());
        assert!(Significance::from_str("").is_err());
    }
}
