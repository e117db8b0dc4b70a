//! VTEC product class and action

use std::fmt;

use strum::EnumMessage;

/// VTEC fixed identifier (product class)
///
/// The first character of a P-VTEC string. Identifies whether the
/// product is operational, a test, or experimental.
///
/// ```
/// use nwscode::FixedIdentifier;
///
/// let fixed: FixedIdentifier = "O".parse().unwrap();
/// assert_eq!(FixedIdentifier::Operational, fixed);
/// assert_eq!("Operational Product", fixed.as_display_str());
/// assert!(!fixed.is_test());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum FixedIdentifier {
    /// Operational Product
    #[strum(serialize = "O", detailed_message = "Operational Product")]
    Operational,

    /// Test Product
    #[strum(serialize = "T", detailed_message = "Test Product")]
    Test,

    /// Experimental Product
    #[strum(serialize = "E", detailed_message = "Experimental Product")]
    Experimental,

    /// Experimental VTEC in an Operational Product
    #[strum(
        serialize = "X",
        detailed_message = "Experimental VTEC in an Operational Product"
    )]
    ExperimentalVtec,
}

impl FixedIdentifier {
    /// True for test products, which must not be acted upon
    pub fn is_test(&self) -> bool {
        *self == FixedIdentifier::Test
    }

    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// VTEC string representation
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl fmt::Display for FixedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.as_code_str().fmt(f)
        } else {
            self.as_display_str().fmt(f)
        }
    }
}

/// VTEC action code
///
/// Identifies what this issuance does to the event: create it,
/// continue it, extend it, or end it.
///
/// ```
/// use nwscode::Action;
///
/// let act: Action = "EXT".parse().unwrap();
/// assert_eq!(Action::ExtendedInTime, act);
/// assert_eq!("Extended in time", act.as_display_str());
/// assert_eq!("EXT", format!("{:#}", act));
/// assert!(!act.is_ending());
///
/// let act: Action = "CAN".parse().unwrap();
/// assert!(act.is_ending());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum Action {
    /// New event
    #[strum(serialize = "NEW", detailed_message = "New")]
    New,

    /// Event continues
    #[strum(serialize = "CON", detailed_message = "Continued")]
    Continued,

    /// Event extended in time
    #[strum(serialize = "EXT", detailed_message = "Extended in time")]
    ExtendedInTime,

    /// Event extended in area
    #[strum(serialize = "EXA", detailed_message = "Extended in area")]
    ExtendedInArea,

    /// Event upgraded to a more severe significance
    #[strum(serialize = "UPG", detailed_message = "Upgraded")]
    Upgraded,

    /// Event cancelled
    #[strum(serialize = "CAN", detailed_message = "Cancelled")]
    Cancelled,

    /// Event expired
    #[strum(serialize = "EXP", detailed_message = "Expired")]
    Expired,

    /// Correction to a previous issuance
    #[strum(serialize = "COR", detailed_message = "Correction")]
    Correction,

    /// Routine issuance, for non-event products
    #[strum(serialize = "ROU", detailed_message = "Routine")]
    Routine,
}

impl Action {
    /// True if this action ends the event
    pub fn is_ending(&self) -> bool {
        matches!(self, Action::Cancelled | Action::Expired)
    }

    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// VTEC string representation
    pub fn as_code_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl fmt::Display for Action {
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
    fn test_action_completeness() {
        assert_eq!(9, Action::iter().count());
        for act in Action::iter() {
            assert_eq!(3, act.as_code_str().len());
            assert_eq!(act, Action::from_str(act.as_code_str()).unwrap());
        }
        assert!(Action::from_str("ROT").is_err());
    }

    #[test]
    fn test_fixed_completeness() {
        assert_eq!(4, FixedIdentifier::iter().count());
        for fixed in FixedIdentifier::iter() {
            assert_eq!(fixed, FixedIdentifier::from_str(fixed.as_code_str()).unwrap());
        }
        assert!(FixedIdentifier::from_str("K").is_err());
        assert!(FixedIdentifier::Test.is_test());
    }
}
