//! H-VTEC flood vocabularies

use std::fmt;

use strum::EnumMessage;

/// Flood severity
///
/// Severity of flooding at a forecast point. Areal flood and
/// flash flood products, which are not tied to a point, use
/// `0` or `N`.
///
/// ```
/// use nwscode::FloodSeverity;
///
/// let sev: FloodSeverity = "1".parse().unwrap();
/// assert_eq!(FloodSeverity::Minor, sev);
/// assert_eq!("Minor", sev.to_string());
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
pub enum FloodSeverity {
    /// No flooding
    #[strum(serialize = "N", detailed_message = "None")]
    None,

    /// Negligible flooding, or areal flooding
    #[strum(serialize = "0", detailed_message = "Negligible")]
    Negligible,

    /// Minor flooding
    #[strum(serialize = "1", detailed_message = "Minor")]
    Minor,

    /// Moderate flooding
    #[strum(serialize = "2", detailed_message = "Moderate")]
    Moderate,

    /// Major flooding
    #[strum(serialize = "3", detailed_message = "Major")]
    Major,

    /// Severity unknown
    #[strum(serialize = "U", detailed_message = "Unknown")]
    Unknown,
}

/// Immediate cause of a flood
///
/// ```
/// use nwscode::ImmediateCause;
///
/// let cause: ImmediateCause = "ER".parse().unwrap();
/// assert_eq!(ImmediateCause::ExcessiveRainfall, cause);
/// assert_eq!("Excessive Rainfall", cause.to_string());
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
pub enum ImmediateCause {
    /// Excessive Rainfall
    #[strum(serialize = "ER", detailed_message = "Excessive Rainfall")]
    ExcessiveRainfall,

    /// Snowmelt
    #[strum(serialize = "SM", detailed_message = "Snowmelt")]
    Snowmelt,

    /// Rain and Snowmelt
    #[strum(serialize = "RS", detailed_message = "Rain and Snowmelt")]
    RainAndSnowmelt,

    /// Dam or Levee Failure
    #[strum(serialize = "DM", detailed_message = "Dam or Levee Failure")]
    DamOrLeveeFailure,

    /// Glacier-Dammed Lake Outburst
    #[strum(serialize = "GO", detailed_message = "Glacier-Dammed Lake Outburst")]
    GlacierDammedLakeOutburst,

    /// Ice Jam
    #[strum(serialize = "IJ", detailed_message = "Ice Jam")]
    IceJam,

    /// Rain and/or Snowmelt and/or Ice Jam
    #[strum(serialize = "IC", detailed_message = "Rain and/or Snowmelt and/or Ice Jam")]
    RainSnowmeltIceJam,

    /// Upstream Flooding plus Storm Surge
    #[strum(serialize = "FS", detailed_message = "Upstream Flooding plus Storm Surge")]
    UpstreamFloodingStormSurge,

    /// Upstream Flooding plus Tidal Effects
    #[strum(serialize = "FT", detailed_message = "Upstream Flooding plus Tidal Effects")]
    UpstreamFloodingTidalEffects,

    /// Elevated Upstream Flow plus Tidal Effects
    #[strum(
        serialize = "ET",
        detailed_message = "Elevated Upstream Flow plus Tidal Effects"
    )]
    ElevatedUpstreamFlowTidalEffects,

    /// Wind and/or Tidal Effects
    #[strum(serialize = "WT", detailed_message = "Wind and/or Tidal Effects")]
    WindTidalEffects,

    /// Upstream Dam or Reservoir Release
    #[strum(serialize = "DR", detailed_message = "Upstream Dam or Reservoir Release")]
    UpstreamDamRelease,

    /// Other Multiple Causes
    #[strum(serialize = "MC", detailed_message = "Other Multiple Causes")]
    MultipleCauses,

    /// Other Effects
    #[strum(serialize = "OT", detailed_message = "Other Effects")]
    OtherEffects,

    /// Unknown
    #[strum(serialize = "UU", detailed_message = "Unknown")]
    Unknown,
}

/// Flood record status
///
/// How the forecast flood compares to the flood of record.
///
/// ```
/// use nwscode::RecordStatus;
///
/// let status: RecordStatus = "NO".parse().unwrap();
/// assert_eq!(RecordStatus::NotExpected, status);
/// assert_eq!("A record flood is not expected", status.to_string());
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
pub enum RecordStatus {
    /// Not applicable (areal floods, flash floods)
    #[strum(
        serialize = "OO",
        detailed_message = "The flood record status is not applicable"
    )]
    NotApplicable,

    /// A record flood is not expected
    #[strum(serialize = "NO", detailed_message = "A record flood is not expected")]
    NotExpected,

    /// A near-record or record flood is expected
    #[strum(
        serialize = "NR",
        detailed_message = "A near record or record flood is expected"
    )]
    NearRecord,

    /// No period of record to compare to
    #[strum(
        serialize = "UU",
        detailed_message = "There is no period of record to compare to"
    )]
    NoPeriodOfRecord,
}

macro_rules! vocabulary_strings {
    ($($ty:ty),+) => {
        $(
            impl $ty {
                /// Human-readable string representation
                pub fn as_display_str(&self) -> &'static str {
                    self.get_detailed_message().expect("missing definition")
                }

                /// H-VTEC string representation
                pub fn as_code_str(&self) -> &'static str {
                    self.get_serializations()[0]
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    if f.alternate() {
                        self.as_code_str().fmt(f)
                    } else {
                        self.as_display_str().fmt(f)
                    }
                }
            }
        )+
    };
}

vocabulary_strings!(FloodSeverity, ImmediateCause, RecordStatus);
