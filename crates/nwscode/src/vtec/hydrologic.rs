//! Hydrologic Valid Time Event Code

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::code::{interpret, DecodeError, FieldValue, NwsCode};
use crate::time::parse_vtec_time;

use super::flood::{FloodSeverity, ImmediateCause, RecordStatus};

/// Site identifier for products which are not tied to a point
const NO_SITE: &str = "00000";

lazy_static! {
    // /nwsli.s.ic.yymmddThhnnZ.yymmddThhnnZ.yymmddThhnnZ.fr/
    static ref RE: Regex = Regex::new(
        r"\A/([A-Z0-9]{5})\.([A-Z0-9])\.([A-Z]{2})\.([0-9]{6}T[0-9]{4}Z)\.([0-9]{6}T[0-9]{4}Z)\.([0-9]{6}T[0-9]{4}Z)\.([A-Z]{2})/\z"
    )
    .expect("bad H-VTEC regexp");
}

/// Hydrologic Valid Time Event Code (H-VTEC)
///
/// Flood products follow each P-VTEC line with an H-VTEC line that
/// describes the flood itself.
///
/// ```txt
/// /DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/
/// ```
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use nwscode::{FloodSeverity, Hvtec, ImmediateCause, NwsCode, RecordStatus};
///
/// let hv = Hvtec::decode("/DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/")
///     .expect("bad H-VTEC");
/// assert_eq!("DEMI4", hv.site());
/// assert_eq!(FloodSeverity::Minor, hv.severity());
/// assert_eq!(ImmediateCause::ExcessiveRainfall, hv.cause());
/// assert_eq!(Some(Utc.with_ymd_and_hms(2003, 5, 10, 3, 0, 0).unwrap()), hv.flood_crest());
/// assert_eq!(RecordStatus::NotExpected, hv.record_status());
/// ```
///
/// Areal flood products use the site `00000` and may leave every
/// time untimed (`000000T0000Z`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hvtec {
    raw: String,
    site: String,
    severity: FloodSeverity,
    cause: ImmediateCause,
    begin: Option<DateTime<Utc>>,
    crest: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    record_status: RecordStatus,
}

impl Hvtec {
    /// Five-character NWS location identifier, like `DEMI4`
    ///
    /// `00000` for products which are not tied to a forecast point.
    pub fn site(&self) -> &str {
        &self.site
    }

    /// True if this code refers to a forecast point
    pub fn is_point(&self) -> bool {
        self.site != NO_SITE
    }

    /// Flood severity
    pub fn severity(&self) -> FloodSeverity {
        self.severity
    }

    /// Immediate cause of the flood
    pub fn cause(&self) -> ImmediateCause {
        self.cause
    }

    /// Start of flooding, or `None` if untimed
    pub fn flood_begin(&self) -> Option<DateTime<Utc>> {
        self.begin
    }

    /// Flood crest, or `None` if untimed
    pub fn flood_crest(&self) -> Option<DateTime<Utc>> {
        self.crest
    }

    /// End of flooding, or `None` if untimed
    pub fn flood_end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Comparison to the flood of record
    pub fn record_status(&self) -> RecordStatus {
        self.record_status
    }
}

impl NwsCode for Hvtec {
    fn pattern() -> &'static Regex {
        &RE
    }

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        let caps = RE
            .captures(raw)
            .ok_or_else(|| DecodeError::Malformed(raw.to_owned()))?;

        Ok(Self {
            raw: raw.to_owned(),
            site: caps[1].to_owned(),
            severity: interpret("severity", &caps[2])?,
            cause: interpret("cause", &caps[3])?,
            begin: parse_vtec_time(&caps[4], raw)?,
            crest: parse_vtec_time(&caps[5], raw)?,
            end: parse_vtec_time(&caps[6], raw)?,
            record_status: interpret("record_status", &caps[7])?,
        })
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "raw" => Some(FieldValue::Text(&self.raw)),
            "site" => Some(FieldValue::Text(&self.site)),
            "severity" => Some(FieldValue::Text(self.severity.as_display_str())),
            "cause" => Some(FieldValue::Text(self.cause.as_display_str())),
            "flood_begin" => Some(FieldValue::Time(self.begin)),
            "flood_crest" => Some(FieldValue::Time(self.crest)),
            "flood_end" => Some(FieldValue::Time(self.end)),
            "record_status" => Some(FieldValue::Text(self.record_status.as_display_str())),
            _ => None,
        }
    }
}

impl FromStr for Hvtec {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Hvtec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn test_code() {
        let hv = Hvtec::decode("/DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/")
            .expect("bad H-VTEC");
        assert_eq!("DEMI4", hv.site());
        assert!(hv.is_point());
        assert_eq!("Minor", hv.severity().as_display_str());
        assert_eq!("Excessive Rainfall", hv.cause().as_display_str());
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2003, 5, 9, 21, 0, 0).unwrap()),
            hv.flood_begin()
        );
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2003, 5, 10, 3, 0, 0).unwrap()),
            hv.flood_crest()
        );
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2003, 5, 10, 9, 0, 0).unwrap()),
            hv.flood_end()
        );
        assert!(hv
            .record_status()
            .as_display_str()
            .eq_ignore_ascii_case("a record flood is not expected"));

        // raw code access
        assert_eq!("1", hv.severity().as_code_str());
        assert_eq!("ER", hv.cause().as_code_str());
        assert_eq!("NO", hv.record_status().as_code_str());
    }

    #[test]
    fn test_good() {
        for good in [
            "/BRKS2.2.ER.041216T1600Z.041218T1600Z.041219T1200Z.NO/",
            "/DERS2.3.ER.041217T0400Z.041218T1700Z.041220T0200Z.NO/",
            "/AKRI4.2.ER.041217T0400Z.041218T1900Z.041220T1200Z.NO/",
            "/GLDI2.1.ER.040426T2000Z.040430T1100Z.040503T1500Z.NO/",
        ] {
            let hv: Hvtec = good.parse().expect("bad H-VTEC");
            assert_eq!(good, hv.raw());
        }
    }

    #[test]
    fn test_areal() {
        let hv = Hvtec::decode("/00000.0.ER.000000T0000Z.000000T0000Z.000000T0000Z.OO/")
            .expect("bad H-VTEC");
        assert!(!hv.is_point());
        assert_eq!(FloodSeverity::Negligible, hv.severity());
        assert_eq!(None, hv.flood_begin());
        assert_eq!(None, hv.flood_crest());
        assert_eq!(None, hv.flood_end());
        assert_eq!(RecordStatus::NotApplicable, hv.record_status());
    }

    #[test]
    fn test_bad() {
        for bad in [
            "/BRKS.2.ER.041216T1600Z.041218T1600Z.041219T1200Z.NO/",
            "/00000.0.ER.0000000000Z.000000T0000Z.000000T0000Z.OO/",
            "/DERS2.3.ER.04121T0400Z.041218T1700Z.041220T0200Z.NO/",
            "/AKRI4.2.ER041217T0400Z.041218T1900Z.041220T1200Z.NO/",
            "/GLDI2.1.ER.040426T2000Z.040430T1100Z.040503T1500Z.NO",
        ] {
            assert!(!Hvtec::is_valid(bad), "{}", bad);
            assert_eq!(
                Err(DecodeError::Malformed(bad.to_owned())),
                Hvtec::decode(bad)
            );
        }

        assert_eq!(
            Err(DecodeError::UnknownCode {
                field: "severity",
                value: "4".to_owned()
            }),
            Hvtec::decode("/DEMI4.4.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/")
        );
        assert_eq!(
            Err(DecodeError::UnknownCode {
                field: "record_status",
                value: "XX".to_owned()
            }),
            Hvtec::decode("/DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.XX/")
        );
    }
}
