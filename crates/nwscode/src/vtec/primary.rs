//! Primary Valid Time Event Code

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::code::{interpret, DecodeError, FieldValue, NwsCode};
use crate::time::parse_vtec_time;

use super::action::{Action, FixedIdentifier};
use super::phenomenon::Phenomenon;
use super::significance::Significance;

lazy_static! {
    // /k.aaa.cccc.pp.s.####.yymmddThhnnZ-yymmddThhnnZ/
    static ref RE: Regex = Regex::new(
        r"\A/([A-Z])\.([A-Z]{3})\.([A-Z]{4})\.([A-Z]{2})\.([A-Z])\.([0-9]{4})\.([0-9]{6}T[0-9]{4}Z)-([0-9]{6}T[0-9]{4}Z)/\z"
    )
    .expect("bad P-VTEC regexp");
}

/// Primary Valid Time Event Code (P-VTEC)
///
/// A P-VTEC string classifies an event and bounds it in time.
///
/// ```txt
/// /O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/
/// ```
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use nwscode::{Action, NwsCode, Phenomenon, Pvtec, Significance};
///
/// let pv = Pvtec::decode("/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/")
///     .expect("bad P-VTEC");
/// assert_eq!(Action::New, pv.action());
/// assert_eq!("KBMX", pv.office());
/// assert_eq!(Phenomenon::Flood, pv.phenomenon());
/// assert_eq!(Significance::Warning, pv.significance());
/// assert_eq!(98, pv.etn());
/// assert_eq!(Some(Utc.with_ymd_and_hms(2004, 12, 26, 18, 0, 0).unwrap()), pv.begin());
/// assert_eq!(Some(Utc.with_ymd_and_hms(2004, 12, 27, 0, 0, 0).unwrap()), pv.end());
/// ```
///
/// Either time may be the sentinel `000000T0000Z`, which means
/// "no bound." It decodes as `None`.
///
/// ```
/// # use nwscode::{NwsCode, Pvtec};
/// let pv = Pvtec::decode("/X.EXT.PAFG.FG.Y.0002.000000T0000Z-060127T2100Z/")
///     .expect("bad P-VTEC");
/// assert_eq!(None, pv.begin());
/// assert!(pv.end().is_some());
/// ```
///
/// For the complete format, see NWSI 10-1703,
/// <https://www.weather.gov/directives/>.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pvtec {
    raw: String,
    fixed_id: FixedIdentifier,
    action: Action,
    office: String,
    phenomenon: Phenomenon,
    significance: Significance,
    etn: u16,
    begin: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl Pvtec {
    /// Product class: operational, test, or experimental
    pub fn fixed_id(&self) -> FixedIdentifier {
        self.fixed_id
    }

    /// What this issuance does to the event
    pub fn action(&self) -> Action {
        self.action
    }

    /// Four-letter identifier of the issuing office, like `KBMX`
    pub fn office(&self) -> &str {
        &self.office
    }

    /// Type of occurrence
    pub fn phenomenon(&self) -> Phenomenon {
        self.phenomenon
    }

    /// Level of importance
    pub fn significance(&self) -> Significance {
        self.significance
    }

    /// Event Tracking Number
    ///
    /// Tracks one event across every product issued over its
    /// lifetime, together with the office, phenomenon, and
    /// significance.
    pub fn etn(&self) -> u16 {
        self.etn
    }

    /// Start of the event, or `None` if untimed
    pub fn begin(&self) -> Option<DateTime<Utc>> {
        self.begin
    }

    /// End of the event, or `None` if untimed
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Event identity, like `KBMX.FL.W.0098`
    ///
    /// Successive products which update the same event share
    /// this identity, even as the action and times change.
    pub fn event_id(&self) -> String {
        format!(
            "{}.{}.{}.{:04}",
            self.office,
            self.phenomenon.as_code_str(),
            self.significance.as_code_str(),
            self.etn
        )
    }
}

impl NwsCode for Pvtec {
    fn pattern() -> &'static Regex {
        &RE
    }

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        let caps = RE
            .captures(raw)
            .ok_or_else(|| DecodeError::Malformed(raw.to_owned()))?;

        Ok(Self {
            raw: raw.to_owned(),
            fixed_id: interpret("fixed_id", &caps[1])?,
            action: interpret("action", &caps[2])?,
            office: caps[3].to_owned(),
            phenomenon: interpret("phenomenon", &caps[4])?,
            significance: interpret("significance", &caps[5])?,
            etn: caps[6]
                .parse()
                .map_err(|_| DecodeError::Malformed(raw.to_owned()))?,
            begin: parse_vtec_time(&caps[7], raw)?,
            end: parse_vtec_time(&caps[8], raw)?,
        })
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "raw" => Some(FieldValue::Text(&self.raw)),
            "fixed_id" => Some(FieldValue::Text(self.fixed_id.as_display_str())),
            "action" => Some(FieldValue::Text(self.action.as_display_str())),
            "office" => Some(FieldValue::Text(&self.office)),
            "phenomenon" => Some(FieldValue::Text(self.phenomenon.as_display_str())),
            "significance" => Some(FieldValue::Text(self.significance.as_display_str())),
            "etn" => Some(FieldValue::Number(self.etn)),
            "begin" => Some(FieldValue::Time(self.begin)),
            "end" => Some(FieldValue::Time(self.end)),
            _ => None,
        }
    }
}

impl FromStr for Pvtec {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Pvtec {
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
        let pv = Pvtec::decode("/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/")
            .expect("bad P-VTEC");
        assert_eq!(FixedIdentifier::Operational, pv.fixed_id());
        assert_eq!("Operational Product", pv.fixed_id().as_display_str());
        assert_eq!("New", pv.action().as_display_str());
        assert_eq!("KBMX", pv.office());
        assert_eq!("Flood", pv.phenomenon().as_display_str());
        assert_eq!("Warning", pv.significance().as_display_str());
        assert_eq!(98, pv.etn());
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2004, 12, 26, 18, 0, 0).unwrap()),
            pv.begin()
        );
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2004, 12, 27, 0, 0, 0).unwrap()),
            pv.end()
        );

        // raw code access
        assert_eq!("O", pv.fixed_id().as_code_str());
        assert_eq!("NEW", pv.action().as_code_str());
        assert_eq!("FL", pv.phenomenon().as_code_str());
        assert_eq!("W", pv.significance().as_code_str());
        assert_eq!("KBMX.FL.W.0098", pv.event_id());
        assert_eq!(
            "/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/",
            pv.to_string()
        );
    }

    #[test]
    fn test_good() {
        for good in [
            "/O.NEW.KBMX.FL.W.0097.041224T0300Z-041227T0300Z/",
            "/O.ROU.KBMX.HY.S.0000.000000T0000Z-000000T0000Z/",
            "/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/",
            "/O.CAN.KOUN.IS.W.0003.000000T0000Z-040129T0000Z/",
            "/O.NEW.KOUN.WS.W.0006.040128T0530Z-040129T0000Z/",
        ] {
            assert!(Pvtec::is_valid(good));
            let pv: Pvtec = good.parse().expect("bad P-VTEC");
            assert_eq!(good, pv.raw());
        }
    }

    #[test]
    fn test_untimed() {
        let pv = Pvtec::decode("/O.ROU.KBMX.HY.S.0000.000000T0000Z-000000T0000Z/")
            .expect("bad P-VTEC");
        assert_eq!(None, pv.begin());
        assert_eq!(None, pv.end());
        assert_eq!(0, pv.etn());
        assert_eq!(Some(FieldValue::Time(None)), pv.field("begin"));
    }

    #[test]
    fn test_bad() {
        // structural failures
        for bad in [
            "/O.NEW.KBMX.FL.W.0097.041224T0300-041227T0300Z/",
            "/O.ROT.KBMX.HY.S.000.000000T0000Z-000000T0000Z/",
            "/O.NEW.KBMX.FL.W.0098.041226I1800Z-041227T0000Z/",
            "/ONEW.KOUN.WS.C.0006.040128T0530Z-040129T0000Z/",
            "/O.NEW.KBM.FL.W.0098.041226T1800Z-041227T0000Z/",
            " /O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/",
            "/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/ ",
        ] {
            assert!(!Pvtec::is_valid(bad), "{}", bad);
            assert_eq!(
                Err(DecodeError::Malformed(bad.to_owned())),
                Pvtec::decode(bad)
            );
        }

        // vocabulary failures
        assert_eq!(
            Err(DecodeError::UnknownCode {
                field: "fixed_id",
                value: "K".to_owned()
            }),
            Pvtec::decode("/K.CAN.KOUN.IS.W.0003.000000T0000Z-040129T0000Z/")
        );
        assert_eq!(
            Err(DecodeError::UnknownCode {
                field: "significance",
                value: "C".to_owned()
            }),
            Pvtec::decode("/O.NEW.KOUN.WS.C.0006.040128T0530Z-040129T0000Z/")
        );
        assert_eq!(
            Err(DecodeError::UnknownCode {
                field: "phenomenon",
                value: "WP".to_owned()
            }),
            Pvtec::decode("/O.NEW.KOUN.WP.W.0006.040128T0530Z-040129T0000Z/")
        );

        // not a calendar date
        let bad = "/O.NEW.KOUN.WS.W.0006.041328T0530Z-040129T0000Z/";
        assert_eq!(Err(DecodeError::Malformed(bad.to_owned())), Pvtec::decode(bad));
    }
}
