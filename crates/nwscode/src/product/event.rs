//! Correlated events

use std::fmt;

use chrono::{DateTime, Utc};

use crate::code::{FieldValue, NwsCode};
use crate::time::RelativeTime;
use crate::ugc::Ugc;
use crate::vtec::{Action, Hvtec, Phenomenon, Pvtec, Significance};

/// An event
///
/// An event joins one P-VTEC line with the UGC of the segment it
/// appears in. Flood products may also attach one H-VTEC line.
///
/// The most common fields are available directly, and the codes
/// themselves are available via [`ugc()`](Event::ugc),
/// [`pvtec()`](Event::pvtec), and [`hvtec()`](Event::hvtec).
/// Any field may be looked up by name with
/// [`field()`](Event::field).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    ugc: Ugc,
    pvtec: Pvtec,
    hvtec: Option<Hvtec>,
}

impl Event {
    /// New event, without hydrologic information
    pub fn new(ugc: Ugc, pvtec: Pvtec) -> Self {
        Self {
            ugc,
            pvtec,
            hvtec: None,
        }
    }

    /// Geographic areas and expiration
    pub fn ugc(&self) -> &Ugc {
        &self.ugc
    }

    /// Primary VTEC
    pub fn pvtec(&self) -> &Pvtec {
        &self.pvtec
    }

    /// Hydrologic VTEC, if any
    pub fn hvtec(&self) -> Option<&Hvtec> {
        self.hvtec.as_ref()
    }

    /// Affected areas
    pub fn areas(&self) -> &[String] {
        self.ugc.areas()
    }

    /// Segment expiration time
    pub fn expiration(&self) -> RelativeTime {
        self.ugc.expiration()
    }

    /// VTEC action
    pub fn action(&self) -> Action {
        self.pvtec.action()
    }

    /// Issuing office
    pub fn office(&self) -> &str {
        self.pvtec.office()
    }

    /// Phenomenon
    pub fn phenomenon(&self) -> Phenomenon {
        self.pvtec.phenomenon()
    }

    /// Significance
    pub fn significance(&self) -> Significance {
        self.pvtec.significance()
    }

    /// Event tracking number
    pub fn etn(&self) -> u16 {
        self.pvtec.etn()
    }

    /// Event start
    pub fn begin(&self) -> Option<DateTime<Utc>> {
        self.pvtec.begin()
    }

    /// Event end
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.pvtec.end()
    }

    /// Look up a field by name
    ///
    /// The UGC is consulted first, then the P-VTEC, and then the
    /// H-VTEC, if present. The first code which has a field named
    /// `name` answers. `"raw"` is therefore the raw UGC.
    ///
    /// ```
    /// use nwscode::{Event, FieldValue, NwsCode, Pvtec, Ugc};
    ///
    /// let evt = Event::new(
    ///     Ugc::decode("ALC007-271800-").unwrap(),
    ///     Pvtec::decode("/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/").unwrap(),
    /// );
    /// assert_eq!(Some(FieldValue::Text("KBMX")), evt.field("office"));
    /// assert_eq!(Some(FieldValue::Text("ALC007-271800-")), evt.field("raw"));
    /// assert_eq!("ALC007", evt.field("areas").unwrap().to_string());
    /// assert_eq!(None, evt.field("site"));
    /// ```
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.ugc
            .field(name)
            .or_else(|| self.pvtec.field(name))
            .or_else(|| self.hvtec.as_ref().and_then(|hv| hv.field(name)))
    }

    // A later H-VTEC line replaces an earlier one
    pub(crate) fn attach(&mut self, hvtec: Hvtec) {
        self.hvtec = Some(hvtec);
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.ugc, self.pvtec)?;
        if let Some(hv) = &self.hvtec {
            write!(f, "\n{}", hv)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    fn flood_event() -> Event {
        let mut evt = Event::new(
            Ugc::decode("ALC007-065-271800-").unwrap(),
            Pvtec::decode("/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/").unwrap(),
        );
        evt.attach(
            Hvtec::decode("/DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/").unwrap(),
        );
        evt
    }

    #[test]
    fn test_accessors() {
        let evt = flood_event();
        assert_eq!(evt.areas(), &["ALC007", "ALC065"]);
        assert_eq!(RelativeTime::new(27, 18, 0), evt.expiration());
        assert_eq!(Action::New, evt.action());
        assert_eq!("KBMX", evt.office());
        assert_eq!(Phenomenon::Flood, evt.phenomenon());
        assert_eq!(Significance::Warning, evt.significance());
        assert_eq!(98, evt.etn());
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2004, 12, 26, 18, 0, 0).unwrap()),
            evt.begin()
        );
        assert_eq!(
            Some(Utc.with_ymd_and_hms(2004, 12, 27, 0, 0, 0).unwrap()),
            evt.end()
        );
    }

    #[test]
    fn test_field_fallthrough() {
        let evt = flood_event();
        assert_eq!(
            Some(FieldValue::Relative(RelativeTime::new(27, 18, 0))),
            evt.field("expiration")
        );
        assert_eq!(Some(FieldValue::Number(98)), evt.field("etn"));
        assert_eq!(Some(FieldValue::Text("Minor")), evt.field("severity"));
        assert_eq!(
            Some(FieldValue::Time(Some(
                Utc.with_ymd_and_hms(2003, 5, 10, 3, 0, 0).unwrap()
            ))),
            evt.field("flood_crest")
        );
        assert_eq!(
            Some(FieldValue::Text("ALC007-065-271800-")),
            evt.field("raw")
        );
        assert_eq!(None, evt.field("nonexistent"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "ALC007-065-271800-\n\
             /O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/\n\
             /DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/",
            flood_event().to_string()
        );
    }
}
