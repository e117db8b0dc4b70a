//! Product segments

use std::fmt;

#[cfg(not(test))]
use log::{debug, warn};

#[cfg(test)]
use std::println as debug;
#[cfg(test)]
use std::println as warn;

use crate::code::NwsCode;
use crate::ugc::Ugc;
use crate::vtec::{Hvtec, Pvtec};

use super::event::Event;
use super::text;
use super::Issue;

/// A product segment
///
/// Segments begin with a UGC and end with a `$$` line. Every
/// segment carries exactly one UGC, which applies to all of its
/// events.
///
/// See [`Product::segments()`](crate::Product::segments).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    text: String,
    ugc: Ugc,
    events: Vec<Event>,
    forecasts: Vec<String>,
    headlines: Vec<String>,
}

impl Segment {
    /// Scan one segment of text
    ///
    /// `index` is the segment's position in the product body. Returns
    /// `None` if the segment must be discarded. Every problem is
    /// appended to `issues`.
    pub(crate) fn scan(
        index: usize,
        text: &str,
        short_fuse_headlines: bool,
        issues: &mut Vec<Issue>,
    ) -> Option<Self> {
        let ugc_range = match Ugc::find(text) {
            Some(range) => range,
            None => {
                warn!("segment {}: no UGC; discarding", index);
                issues.push(Issue::SegmentDiscarded { segment: index });
                return None;
            }
        };

        let ugc = match Ugc::decode(&text[ugc_range]) {
            Ok(ugc) => ugc,
            Err(e) => {
                warn!("segment {}: bad UGC ({}); discarding", index, e);
                issues.push(Issue::BadGeoCode {
                    segment: index,
                    source: e,
                });
                return None;
            }
        };

        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();

        let events = scan_events(index, &ugc, &lines, issues);
        let forecasts = text::forecasts(&lines);
        let mut headlines = text::headlines(&lines);
        if short_fuse_headlines {
            headlines.extend(text::short_fuse_headlines(&lines));
        }

        debug!(
            "segment {}: {} areas, {} events, {} forecasts, {} headlines",
            index,
            ugc.areas().len(),
            events.len(),
            forecasts.len(),
            headlines.len()
        );

        Some(Self {
            text: text.to_owned(),
            ugc,
            events,
            forecasts,
            headlines,
        })
    }

    /// The segment's UGC
    pub fn ugc(&self) -> &Ugc {
        &self.ugc
    }

    /// Events, in textual order
    ///
    /// Many segments, like those of zone forecasts, have no events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Forecast paragraphs, in textual order
    ///
    /// Forecasts begin with a period, a time period name, and an
    /// ellipsis, like
    ///
    /// ```txt
    /// .TODAY...SUNNY. HIGHS IN THE LOWER 90S.
    /// ```
    ///
    /// Each forecast is folded onto a single line. They are usually
    /// ordered from nearest to farthest in time.
    pub fn forecasts(&self) -> &[String] {
        &self.forecasts
    }

    /// Headlines, in textual order
    ///
    /// Headlines are bounded by ellipses, like
    ///
    /// ```txt
    /// ...HEAT ADVISORY IN EFFECT UNTIL 8 PM EDT THIS EVENING...
    /// ```
    ///
    /// Each headline is folded onto a single line. Any synthesized
    /// short-fuse headlines follow the conventional ones.
    pub fn headlines(&self) -> &[String] {
        &self.headlines
    }

    /// Complete segment text, without the `$$` terminator
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text.fmt(f)
    }
}

// Event correlation state
//
// A P-VTEC line opens a new event, closing any previous one. An
// H-VTEC line attaches to the open event. State resets for every
// segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    // No event is open
    NoOpenEvent,

    // The last event in the list is open
    EventOpen,
}

// Correlate VTEC lines with the segment's UGC
fn scan_events(index: usize, ugc: &Ugc, lines: &[&str], issues: &mut Vec<Issue>) -> Vec<Event> {
    let mut events: Vec<Event> = Vec::new();
    let mut state = State::NoOpenEvent;

    for &line in lines {
        if Pvtec::is_valid(line) {
            match Pvtec::decode(line) {
                Ok(pvtec) => {
                    events.push(Event::new(ugc.clone(), pvtec));
                    state = State::EventOpen;
                }
                Err(e) => {
                    // any H-VTEC which follows belongs to this line
                    debug!("segment {}: skipping P-VTEC \"{}\": {}", index, line, e);
                    issues.push(Issue::BadEventLine {
                        segment: index,
                        line: line.to_owned(),
                        source: e,
                    });
                    state = State::NoOpenEvent;
                }
            }
        } else if Hvtec::is_valid(line) {
            match (state, events.last_mut()) {
                (State::EventOpen, Some(evt)) => match Hvtec::decode(line) {
                    Ok(hvtec) => evt.attach(hvtec),
                    Err(e) => {
                        debug!("segment {}: skipping H-VTEC \"{}\": {}", index, line, e);
                        issues.push(Issue::BadEventLine {
                            segment: index,
                            line: line.to_owned(),
                            source: e,
                        });
                    }
                },
                _ => {
                    debug!("segment {}: orphan H-VTEC \"{}\"", index, line);
                    issues.push(Issue::OrphanHydrologicLine {
                        segment: index,
                        line: line.to_owned(),
                    });
                }
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    const UGC: &str = "NCZ001>003-142030-";
    const PVTEC_NEW: &str = "/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/";
    const PVTEC_EXT: &str = "/O.EXT.KBMX.FL.W.0097.041224T0300Z-041227T0300Z/";
    const HVTEC: &str = "/DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/";

    #[test]
    fn test_scan_events() {
        let ugc = Ugc::decode(UGC).unwrap();
        let mut issues = Vec::new();

        let events = scan_events(0, &ugc, &[UGC, PVTEC_NEW, HVTEC, PVTEC_EXT], &mut issues);
        assert_eq!(2, events.len());
        assert!(events[0].hvtec().is_some());
        assert!(events[1].hvtec().is_none());
        assert!(issues.is_empty());

        // H-VTEC attaches to the most recent event
        let events = scan_events(0, &ugc, &[PVTEC_NEW, PVTEC_EXT, HVTEC], &mut issues);
        assert!(events[0].hvtec().is_none());
        assert!(events[1].hvtec().is_some());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_scan_events_orphan() {
        let ugc = Ugc::decode(UGC).unwrap();
        let mut issues = Vec::new();

        let events = scan_events(4, &ugc, &[HVTEC, PVTEC_NEW], &mut issues);
        assert_eq!(1, events.len());
        assert!(events[0].hvtec().is_none());
        assert_eq!(
            issues,
            vec![Issue::OrphanHydrologicLine {
                segment: 4,
                line: HVTEC.to_owned()
            }]
        );
    }

    #[test]
    fn test_scan() {
        let mut issues = Vec::new();
        let text = format!("{}\n{}\n{}\n\n...FLOOD WARNING...", UGC, PVTEC_NEW, HVTEC);
        let seg = Segment::scan(0, &text, true, &mut issues).expect("discarded");
        assert_eq!(UGC, seg.ugc().raw());
        assert_eq!(1, seg.events().len());
        assert_eq!(seg.headlines(), &["...FLOOD WARNING..."]);
        assert_eq!(text, seg.to_string());
        assert!(issues.is_empty());

        assert_eq!(None, Segment::scan(1, "NO CODES HERE", true, &mut issues));
        assert_eq!(issues, vec![Issue::SegmentDiscarded { segment: 1 }]);
    }

    #[test]
    fn test_scan_multiline_ugc() {
        let mut issues = Vec::new();
        let text = "NCZ001>003-\nVAZ007-142030-\nPERSON-WARREN-";
        let seg = Segment::scan(0, text, true, &mut issues).expect("discarded");
        assert_eq!(
            seg.ugc().areas(),
            &["NCZ001", "NCZ002", "NCZ003", "VAZ007"]
        );
        assert!(seg.events().is_empty());
    }
}
