//! Product assembly

use log::debug;

use crate::code::NwsCode;
use crate::ugc::Ugc;

use super::segment::Segment;
use super::{AssemblyError, Footer, Header, Product};

/// Segment terminator line
const SEGMENT_END: &str = "$$";

/// Builds a product parser
///
/// The defaults are suitable for most products.
///
/// ```
/// use nwscode::ProductParserBuilder;
///
/// let parser = ProductParserBuilder::new()
///     .with_short_fuse_headlines(false)
///     .build();
/// assert!(!parser.short_fuse_headlines());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductParserBuilder {
    short_fuse_headlines: bool,
}

impl ProductParserBuilder {
    /// New builder with default options
    pub fn new() -> Self {
        Self {
            short_fuse_headlines: true,
        }
    }

    /// Build the parser
    pub fn build(&self) -> ProductParser {
        ProductParser::from(self)
    }

    /// Synthesize headlines for short-fuse products
    ///
    /// Severe thunderstorm, tornado, flood, and flash flood
    /// products carry no conventional headline. Instead, they
    /// contain a bulleted line like
    ///
    /// ```txt
    /// * SEVERE THUNDERSTORM WARNING FOR...
    ///   NORTHWESTERN WAKE COUNTY IN CENTRAL NORTH CAROLINA...
    /// ```
    ///
    /// When enabled, a headline is built from the bullet and
    /// the area lines which follow it. The result is
    /// best-effort. Enabled by default.
    pub fn with_short_fuse_headlines(&mut self, enable: bool) -> &mut Self {
        self.short_fuse_headlines = enable;
        self
    }

    /// Short-fuse headline synthesis enabled?
    pub fn short_fuse_headlines(&self) -> bool {
        self.short_fuse_headlines
    }
}

impl std::default::Default for ProductParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses NWS text products
///
/// Create with a [`ProductParserBuilder`]. A parser holds only its
/// options, so it may be reused for any number of products and
/// shared between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductParser {
    short_fuse_headlines: bool,
}

impl ProductParser {
    /// Parse a product
    ///
    /// Line endings are normalized and surrounding whitespace is
    /// removed before parsing. Fails if the product contains no
    /// UGC or if its header does not decode. Problems with
    /// individual segments or lines are recorded in
    /// [`Product::issues()`].
    pub fn parse(&self, text: &str) -> Result<Product, AssemblyError> {
        let text = text.replace("\r\n", "\n");
        let text = text.trim();

        let ugc_start = Ugc::find(text).ok_or(AssemblyError::NoGeoCode)?.start;
        // trailing spaces may belong to a padded AWIPS ID
        let header = Header::parse(text[..ugc_start].trim_end_matches('\n'))?;
        debug!(
            "product: {} {}",
            header.wmo().designator(),
            header.awips().raw()
        );

        let (pieces, footer) = split_segments(text[ugc_start..].trim());

        let mut segments = Vec::with_capacity(pieces.len());
        let mut issues = Vec::new();
        for (index, piece) in pieces.into_iter().enumerate() {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }

            if let Some(seg) = Segment::scan(index, piece, self.short_fuse_headlines, &mut issues) {
                segments.push(seg);
            }
        }

        debug!(
            "product: {} segments, {} issues",
            segments.len(),
            issues.len()
        );

        Ok(Product {
            header,
            segments,
            footer: Footer::new(footer),
            issues,
        })
    }

    /// Short-fuse headline synthesis enabled?
    pub fn short_fuse_headlines(&self) -> bool {
        self.short_fuse_headlines
    }
}

impl From<&ProductParserBuilder> for ProductParser {
    fn from(cfg: &ProductParserBuilder) -> Self {
        Self {
            short_fuse_headlines: cfg.short_fuse_headlines,
        }
    }
}

impl std::default::Default for ProductParser {
    fn default() -> Self {
        ProductParserBuilder::default().build()
    }
}

// Split the product body on `$$` lines
//
// Returns every `$$`-terminated piece, in order, and whatever text
// follows the last terminator.
fn split_segments(body: &str) -> (Vec<&str>, &str) {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    for line in body.split_inclusive('\n') {
        if line.trim_end() == SEGMENT_END {
            pieces.push(&body[start..pos]);
            start = pos + line.len();
        }
        pos += line.len();
    }

    (pieces, &body[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::code::{DecodeError, FieldValue};
    use crate::product::Issue;
    use crate::vtec::{Action, RecordStatus, Significance};
    use crate::RelativeTime;

    const HEAT_ADVISORY: &str = "\
WWUS72 KRAH 141200
NPWRAH

URGENT - WEATHER MESSAGE
NATIONAL WEATHER SERVICE RALEIGH NC
800 AM EDT MON JUL 14 2006

NCZ007>009-021-142000-
/O.NEW.KRAH.HT.Y.0003.060714T1600Z-060715T0000Z/
PERSON-GRANVILLE-VANCE-DURHAM-
800 AM EDT MON JUL 14 2006

...HEAT ADVISORY IN EFFECT FROM NOON TODAY TO 8 PM EDT THIS EVENING...

THE NATIONAL WEATHER SERVICE HAS ISSUED A HEAT ADVISORY.

$$

NCZ010-011-142000-
/O.NEW.KRAH.HT.Y.0003.060714T1600Z-060715T0000Z/
WARREN-HALIFAX-
800 AM EDT MON JUL 14 2006

...HEAT ADVISORY IN EFFECT FROM NOON
TODAY TO 8 PM EDT THIS EVENING...

$$

SMITH
";

    const FLOOD_WARNING: &str = "\
WGUS44 KBMX 261800
FLWBMX

BULLETIN - EAS ACTIVATION REQUESTED
FLOOD WARNING
NATIONAL WEATHER SERVICE BIRMINGHAM AL
1200 PM CST SUN DEC 26 2004

ALC007-065-271800-
/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/
/DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/
/O.EXT.KBMX.FL.W.0097.041224T0300Z-041227T0300Z/

THE FLOOD WARNING CONTINUES FOR THE CAHABA RIVER.

$$
";

    const ZONE_FORECAST: &str = "\
FPUS51 KRAH 141200
ZFPRAH

ZONE FORECAST PRODUCT
NATIONAL WEATHER SERVICE RALEIGH NC

NCZ007-142000-
PERSON-
INCLUDING THE CITY OF...ROXBORO
800 AM EDT MON JUL 14 2006

.TODAY...SUNNY. HIGHS IN THE
LOWER 90S. SOUTHWEST WINDS 5 TO 10 MPH.
.TONIGHT...MOSTLY CLEAR. LOWS
AROUND 70.

.WEDNESDAY...PARTLY CLOUDY.
$$
";

    const SEVERE_WARNING: &str = "\
WUUS52 KRAH 141900
SVRRAH

NCC183-142000-
/O.NEW.KRAH.SV.W.0120.060714T1900Z-060714T2000Z/

BULLETIN - EAS ACTIVATION REQUESTED
SEVERE THUNDERSTORM WARNING
NATIONAL WEATHER SERVICE RALEIGH NC
300 PM EDT MON JUL 14 2006

THE NATIONAL WEATHER SERVICE IN RALEIGH HAS ISSUED A

* SEVERE THUNDERSTORM WARNING FOR...
  NORTHWESTERN WAKE COUNTY IN CENTRAL NORTH CAROLINA...

* UNTIL 400 PM EDT

$$
";

    #[test]
    fn test_split_segments() {
        let (pieces, footer) = split_segments("A\n$$\nB\n$$ \n\nC");
        assert_eq!(pieces, vec!["A\n", "B\n"]);
        assert_eq!("\nC", footer);

        let (pieces, footer) = split_segments("A\nB");
        assert!(pieces.is_empty());
        assert_eq!("A\nB", footer);

        // not a terminator
        let (pieces, _) = split_segments("A $$\n$$$\n");
        assert!(pieces.is_empty());
    }

    #[test]
    fn test_two_segments() {
        let prod = Product::parse(HEAT_ADVISORY).expect("bad product");
        debug!("{:?}", prod);

        assert_eq!("WWUS72", prod.header().wmo().designator());
        assert_eq!(RelativeTime::new(14, 12, 0), prod.header().wmo().issuance());
        assert_eq!("NPW", prod.header().awips().category_code());
        assert_eq!("SMITH", prod.footer().text());
        assert!(prod.issues().is_empty());

        assert_eq!(2, prod.segments().len());
        for seg in prod.segments() {
            assert_eq!(1, seg.events().len());
            assert!(seg.events()[0].hvtec().is_none());
            assert_eq!(Action::New, seg.events()[0].action());
            assert_eq!(Significance::Advisory, seg.events()[0].significance());
            assert_eq!(seg.ugc(), seg.events()[0].ugc());
            assert!(seg.forecasts().is_empty());
            assert_eq!(
                seg.headlines(),
                &["...HEAT ADVISORY IN EFFECT FROM NOON TODAY TO 8 PM EDT THIS EVENING..."]
            );
        }

        assert_eq!(
            prod.segments()[0].ugc().areas(),
            &["NCZ007", "NCZ008", "NCZ009", "NCZ021"]
        );
        assert_eq!(prod.segments()[1].ugc().areas(), &["NCZ010", "NCZ011"]);
        assert!(prod.segments()[1].text().starts_with("NCZ010-011-142000-\n"));
        assert!(prod.segments()[1].text().ends_with("EVENING..."));
    }

    #[test]
    fn test_hydrologic() {
        let prod = Product::parse(FLOOD_WARNING).expect("bad product");
        assert!(prod.issues().is_empty());
        assert_eq!("", prod.footer().text());

        let seg = &prod.segments()[0];
        assert_eq!(2, seg.events().len());

        let first = &seg.events()[0];
        assert_eq!(98, first.etn());
        let hv = first.hvtec().expect("missing H-VTEC");
        assert_eq!("DEMI4", hv.site());
        assert_eq!(RecordStatus::NotExpected, hv.record_status());
        assert_eq!(Some(FieldValue::Text("DEMI4")), first.field("site"));

        let second = &seg.events()[1];
        assert_eq!(97, second.etn());
        assert_eq!(Action::ExtendedInTime, second.action());
        assert!(second.hvtec().is_none());
        assert_eq!(None, second.field("site"));
    }

    #[test]
    fn test_orphan_hydrologic() {
        let text = FLOOD_WARNING.replace(
            "/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/\n\
             /DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/\n",
            "/DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/\n\
             /O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/\n",
        );
        let prod = Product::parse(&text).expect("bad product");

        let seg = &prod.segments()[0];
        assert_eq!(2, seg.events().len());
        assert!(seg.events().iter().all(|evt| evt.hvtec().is_none()));
        assert_eq!(
            prod.issues(),
            &[Issue::OrphanHydrologicLine {
                segment: 0,
                line: "/DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/".to_owned()
            }]
        );
    }

    #[test]
    fn test_bad_event_line() {
        let text = FLOOD_WARNING.replace("/O.NEW.KBMX.FL.W.", "/O.NEW.KBMX.QQ.W.");
        let prod = Product::parse(&text).expect("bad product");

        // the H-VTEC belonged to the bad line and has nowhere to go
        let seg = &prod.segments()[0];
        assert_eq!(1, seg.events().len());
        assert_eq!(97, seg.events()[0].etn());
        assert_eq!(2, prod.issues().len());
        assert_eq!(
            prod.issues()[0],
            Issue::BadEventLine {
                segment: 0,
                line: "/O.NEW.KBMX.QQ.W.0098.041226T1800Z-041227T0000Z/".to_owned(),
                source: DecodeError::UnknownCode {
                    field: "phenomenon",
                    value: "QQ".to_owned()
                }
            }
        );
        assert!(matches!(
            prod.issues()[1],
            Issue::OrphanHydrologicLine { segment: 0, .. }
        ));
    }

    #[test]
    fn test_forecasts() {
        let prod = Product::parse(ZONE_FORECAST).expect("bad product");
        let seg = &prod.segments()[0];
        assert!(seg.events().is_empty());
        assert!(seg.headlines().is_empty());
        assert_eq!(
            seg.forecasts(),
            &[
                ".TODAY...SUNNY. HIGHS IN THE LOWER 90S. SOUTHWEST WINDS 5 TO 10 MPH.",
                ".TONIGHT...MOSTLY CLEAR. LOWS AROUND 70.",
                ".WEDNESDAY...PARTLY CLOUDY.",
            ]
        );
    }

    #[test]
    fn test_short_fuse() {
        let prod = Product::parse(SEVERE_WARNING).expect("bad product");
        let seg = &prod.segments()[0];
        assert_eq!(1, seg.events().len());
        assert_eq!(
            seg.headlines(),
            &["...SEVERE THUNDERSTORM WARNING FOR NORTHWESTERN WAKE COUNTY IN CENTRAL NORTH CAROLINA..."]
        );

        let parser = ProductParserBuilder::new()
            .with_short_fuse_headlines(false)
            .build();
        let prod = parser.parse(SEVERE_WARNING).expect("bad product");
        assert!(prod.segments()[0].headlines().is_empty());
    }

    #[test]
    fn test_discarded_segments() {
        let text = HEAT_ADVISORY.replace(
            "SMITH",
            "NO AREAS HERE\n$$\n\nNCZ009>007-142000-\nBACKWARDS\n$$\n\nSMITH",
        );
        let prod = Product::parse(&text).expect("bad product");
        assert_eq!(2, prod.segments().len());
        assert_eq!("SMITH", prod.footer().text());
        assert_eq!(
            prod.issues(),
            &[
                Issue::SegmentDiscarded { segment: 2 },
                Issue::BadGeoCode {
                    segment: 3,
                    source: DecodeError::Malformed("NCZ009>007-142000-".to_owned())
                },
            ]
        );
    }

    #[test]
    fn test_padded_awips() {
        let text = "WWUS72 KRAH 141200\nNPWPS \nNCZ007-142000-\n\
                    /O.NEW.KRAH.HT.Y.0003.060714T1600Z-060715T0000Z/\n$$\n";
        let prod = Product::parse(text).expect("bad product");
        assert_eq!("NPWPS ", prod.header().awips().raw());
        assert_eq!("PS ", prod.header().awips().designator());
        assert_eq!("WWUS72 KRAH 141200\nNPWPS ", prod.header().text());
        assert_eq!(1, prod.segments()[0].events().len());

        // also with CRLF line endings
        let prod = Product::parse(&text.replace('\n', "\r\n")).expect("bad product");
        assert_eq!("NPWPS ", prod.header().awips().raw());
    }

    #[test]
    fn test_no_geocode() {
        assert_eq!(
            Err(AssemblyError::NoGeoCode),
            Product::parse("WWUS72 KRAH 141200\nNPWRAH\n\nNOTHING TO SEE\n$$\n")
        );
        assert_eq!(Err(AssemblyError::NoGeoCode), Product::parse(""));
    }

    #[test]
    fn test_bad_header() {
        let text = HEAT_ADVISORY.replace("WWUS72 KRAH 141200", "WWUS72 KRAH 1412");
        assert!(matches!(
            Product::parse(&text),
            Err(AssemblyError::BadHeader { ref line, .. }) if line == "WWUS72 KRAH 1412"
        ));
    }

    #[test]
    fn test_idempotent() {
        let first = Product::parse(HEAT_ADVISORY).expect("bad product");
        let second = Product::parse(HEAT_ADVISORY).expect("bad product");
        assert_eq!(first, second);

        let crlf = Product::parse(&HEAT_ADVISORY.replace('\n', "\r\n")).expect("bad product");
        assert_eq!(first, crlf);
    }

    #[test]
    fn test_display() {
        let prod = Product::parse(HEAT_ADVISORY).expect("bad product");
        let out = prod.to_string();
        assert!(out.starts_with("WWUS72 KRAH 141200\nNPWRAH\n"));
        assert!(out.contains("HEAT ADVISORY.\nNCZ010-011-142000-"));
        assert!(out.ends_with("\nSMITH"));

        let evt = &prod.segments()[0].events()[0];
        assert_eq!(
            "NCZ007>009-021-142000-\n/O.NEW.KRAH.HT.Y.0003.060714T1600Z-060715T0000Z/",
            evt.to_string()
        );
        assert_eq!("NCZ007>009-021-142000-", evt.ugc().raw());
    }
}
