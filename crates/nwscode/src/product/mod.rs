//! NWS text products
//!
//! A complete text product, or bulletin, looks like this:
//!
//! ```txt
//! WWUS72 KRAH 141200            ← WMO heading
//! NPWRAH                        ← AWIPS identifier
//!
//! URGENT - WEATHER MESSAGE
//! …
//! NCZ007>009-021-142000-        ← UGC: first segment begins
//! /O.NEW.KRAH.HT.Y.0003.060714T1600Z-060715T0000Z/
//! …
//! $$                            ← end of segment
//!
//! NCZ010-011-142000-            ← second segment
//! …
//! $$
//!
//! SMITH                         ← footer
//! ```
//!
//! Everything before the first UGC is the [`Header`]. The rest of
//! the product is split on `$$` lines into [`Segment`]s, and the
//! text after the last `$$` is the [`Footer`].
//!
//! Parsing is two-tier. A product without any UGC, or with a
//! header that does not decode, fails entirely with an
//! [`AssemblyError`]. Problems within a single segment or line are
//! recovered: the segment or line is skipped, and an [`Issue`] is
//! recorded in the [`Product`].

mod event;
mod parser;
mod segment;
mod text;

use std::fmt;

use thiserror::Error;

use crate::awipsid::AwipsId;
use crate::code::{DecodeError, NwsCode};
use crate::wmo::WmoHeader;

pub use event::Event;
pub use parser::{ProductParser, ProductParserBuilder};
pub use segment::Segment;

/// A product could not be assembled
///
/// No partial product is available when assembly fails.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AssemblyError {
    /// The product does not contain a UGC
    #[error("product does not contain a UGC code")]
    NoGeoCode,

    /// The WMO heading or AWIPS identifier failed to decode
    #[error("bad product header line \"{line}\": {source}")]
    BadHeader {
        /// The offending header line
        line: String,

        /// Why it failed
        source: DecodeError,
    },
}

/// A non-fatal problem encountered during assembly
///
/// `segment` is the zero-based position of the segment text
/// within the product body, counting every `$$`-terminated piece.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    /// The segment has no UGC and was discarded
    #[error("segment {segment}: no UGC; discarded")]
    SegmentDiscarded {
        /// Segment position
        segment: usize,
    },

    /// The segment's UGC did not decode, and the segment was discarded
    #[error("segment {segment}: bad UGC; discarded: {source}")]
    BadGeoCode {
        /// Segment position
        segment: usize,

        /// Why the UGC failed
        source: DecodeError,
    },

    /// An H-VTEC line preceded every P-VTEC line and was skipped
    #[error("segment {segment}: H-VTEC without P-VTEC: \"{line}\"")]
    OrphanHydrologicLine {
        /// Segment position
        segment: usize,

        /// The skipped line
        line: String,
    },

    /// A VTEC line did not decode and was skipped
    #[error("segment {segment}: bad VTEC line \"{line}\": {source}")]
    BadEventLine {
        /// Segment position
        segment: usize,

        /// The skipped line
        line: String,

        /// Why the line failed
        source: DecodeError,
    },
}

/// A parsed NWS text product
///
/// Parse with [`Product::parse()`], or with a configured
/// [`ProductParser`].
///
/// ```
/// use nwscode::Product;
///
/// let text = "\
/// WWUS72 KRAH 141200
/// NPWRAH
///
/// NCZ007>009-142000-
/// /O.NEW.KRAH.HT.Y.0003.060714T1600Z-060715T0000Z/
///
/// ...HEAT ADVISORY IN EFFECT FROM NOON TODAY TO 8 PM EDT THIS EVENING...
///
/// $$
/// ";
///
/// let product = Product::parse(text).expect("bad product");
/// assert_eq!("NON-PRECIPITATION WARNINGS, WATCHES, ADVISORIES", product.header().awips().category());
///
/// let segment = &product.segments()[0];
/// assert_eq!(segment.ugc().areas(), &["NCZ007", "NCZ008", "NCZ009"]);
/// assert_eq!("Heat", segment.events()[0].phenomenon().as_display_str());
/// assert_eq!(
///     segment.headlines(),
///     &["...HEAT ADVISORY IN EFFECT FROM NOON TODAY TO 8 PM EDT THIS EVENING..."]
/// );
/// assert!(product.issues().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    header: Header,
    segments: Vec<Segment>,
    footer: Footer,
    issues: Vec<Issue>,
}

impl Product {
    /// Parse a product with the default options
    ///
    /// Equivalent to `ProductParser::default().parse(text)`.
    pub fn parse(text: &str) -> Result<Self, AssemblyError> {
        ProductParser::default().parse(text)
    }

    /// Product header
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Valid segments, in textual order
    ///
    /// Segments which were discarded are not present. See
    /// [`issues()`](Product::issues).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Product footer
    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    /// Non-fatal problems, in the order encountered
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for seg in &self.segments {
            write!(f, "\n{}", seg)?;
        }
        write!(f, "\n{}", self.footer)
    }
}

/// Product header
///
/// The header text runs from the start of the product to the
/// first UGC. Its first line is the [`WmoHeader`], and its second
/// is the [`AwipsId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    text: String,
    wmo: WmoHeader,
    awips: AwipsId,
}

impl Header {
    /// Decode the header text
    pub(crate) fn parse(text: &str) -> Result<Self, AssemblyError> {
        let mut lines = text.lines();

        let wmo_line = lines.next().unwrap_or_default().trim_end();
        let wmo = WmoHeader::decode(wmo_line).map_err(|source| AssemblyError::BadHeader {
            line: wmo_line.to_owned(),
            source,
        })?;

        // "NPWPS " is a valid AWIPS ID, so only overlong lines are trimmed
        let awips_line = lines.next().unwrap_or_default();
        let awips_line = if awips_line.len() > 6 {
            awips_line.trim_end()
        } else {
            awips_line
        };
        let awips = AwipsId::decode(awips_line).map_err(|source| AssemblyError::BadHeader {
            line: awips_line.to_owned(),
            source,
        })?;

        Ok(Self {
            text: text.to_owned(),
            wmo,
            awips,
        })
    }

    /// WMO abbreviated heading
    pub fn wmo(&self) -> &WmoHeader {
        &self.wmo
    }

    /// AWIPS product identifier
    pub fn awips(&self) -> &AwipsId {
        &self.awips
    }

    /// Complete header text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text.fmt(f)
    }
}

/// Product footer
///
/// Any text following the last `$$`. Usually the forecaster's
/// name or initials. The footer is not decoded and may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Footer {
    text: String,
}

impl Footer {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_owned(),
        }
    }

    /// Footer text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text.fmt(f)
    }
}
