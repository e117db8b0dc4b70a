//! AWIPS product identifier

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::code::{DecodeError, FieldValue, NwsCode};
use crate::productcodes::lookup_category;

lazy_static! {
    // NNNxxx
    static ref RE: Regex =
        Regex::new(r"\A([A-Z0-9]{3})([A-Z ]{3})\z").expect("bad AWIPS ID regexp");
}

/// AWIPS product identifier
///
/// The second line of an NWS text product. The first three
/// characters name the product category, and the last three are
/// a designator which is usually the issuing office.
///
/// ```
/// use nwscode::{AwipsId, NwsCode};
///
/// let awips = AwipsId::decode("ZFPAFG").expect("bad AWIPS ID");
/// assert_eq!("ZFP", awips.category_code());
/// assert_eq!("ZONE FORECAST PRODUCT", awips.category());
/// assert_eq!("AFG", awips.designator());
/// ```
///
/// Short designators are padded with spaces to three characters.
/// The category must be known. An unknown category fails with
/// [`DecodeError::UnknownCode`].
///
/// ```
/// # use nwscode::{AwipsId, DecodeError, NwsCode};
/// assert_eq!("PS ", AwipsId::decode("NPWPS ").unwrap().designator());
/// assert!(matches!(
///     AwipsId::decode("QQQAFG"),
///     Err(DecodeError::UnknownCode { field: "category", .. })
/// ));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AwipsId {
    raw: String,
    category_code: String,
    category: &'static str,
    designator: String,
}

impl AwipsId {
    /// Product category description, like `ZONE FORECAST PRODUCT`
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Three-character product category, like `ZFP`
    pub fn category_code(&self) -> &str {
        &self.category_code
    }

    /// Three-character designator, like `AFG`
    pub fn designator(&self) -> &str {
        &self.designator
    }
}

impl NwsCode for AwipsId {
    fn pattern() -> &'static Regex {
        &RE
    }

    fn decode(raw: &str) -> Result<Self, DecodeError> {
        let caps = RE
            .captures(raw)
            .ok_or_else(|| DecodeError::Malformed(raw.to_owned()))?;

        let category_code = &caps[1];
        let category =
            lookup_category(category_code).ok_or_else(|| DecodeError::UnknownCode {
                field: "category",
                value: category_code.to_owned(),
            })?;

        Ok(Self {
            raw: raw.to_owned(),
            category_code: category_code.to_owned(),
            category,
            designator: caps[2].to_owned(),
        })
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "raw" => Some(FieldValue::Text(&self.raw)),
            "category" => Some(FieldValue::Text(self.category)),
            "designator" => Some(FieldValue::Text(&self.designator)),
            _ => None,
        }
    }
}

impl FromStr for AwipsId {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for AwipsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.raw.fmt(f)
    }
}
