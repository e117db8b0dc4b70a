//! # nwscode: NWS Text Product Decoders
//!
//! This crate decodes the machine-readable codes which are embedded
//! in National Weather Service (NWS) text products, and assembles
//! whole products into headers, segments, events, and footers.
//!
//! For a complete CLI binary, see `nwsdec`.
//!
//! ## Codes
//!
//! Every code implements [`NwsCode`]. Codes are matched against a
//! fixed pattern which must match the *entire* input, and any
//! interpreted fields are looked up in closed vocabularies. Unknown
//! values are errors, never passed through.
//!
//! | Type          | Example                                                   |
//! |---------------|-----------------------------------------------------------|
//! | [`Ugc`]       | `NCZ001>003-VAZ007-142030-`                               |
//! | [`Pvtec`]     | `/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/`        |
//! | [`Hvtec`]     | `/DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/`  |
//! | [`WmoHeader`] | `FZAK52 PAFG 271242 AAA`                                  |
//! | [`WmoFile`]   | `FZAK52PAFG`                                              |
//! | [`AwipsId`]   | `ZFPAFG`                                                  |
//!
//! ```
//! use nwscode::{NwsCode, Phenomenon, Pvtec, Significance};
//!
//! let pv = Pvtec::decode("/O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/")
//!     .expect("fail to parse");
//!
//! // what kind of event is it?
//! assert_eq!(Phenomenon::Flood, pv.phenomenon());
//! assert_eq!(Significance::Warning, pv.significance());
//!
//! //   Display to the user
//! assert_eq!("Flood Warning", &format!("{} {}", pv.phenomenon(), pv.significance()));
//!
//! //   or as the original codes
//! assert_eq!("FL.W", &format!("{:#}.{:#}", pv.phenomenon(), pv.significance()));
//! ```
//!
//! ## Products
//!
//! [`Product::parse()`] splits a complete product into its
//! [`Header`], [`Segment`]s, and [`Footer`]. Each segment pairs its
//! UGC with every P-VTEC line it contains to form [`Event`]s, and
//! extracts forecast and headline text.
//!
//! ```
//! use nwscode::Product;
//!
//! let product = Product::parse("\
//! WGUS44 KBMX 261800
//! FLWBMX
//!
//! ALC007-065-271800-
//! /O.NEW.KBMX.FL.W.0098.041226T1800Z-041227T0000Z/
//! /DEMI4.1.ER.030509T2100Z.030510T0300Z.030510T0900Z.NO/
//!
//! $$
//! ").expect("fail to parse");
//!
//! let event = &product.segments()[0].events()[0];
//! assert_eq!(event.areas(), &["ALC007", "ALC065"]);
//! assert_eq!(98, event.etn());
//! assert_eq!("DEMI4", event.hvtec().unwrap().site());
//! ```
//!
//! Segments which cannot be decoded are skipped rather than failing
//! the whole product. See [`Product::issues()`].
//!
//! ## Times
//!
//! UGC expirations and WMO issuance times are [`RelativeTime`]s,
//! which omit the month and year. This crate never reads the system
//! clock. Use [`resolve()`] with a reference time of your choosing,
//! usually the time the product was received.
//!
//! ## MSRV Policy
//!
//! A minimum supported rust version (MSRV) increase will be treated as a minor
//! version bump.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod awipsid;
mod code;
mod product;
mod productcodes;
mod time;
mod ugc;
mod vtec;
mod wmo;

pub use awipsid::AwipsId;
pub use code::{DecodeError, FieldValue, NwsCode};
pub use product::{
    AssemblyError, Event, Footer, Header, Issue, Product, ProductParser, ProductParserBuilder,
    Segment,
};
pub use time::{resolve, InvalidDateErr, RelativeTime};
pub use ugc::Ugc;
pub use vtec::{
    Action, FixedIdentifier, FloodSeverity, Hvtec, ImmediateCause, Phenomenon, Pvtec,
    RecordStatus, Significance,
};
pub use wmo::{WmoFile, WmoHeader};
