//! Product printing
//!
//! Each segment prints as a block:
//!
//! ```txt
//! segment 1: NCZ007 NCZ008 NCZ009 (expires 2006-07-14T20:00Z)
//!   event: Heat Advisory, New [KRAH.HT.Y.0003] 2006-07-14T16:00Z to 2006-07-15T00:00Z
//!   headline: ...HEAT ADVISORY IN EFFECT FROM NOON TODAY TO 8 PM EDT THIS EVENING...
//! ```

use std::fmt::{self, Write};

use anyhow::Context;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use nwscode::{Event, Hvtec, Product, ProductParser, RelativeTime, Segment};

use crate::cli::Args;

/// Output time format
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// Run the application
///
/// Parses the product `text` with the given `parser` and prints it,
/// unless the user has asked for quiet. Relative times are resolved
/// against `reference`. Every recoverable issue is logged.
pub fn run(
    args: &Args,
    parser: &ProductParser,
    reference: &DateTime<Utc>,
    text: &str,
) -> Result<(), anyhow::Error> {
    let product = parser
        .parse(text)
        .context("Unable to decode text product")?;

    for issue in product.issues() {
        warn!("{}", issue);
    }
    debug!("decoded {} segments", product.segments().len());

    if !args.quiet {
        print!("{}", render(&product, reference)?);
    }

    Ok(())
}

// Render the whole product
fn render(product: &Product, reference: &DateTime<Utc>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let hdr = product.header();

    writeln!(
        out,
        "{}: {} from {}, issued {}",
        hdr.awips(),
        hdr.awips().category(),
        hdr.wmo().station(),
        relative_time(hdr.wmo().issuance(), reference)
    )?;

    for (num, seg) in product.segments().iter().enumerate() {
        render_segment(&mut out, num + 1, seg, reference)?;
    }

    Ok(out)
}

fn render_segment(
    out: &mut String,
    num: usize,
    seg: &Segment,
    reference: &DateTime<Utc>,
) -> fmt::Result {
    writeln!(
        out,
        "segment {}: {} (expires {})",
        num,
        seg.ugc().areas().join(" "),
        relative_time(seg.ugc().expiration(), reference)
    )?;

    for evt in seg.events() {
        render_event(out, evt)?;
    }
    for headline in seg.headlines() {
        writeln!(out, "  headline: {}", headline)?;
    }
    for forecast in seg.forecasts() {
        writeln!(out, "  forecast: {}", forecast)?;
    }
    Ok(())
}

fn render_event(out: &mut String, evt: &Event) -> fmt::Result {
    let pv = evt.pvtec();
    let test = if pv.fixed_id().is_test() { " (TEST)" } else { "" };

    writeln!(
        out,
        "  event: {} {}, {} [{}] {} to {}{}",
        pv.phenomenon(),
        pv.significance(),
        pv.action(),
        pv.event_id(),
        vtec_time(pv.begin()),
        vtec_time(pv.end()),
        test
    )?;

    match evt.hvtec() {
        Some(hv) => render_flood(out, hv),
        None => Ok(()),
    }
}

fn render_flood(out: &mut String, hv: &Hvtec) -> fmt::Result {
    let site = if hv.is_point() { hv.site() } else { "areal" };
    writeln!(
        out,
        "    flood: {}, {} severity, {}; crest {}; {}",
        site,
        hv.severity(),
        hv.cause(),
        vtec_time(hv.flood_crest()),
        hv.record_status()
    )
}

// Format an absolute time, which may be untimed
fn vtec_time(tm: Option<DateTime<Utc>>) -> String {
    match tm {
        Some(tm) => tm.format(TIME_FORMAT).to_string(),
        None => "(untimed)".to_owned(),
    }
}

// Resolve and format a relative time
fn relative_time(rel: RelativeTime, reference: &DateTime<Utc>) -> String {
    match rel.resolve(reference) {
        Ok(tm) => tm.format(TIME_FORMAT).to_string(),
        Err(e) => {
            warn!("{}: {}", rel, e);
            rel.to_string()
        }
    }
}
