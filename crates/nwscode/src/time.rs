//! Relative and absolute code times

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

use crate::code::DecodeError;

/// VTEC time meaning "no bound"
pub(crate) const UNTIMED: &str = "000000T0000Z";

/// VTEC absolute time format, always UTC
const VTEC_TIME_FORMAT: &str = "%y%m%dT%H%MZ";

/// A relative time could not be resolved to a calendar date
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[error("relative time not valid for its reference time")]
pub struct InvalidDateErr {}

/// A day-of-month, hour, and minute
///
/// UGC expiration times and WMO issuance times omit the month
/// and year. They are meaningless without some notion of when
/// the product was issued or received. Use
/// [`resolve()`](RelativeTime::resolve) to obtain an absolute
/// UTC time.
///
/// `RelativeTime` is deliberately not ordered. Two relative times
/// may only be compared after both are resolved against the same
/// reference.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use nwscode::RelativeTime;
///
/// let rel = RelativeTime::new(14, 20, 30);
/// let now = Utc.with_ymd_and_hms(2006, 7, 12, 8, 0, 0).unwrap();
/// assert_eq!(
///     rel.resolve(&now).unwrap(),
///     Utc.with_ymd_and_hms(2006, 7, 14, 20, 30, 0).unwrap()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RelativeTime {
    day: u8,
    hour: u8,
    minute: u8,
}

impl RelativeTime {
    /// New relative time
    ///
    /// The fields are not validated until the time is
    /// [resolved](RelativeTime::resolve).
    pub fn new(day: u8, hour: u8, minute: u8) -> Self {
        Self { day, hour, minute }
    }

    /// Day of month (UTC)
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour (UTC, 24-hour)
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Resolve to an absolute UTC time
    ///
    /// See [`resolve()`](crate::resolve).
    pub fn resolve(&self, reference: &DateTime<Utc>) -> Result<DateTime<Utc>, InvalidDateErr> {
        resolve(self, reference)
    }

    /// Parse from the six-digit `DDHHMM` form
    ///
    /// The caller is responsible for checking that `s` is
    /// six ASCII digits.
    pub(crate) fn from_ddhhmm(s: &str) -> Option<Self> {
        Some(Self::new(
            s.get(0..2)?.parse().ok()?,
            s.get(2..4)?.parse().ok()?,
            s.get(4..6)?.parse().ok()?,
        ))
    }
}

impl fmt::Display for RelativeTime {
    /// Printable string, like "`14/2030Z`"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}{:02}Z", self.day, self.hour, self.minute)
    }
}

/// Resolve a relative time against a reference time
///
/// The `reference` is usually the current UTC time, or the time
/// at which the product was received. The relative time is placed
/// in the reference's month and year. If its day of month is
/// *earlier* than the reference day, it is assumed to refer to
/// the following month, with the year rolling over after
/// December.
///
/// An error is returned if the result is not a valid date or
/// time, such as the 31st of a 30-day month.
///
/// This function never consults the system clock.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use nwscode::{resolve, RelativeTime};
///
/// let reference = Utc.with_ymd_and_hms(2006, 12, 31, 22, 0, 0).unwrap();
/// assert_eq!(
///     resolve(&RelativeTime::new(1, 6, 0), &reference).unwrap(),
///     Utc.with_ymd_and_hms(2007, 1, 1, 6, 0, 0).unwrap()
/// );
/// ```
pub fn resolve(
    relative: &RelativeTime,
    reference: &DateTime<Utc>,
) -> Result<DateTime<Utc>, InvalidDateErr> {
    let (mut year, mut month) = (reference.year(), reference.month());
    if (relative.day as u32) < reference.day() {
        // issued near a month boundary, refers to next month
        if month == 12 {
            month = 1;
            year = year.saturating_add(1);
        } else {
            month += 1;
        }
    }

    Utc.with_ymd_and_hms(
        year,
        month,
        relative.day as u32,
        relative.hour as u32,
        relative.minute as u32,
        0,
    )
    .single()
    .ok_or(InvalidDateErr {})
}

/// Parse a VTEC time like `041226T1800Z`
///
/// The sentinel `000000T0000Z` decodes to `None`. Times which are
/// not valid calendar dates fail as
/// [`Malformed`](DecodeError::Malformed) with the `raw` code.
pub(crate) fn parse_vtec_time(
    time: &str,
    raw: &str,
) -> Result<Option<DateTime<Utc>>, DecodeError> {
    if time == UNTIMED {
        return Ok(None);
    }

    let naive = NaiveDateTime::parse_from_str(time, VTEC_TIME_FORMAT)
        .map_err(|_| DecodeError::Malformed(raw.to_owned()))?;
    Ok(Some(Utc.from_utc_datetime(&naive)))
}
