//! Absolute time as an integer nanosecond count from J2000.
//!
//! [`Time`] stores a signed 64-bit count of nanoseconds since the J2000.0
//! epoch (JD 2451545.0, 2000-01-01 12:00:00 on a continuous UTC-like
//! timescale without leap seconds). That gives roughly ±292 years of range
//! at exact nanosecond resolution.
//!
//! # Rounding
//!
//! Real-valued inputs (seconds, Julian Dates, [`Duration`]s) are rounded to
//! the nearest nanosecond, ties away from zero, at the moment they meet a
//! `Time`. The stored integer is never rounded again, so equality and
//! ordering are exact.
//!
//! ```
//! use simcore_time::{Duration, Time, UtcCalendar};
//!
//! let epoch = Time::from_utc_calendar(&UtcCalendar::new(2000, 1, 1, 12, 0, 0.0))?;
//! assert_eq!(epoch, Time::J2000);
//!
//! let later = epoch.checked_add(Duration::from_hours(6.0))?;
//! assert_eq!(later.julian_date(), 2451545.25);
//! assert_eq!((later - epoch).seconds(), 21_600.0);
//! # Ok::<(), simcore_time::TimeError>(())
//! ```
//!
//! # Overflow
//!
//! Conversions that would leave the `i64` nanosecond range fail with
//! [`TimeError::Overflow`]. The check runs on the rounded real value, before
//! it is truncated to an integer, so values never wrap.

use crate::julian::{calendar_to_julian_date, julian_to_modified, modified_to_julian, J2000_JD};
use crate::parsing::parse_iso8601;
use crate::{Duration, TimeError, TimeResult, UtcCalendar};
use simcore_core::constants::{
    NANOSECONDS_PER_SECOND_F64, SECONDS_PER_DAY_F64, SECONDS_PER_NANOSECOND_F64,
};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// `i64::MIN as f64` is exactly -2^63 and fits.
const MIN_NS_F64: f64 = i64::MIN as f64;
/// `i64::MAX as f64` rounds up to 2^63, which does not fit; used as an exclusive bound.
const MAX_NS_F64_EXCLUSIVE: f64 = i64::MAX as f64;

/// An instant on the J2000 nanosecond grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    ns_since_j2000: i64,
}

impl Time {
    /// The J2000.0 epoch.
    pub const J2000: Time = Time { ns_since_j2000: 0 };

    pub const fn j2000() -> Self {
        Self::J2000
    }

    /// Creates a time from seconds since J2000, rounded to the nearest nanosecond.
    pub fn from_seconds_since_j2000(seconds: f64) -> TimeResult<Self> {
        Ok(Self::from_ns_since_j2000(seconds_to_ns(
            seconds,
            "Time::from_seconds_since_j2000",
        )?))
    }

    pub const fn from_ns_since_j2000(ns: i64) -> Self {
        Self { ns_since_j2000: ns }
    }

    pub fn from_julian_date(jd: f64) -> TimeResult<Self> {
        let days = jd - J2000_JD;
        let seconds = days * SECONDS_PER_DAY_F64;
        Self::from_seconds_since_j2000(seconds)
    }

    pub fn from_modified_julian_date(mjd: f64) -> TimeResult<Self> {
        Self::from_julian_date(modified_to_julian(mjd))
    }

    /// Creates a time from calendar fields.
    ///
    /// Fails with [`TimeError::InvalidArgument`] when a field is out of range.
    /// The day is checked against [1, 31] only, so February 30th is accepted and
    /// rolls over into March.
    pub fn from_utc_calendar(cal: &UtcCalendar) -> TimeResult<Self> {
        let jd = calendar_to_julian_date(cal)?;
        Self::from_julian_date(jd)
    }

    pub const fn ns_since_j2000(&self) -> i64 {
        self.ns_since_j2000
    }

    pub fn seconds_since_j2000(&self) -> f64 {
        self.ns_since_j2000 as f64 * SECONDS_PER_NANOSECOND_F64
    }

    pub fn julian_date(&self) -> f64 {
        J2000_JD + self.seconds_since_j2000() / SECONDS_PER_DAY_F64
    }

    pub fn modified_julian_date(&self) -> f64 {
        julian_to_modified(self.julian_date())
    }

    /// Returns `self + duration`, or [`TimeError::Overflow`] if the result leaves the grid.
    pub fn checked_add(self, duration: Duration) -> TimeResult<Self> {
        let delta = seconds_to_ns(duration.seconds, "Time::checked_add")?;
        self.ns_since_j2000
            .checked_add(delta)
            .map(Self::from_ns_since_j2000)
            .ok_or_else(|| sum_overflow("Time::checked_add", self, duration))
    }

    /// Returns `self - duration`, or [`TimeError::Overflow`] if the result leaves the grid.
    pub fn checked_sub(self, duration: Duration) -> TimeResult<Self> {
        let delta = seconds_to_ns(duration.seconds, "Time::checked_sub")?;
        self.ns_since_j2000
            .checked_sub(delta)
            .map(Self::from_ns_since_j2000)
            .ok_or_else(|| sum_overflow("Time::checked_sub", self, duration))
    }

    /// Elapsed time from `earlier` to `self`; negative if `earlier` is later.
    ///
    /// The nanosecond counts are subtracted as integers before scaling to
    /// seconds, so small gaps between large times keep full precision.
    pub fn duration_since(self, earlier: Time) -> Duration {
        let diff = self.ns_since_j2000 as i128 - earlier.ns_since_j2000 as i128;
        Duration::from_seconds(diff as f64 * SECONDS_PER_NANOSECOND_F64)
    }
}

impl Sub for Time {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.duration_since(rhs)
    }
}

/// Formats as signed nanoseconds from the epoch, e.g. `J2000+1500000000ns`.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J2000{:+}ns", self.ns_since_j2000)
    }
}

/// Parses ISO 8601 calendar text, then converts it like [`Time::from_utc_calendar`].
impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        Self::from_utc_calendar(&parse_iso8601(s)?)
    }
}

/// Rounds seconds to the nearest nanosecond (ties away from zero).
fn seconds_to_ns(seconds: f64, operation: &str) -> TimeResult<i64> {
    let ns = (seconds * NANOSECONDS_PER_SECOND_F64).round();
    // NaN is not contained in any range.
    if (MIN_NS_F64..MAX_NS_F64_EXCLUSIVE).contains(&ns) {
        Ok(ns as i64)
    } else {
        tracing::debug!(seconds, operation, "nanosecond conversion out of range");
        Err(TimeError::overflow(
            operation,
            &format!("{} s does not fit in a signed 64-bit nanosecond count", seconds),
        ))
    }
}

fn sum_overflow(operation: &str, time: Time, duration: Duration) -> TimeError {
    tracing::debug!(%time, %duration, operation, "time arithmetic out of range");
    TimeError::overflow(
        operation,
        &format!("{} with {} leaves the nanosecond range", time, duration),
    )
}
