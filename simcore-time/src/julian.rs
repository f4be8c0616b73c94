//! Gregorian calendar to Julian Date.
//!
//! Uses the classical Fliegel & Van Flandern derived formula on the
//! continuous UTC-like timescale (every day is 86400 s):
//!
//! ```text
//! if M <= 2 { Y -= 1; M += 12 }
//! A  = Y / 100                (integer division, truncating)
//! B  = 2 - A + A / 4
//! f  = (h + (m + s / 60) / 60) / 24
//! JD = floor(365.25 (Y + 4716)) + floor(30.6001 (M + 1)) + D + f + B - 1524.5
//! ```
//!
//! The operation order is fixed; rearranging it changes results at century
//! boundaries.

use crate::{TimeError, TimeResult, UtcCalendar};
use simcore_core::constants::{HOURS_PER_DAY_F64, MINUTES_PER_HOUR_F64, MJD_ZERO_POINT};

pub use simcore_core::constants::J2000_JD;

/// Checks field ranges. Day is only checked against [1, 31], whatever the month.
pub fn validate_calendar(cal: &UtcCalendar) -> TimeResult<()> {
    if !(1..=12).contains(&cal.month) {
        return Err(reject(cal, "month", "outside [1, 12]"));
    }
    if !(1..=31).contains(&cal.day) {
        return Err(reject(cal, "day", "outside [1, 31]"));
    }
    if cal.hour > 23 {
        return Err(reject(cal, "hour", "outside [0, 23]"));
    }
    if cal.minute > 59 {
        return Err(reject(cal, "minute", "outside [0, 59]"));
    }
    // Also rejects NaN.
    if !(0.0..60.0).contains(&cal.second) {
        return Err(reject(cal, "second", "outside [0, 60)"));
    }
    Ok(())
}

/// Converts validated calendar fields to a Julian Date.
pub fn calendar_to_julian_date(cal: &UtcCalendar) -> TimeResult<f64> {
    validate_calendar(cal)?;

    // Widened so that years near the i32 limits cannot wrap.
    let mut year = i64::from(cal.year);
    let mut month = i64::from(cal.month);
    let day = cal.day as f64;

    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = year / 100;
    let b = 2 - a + a / 4;

    let day_fraction = (cal.hour as f64
        + (cal.minute as f64 + cal.second / 60.0) / MINUTES_PER_HOUR_F64)
        / HOURS_PER_DAY_F64;

    Ok((365.25 * (year + 4716) as f64).floor()
        + (30.6001 * (month + 1) as f64).floor()
        + day
        + day_fraction
        + b as f64
        - 1524.5)
}

#[inline]
pub fn julian_to_modified(jd: f64) -> f64 {
    jd - MJD_ZERO_POINT
}

#[inline]
pub fn modified_to_julian(mjd: f64) -> f64 {
    mjd + MJD_ZERO_POINT
}

fn reject(cal: &UtcCalendar, field: &str, reason: &str) -> TimeError {
    tracing::debug!(calendar = %cal, field, reason, "rejected calendar fields");
    TimeError::invalid_argument(field, &format!("{} in {}", reason, cal))
}
