//! ISO 8601 text into [`UtcCalendar`] fields.
//!
//! Accepts `YYYY-MM-DDTHH:MM:SS[.fff][Z]` with either `T` or a space between
//! date and time. Month, day, hour and minute may be one or two digits. This
//! layer checks syntax only; field ranges are enforced by the calendar
//! conversion so that the same policy applies to parsed and hand-built input.

use crate::{TimeError, TimeResult, UtcCalendar};

const MAX_ISO8601_LENGTH: usize = 32;

pub fn parse_iso8601(s: &str) -> TimeResult<UtcCalendar> {
    let s = s.trim();

    if s.len() > MAX_ISO8601_LENGTH {
        return Err(reject("iso8601", s, "input too long"));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let (date_part, time_part) = s
        .split_once('T')
        .or_else(|| s.split_once(' '))
        .ok_or_else(|| reject("iso8601", s, "expected YYYY-MM-DDTHH:MM:SS"))?;

    let date: Vec<&str> = date_part.split('-').collect();
    let [year, month, day] = date.as_slice() else {
        return Err(reject("date", date_part, "expected YYYY-MM-DD"));
    };

    let time: Vec<&str> = time_part.split(':').collect();
    let [hour, minute, second] = time.as_slice() else {
        return Err(reject("time", time_part, "expected HH:MM:SS"));
    };

    if year.len() != 4 || !all_digits(year) {
        return Err(reject("year", year, "expected four digits"));
    }
    let year = year
        .parse::<i32>()
        .map_err(|_| reject("year", year, "expected four digits"))?;

    if !is_decimal_seconds(second) {
        return Err(reject("second", second, "expected SS or SS.fff"));
    }
    let second_value = second
        .parse::<f64>()
        .map_err(|_| reject("second", second, "expected SS or SS.fff"))?;

    Ok(UtcCalendar {
        year,
        month: short_field("month", month)?,
        day: short_field("day", day)?,
        hour: short_field("hour", hour)?,
        minute: short_field("minute", minute)?,
        second: second_value,
    })
}

fn short_field(name: &str, text: &str) -> TimeResult<u8> {
    if text.is_empty() || text.len() > 2 || !all_digits(text) {
        return Err(reject(name, text, "expected one or two digits"));
    }
    text.parse::<u8>()
        .map_err(|_| reject(name, text, "expected one or two digits"))
}

/// One or two digits, optionally followed by `.` and at least one digit.
fn is_decimal_seconds(text: &str) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let whole_ok = !whole.is_empty() && whole.len() <= 2 && all_digits(whole);
    let fraction_ok = fraction.map_or(true, |f| !f.is_empty() && all_digits(f));
    whole_ok && fraction_ok
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn reject(argument: &str, text: &str, reason: &str) -> TimeError {
    tracing::debug!(argument, text, reason, "rejected ISO 8601 input");
    TimeError::invalid_argument(argument, &format!("'{}': {}", text, reason))
}
