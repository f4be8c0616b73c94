use crate::parsing::parse_iso8601;
use crate::TimeError;
use std::fmt;
use std::str::FromStr;

/// Calendar date and time of day on the continuous UTC-like timescale.
///
/// A plain record of fields with no checks of its own: ranges are enforced
/// when the value is converted (see [`Time::from_utc_calendar`](crate::Time::from_utc_calendar)).
/// No leap seconds are modeled, so `second` lives in `[0, 60)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtcCalendar {
    pub year: i32,
    /// 1-12
    pub month: u8,
    /// 1-31, not checked against the length of the month
    pub day: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// [0, 60)
    pub second: f64,
}

impl UtcCalendar {
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

/// Formats as ISO 8601 (`YYYY-MM-DDTHH:MM:SS.fff`).
impl fmt::Display for UtcCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parses ISO 8601 text. Only the syntax is checked here.
impl FromStr for UtcCalendar {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iso8601(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let cal = UtcCalendar::new(2024, 3, 9, 7, 5, 4.25);
        assert_eq!(cal.to_string(), "2024-03-09T07:05:04.250");
    }

    #[test]
    fn test_from_str() {
        let cal: UtcCalendar = "2000-01-01T12:00:00".parse().unwrap();
        assert_eq!(cal, UtcCalendar::new(2000, 1, 1, 12, 0, 0.0));
    }

    #[test]
    fn test_parse_does_not_range_check() {
        let cal: UtcCalendar = "2020-13-01T00:00:00".parse().unwrap();
        assert_eq!(cal.month, 13);
    }
}
