use simcore_core::constants::{SECONDS_PER_DAY_F64, SECONDS_PER_HOUR_F64, SECONDS_PER_MINUTE_F64};
use std::fmt;

/// Elapsed time in seconds.
///
/// A plain real-valued wrapper that keeps "how long" apart from "when" in
/// signatures. It is never rounded on its own; rounding to the nanosecond
/// grid happens only when a `Duration` is applied to a [`Time`](crate::Time).
///
/// ```
/// use simcore_time::Duration;
///
/// assert_eq!(Duration::from_minutes(2.0).seconds(), 120.0);
/// assert_eq!(Duration::from_days(-0.5).seconds(), -43_200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    pub seconds: f64,
}

impl Duration {
    pub const fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_seconds(SECONDS_PER_MINUTE_F64 * minutes)
    }

    pub fn from_hours(hours: f64) -> Self {
        Self::from_seconds(SECONDS_PER_HOUR_F64 * hours)
    }

    pub fn from_days(days: f64) -> Self {
        Self::from_seconds(SECONDS_PER_DAY_F64 * days)
    }

    pub const fn seconds(&self) -> f64 {
        self.seconds
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Duration::from_seconds(1.5).seconds(), 1.5);
        assert_eq!(Duration::from_minutes(1.0).seconds(), 60.0);
        assert_eq!(Duration::from_hours(1.0).seconds(), 3600.0);
        assert_eq!(Duration::from_days(1.0).seconds(), 86400.0);
        assert_eq!(Duration::from_hours(0.25).seconds(), 900.0);
    }

    #[test]
    fn test_no_rounding() {
        let d = Duration::from_seconds(1e-12);
        assert_eq!(d.seconds(), 1e-12);

        let neg = Duration::from_minutes(-1.0 / 3.0);
        assert_eq!(neg.seconds(), 60.0 * (-1.0 / 3.0));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Duration::default().seconds(), 0.0);
    }

    #[test]
    fn test_ordering() {
        assert!(Duration::from_minutes(1.0) < Duration::from_hours(1.0));
        assert!(Duration::from_days(-1.0) < Duration::from_seconds(0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration::from_minutes(1.5).to_string(), "90 s");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = Duration::from_seconds(123.456789012);
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: Duration = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }
}
