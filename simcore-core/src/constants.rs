/// Julian Date of the J2000.0 epoch, 2000-01-01 12:00:00.
pub const J2000_JD: f64 = 2451545.0;

/// Offset between Julian Date and Modified Julian Date: MJD = JD - 2400000.5.
pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const SECONDS_PER_MINUTE_F64: f64 = 60.0;

pub const SECONDS_PER_HOUR_F64: f64 = 3_600.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const MINUTES_PER_HOUR_F64: f64 = 60.0;

pub const HOURS_PER_DAY_F64: f64 = 24.0;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;

/// Scale factor from nanoseconds to seconds. Readbacks multiply by this
/// rather than dividing by `NANOSECONDS_PER_SECOND_F64`.
pub const SECONDS_PER_NANOSECOND_F64: f64 = 1e-9;
