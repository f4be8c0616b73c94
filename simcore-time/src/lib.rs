//! Nanosecond-precision absolute time for the simulation core.
//!
//! Time is kept on a continuous UTC-like timescale: it follows the civil
//! calendar but models no leap seconds, so every day is exactly 86400 s.
//! Instants are stored as integer nanoseconds from J2000.0
//! (JD 2451545.0, 2000-01-01 12:00:00).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`time`] | [`Time`]: construction, accessors, arithmetic, ordering |
//! | [`duration`] | [`Duration`]: elapsed seconds |
//! | [`calendar`] | [`UtcCalendar`]: calendar and time-of-day fields |
//! | [`julian`] | Gregorian calendar to Julian Date, MJD helpers |
//! | [`parsing`] | ISO 8601 text to [`UtcCalendar`] |
//! | [`errors`] | [`TimeError`] and [`TimeResult`] |
//!
//! # Data flow
//!
//! ```text
//! UtcCalendar -> Julian Date -> seconds since J2000 -> nanoseconds (Time)
//! Time -> seconds since J2000 -> Julian Date -> Modified Julian Date
//! ```
//!
//! ```
//! use simcore_time::{Duration, Time};
//!
//! let start: Time = "2024-01-01T00:00:00Z".parse()?;
//! let end = start.checked_add(Duration::from_days(1.5))?;
//!
//! assert!(end > start);
//! assert!(((end - start).seconds() - 129_600.0).abs() < 1e-9);
//! assert!((start.modified_julian_date() - 60310.0).abs() < 1e-9);
//! # Ok::<(), simcore_time::TimeError>(())
//! ```

pub mod calendar;
pub mod duration;
pub mod errors;
pub mod julian;
pub mod parsing;
pub mod time;

pub use calendar::UtcCalendar;
pub use duration::Duration;
pub use errors::{TimeError, TimeResult};
pub use time::Time;
