//! Numeric building blocks for the simulation core.
//!
//! `simcore-core` holds the pieces that cannot fail: shared time and calendar
//! constants, and the [`Vec3`] type used for positions, velocities and forces.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | J2000 epoch, MJD zero point, second/day/nanosecond factors |
//! | [`math`] | 3-component real vector arithmetic |
//!
//! # Re-exports
//!
//! ```
//! use simcore_core::Vec3;
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(4.0, 5.0, 6.0);
//! assert_eq!(a.dot(&b), 32.0);
//! ```

pub mod constants;
pub mod math;

pub use math::Vec3;
