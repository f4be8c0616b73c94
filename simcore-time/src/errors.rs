//! Error types for time construction and arithmetic.
//!
//! Two things can go wrong, and both abort the calling operation:
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Overflow`](TimeError::Overflow) | a seconds quantity, rounded to nanoseconds, leaves the `i64` range (or is not finite) |
//! | [`InvalidArgument`](TimeError::InvalidArgument) | calendar fields or ISO 8601 text fall outside their declared domains |
//!
//! Both are detected before anything is converted, so a failed call never
//! produces a partially built [`Time`](crate::Time).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeError {
    /// Value does not fit the signed 64-bit nanosecond grid.
    #[error("Overflow in {operation}: {message}")]
    Overflow { operation: String, message: String },

    /// Input outside its declared domain (e.g. month 13, hour 24).
    #[error("Invalid argument `{argument}`: {message}")]
    InvalidArgument { argument: String, message: String },
}

pub type TimeResult<T> = Result<T, TimeError>;

impl TimeError {
    /// Creates an [`Overflow`](Self::Overflow) error.
    pub fn overflow(operation: &str, reason: &str) -> Self {
        Self::Overflow {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub fn invalid_argument(argument: &str, reason: &str) -> Self {
        Self::InvalidArgument {
            argument: argument.to_string(),
            message: reason.to_string(),
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
