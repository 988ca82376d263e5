//! Error types for the calendar and duration engine.
//!
//! The engine is permissive by design: odd but well-formed input such as a
//! negative elapsed time is never an error. The variants below only describe
//! literals that could not be read at all, so callers can decide whether to
//! ask again or apply a default.

use thiserror::Error;

/// Failures raised while reading calendar and duration literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text that is not an `H:MM` clock value.
    #[error("invalid duration '{0}', expected H:MM")]
    InvalidDuration(String),

    /// Text that is not a `YYYY-Www` week or a `YYYY-MM-DD` date.
    #[error("invalid week '{0}', expected YYYY-Www or YYYY-MM-DD")]
    InvalidWeek(String),

    /// Text that is not a `YYYY-MM` month.
    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    /// Text that is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A constructor was handed a combination of values it cannot interpret.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

pub type Result<T> = std::result::Result<T, Error>;
