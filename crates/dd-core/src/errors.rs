//! Error types for datedim.
//!
//! Two classes of failure exist.  Malformed input (a date key or time key
//! that does not decompose into a valid value) is reported at the codec
//! boundary.  Internal-consistency failures, an unreachable branch that was
//! reached anyway, are reported as [`Error::LogicInvariantViolation`] and
//! indicate a bug in the derivation code itself.  Nothing is retryable.

use thiserror::Error;

/// The top-level error type used throughout datedim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date key does not decompose into a valid Gregorian date.
    #[error("invalid date key {key}: {reason}")]
    InvalidDateKey {
        /// The raw key as supplied.
        key: String,
        /// Why the key was rejected.
        reason: String,
    },

    /// A time key does not decompose into a valid time of day.
    #[error("invalid time key {key}: {reason}")]
    InvalidTimeKey {
        /// The raw key as supplied.
        key: String,
        /// Why the key was rejected.
        reason: String,
    },

    /// Date arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// An unreachable branch was reached (maps to `fail!`).
    #[error("logic invariant violated: {0}")]
    LogicInvariantViolation(String),

    /// Precondition violated (maps to `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an [`Error::InvalidDateKey`] from anything displayable.
    pub fn invalid_date_key(key: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Error::InvalidDateKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// Build an [`Error::InvalidTimeKey`] from anything displayable.
    pub fn invalid_time_key(key: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        Error::InvalidTimeKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout datedim.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dd_core::{ensure, errors::Error};
/// fn positive(step: u32) -> dd_core::errors::Result<u32> {
///     ensure!(step > 0, "step must be positive, got {step}");
///     Ok(step)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::LogicInvariantViolation(...))` immediately.
///
/// Used for branches that valid inputs can never reach.
///
/// # Example
/// ```
/// use dd_core::{fail, errors::Error};
/// fn quarter_start(q: u8) -> dd_core::errors::Result<u8> {
///     match q {
///         1..=4 => Ok(3 * (q - 1) + 1),
///         _ => fail!("impossible quarter {q}"),
///     }
/// }
/// assert_eq!(quarter_start(2), Ok(4));
/// assert!(matches!(quarter_start(5), Err(Error::LogicInvariantViolation(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::LogicInvariantViolation(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_key_message() {
        let err = Error::invalid_date_key(20230230, "day 30 out of range [1, 28]");
        assert_eq!(
            err.to_string(),
            "invalid date key 20230230: day 30 out of range [1, 28]"
        );
    }

    #[test]
    fn invalid_time_key_message() {
        let err = Error::invalid_time_key(246000, "hour 24 out of range [0, 23]");
        assert_eq!(
            err.to_string(),
            "invalid time key 246000: hour 24 out of range [0, 23]"
        );
    }

    #[test]
    fn fail_macro_is_logic_violation() {
        fn f() -> Result<()> {
            fail!("unreachable branch {}", 7);
        }
        assert_eq!(
            f(),
            Err(Error::LogicInvariantViolation("unreachable branch 7".into()))
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
