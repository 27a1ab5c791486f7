//! Error types for leavecalc-rs.
//!
//! Nothing in the engine is fatal: every failure is either missing input,
//! an invalid range, or absent external data.  Callers are expected to
//! surface the message and carry on.  A fully-computed zero (for example a
//! request window past the end of the leave year) is **not** an error and
//! is returned as an ordinary result.

use thiserror::Error;

/// The top-level error type used throughout leavecalc-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date could not be constructed, parsed, or resolved.
    #[error("date error: {0}")]
    Date(String),

    /// A required input has not been supplied (no start date, no weekday
    /// or anchor selected).  Callers must not treat this as zero.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// The supplied range is invalid (end before start, unparsable bounds).
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// The bank-holiday dataset is empty or absent.  Distinct from a
    /// computed count of zero, so the caller can report "data unavailable"
    /// instead of "no holidays apply".
    #[error("bank holiday data is unavailable")]
    NoHolidayData,

    /// A configuration value is out of range and has no documented default.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout leavecalc-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidRange(...))` if the condition does not hold.
///
/// # Example
/// ```
/// use lv_core::{ensure, errors::Result};
/// fn span(start: i32, end: i32) -> Result<i32> {
///     ensure!(end >= start, "end {end} precedes start {start}");
///     Ok(end - start)
/// }
/// assert!(span(1, 3).is_ok());
/// assert!(span(3, 1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidRange(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::MissingInput(...))` unconditionally.
#[macro_export]
macro_rules! missing {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::MissingInput(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::MissingInput("start date".into()).to_string(),
            "missing input: start date"
        );
        assert_eq!(Error::NoHolidayData.to_string(), "bank holiday data is unavailable");
    }

    #[test]
    fn ensure_macro() {
        fn check(v: i32) -> Result<i32> {
            ensure!(v > 0, "value {v} must be positive");
            Ok(v)
        }
        assert_eq!(check(2), Ok(2));
        assert_eq!(
            check(-1),
            Err(Error::InvalidRange("value -1 must be positive".into()))
        );
    }
}
