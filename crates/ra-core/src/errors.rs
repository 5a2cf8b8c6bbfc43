//! Error types for rates-analytics.
//!
//! Every failure the core can detect is raised immediately at the point of
//! detection through the single `thiserror`-derived enum below; callers
//! (pricers, report builders) translate into user-facing diagnostics.  The
//! `ensure!` and `fail!` macros cover the common precondition checks.

use thiserror::Error;

/// The top-level error type used throughout rates-analytics.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A zero, malformed, or unit-inconsistent period.
    #[error("invalid period: {0}")]
    InvalidPeriod(String),

    /// A curve was queried outside its domain with extrapolation disallowed.
    #[error("point {point} outside curve domain [{min}, {max}] and extrapolation is not permitted")]
    OutOfRange {
        /// The query point.
        point: f64,
        /// Lower bound of the curve domain.
        min: f64,
        /// Upper bound of the curve domain.
        max: f64,
    },

    /// An unrecognised compounding-frequency token.
    #[error("unsupported compounding frequency: {0:?}")]
    UnsupportedFrequency(String),

    /// Mismatched inputs feeding a schedule builder.
    #[error("inconsistent schedule: {0}")]
    InconsistentSchedule(String),

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument (parse failures, violated preconditions).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout rates-analytics.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ra_core::ensure;
/// fn positive(x: f64) -> ra_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use ra_core::fail;
/// fn always_err() -> ra_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::InvalidPeriod("0M".into());
        assert_eq!(e.to_string(), "invalid period: 0M");

        let e = Error::OutOfRange {
            point: 12.0,
            min: 0.0,
            max: 10.0,
        };
        assert!(e.to_string().contains("outside curve domain"));
    }
}
