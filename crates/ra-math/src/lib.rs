//! # ra-math
//!
//! Interpolation strategies and float comparison utilities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// 1D interpolation strategies.
pub mod interpolation;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use interpolation::{
    interpolation_from_name, Interpolation, LinearInterpolation, LogLinearInterpolation,
    PiecewiseConstantInterpolation,
};
