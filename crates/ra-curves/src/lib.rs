//! # ra-curves
//!
//! Discrete curves, interpolated curve spaces, and the pure rate
//! conversions (discount factor ↔ zero rate and friends).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Ordered (x, y) knot sets.
pub mod discrete_curve;

/// Curves queryable at arbitrary points via an interpolation strategy.
pub mod interpolated_curve;

/// Curve points: plain year-fraction pairs and date-keyed points.
pub mod point;

/// Pure rate conversion functions.
pub mod rates;

/// Zero-rate curves presenting discount factors.
pub mod zero_curve;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use discrete_curve::DiscreteCurve;
pub use interpolated_curve::InterpolatedCurve;
pub use point::{DateTimePoint1D, Point1D};
pub use zero_curve::ZeroRateDiscountCurve;
