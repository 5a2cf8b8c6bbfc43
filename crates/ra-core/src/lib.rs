//! # ra-core
//!
//! Core types, compounding conventions, and error definitions for
//! rates-analytics.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – primitive type aliases, the error
//! taxonomy, and the compounding-frequency table.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Compounding frequencies and their period lengths.
pub mod compounding;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A time measurement in years (a year fraction under some day count).
pub type Time = Real;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in (0, 1].
pub type DiscountFactor = Real;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use compounding::CompoundingFrequency;
pub use errors::{Error, Result};
