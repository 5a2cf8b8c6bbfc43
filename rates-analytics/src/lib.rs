//! # rates-analytics
//!
//! Deterministic schedule generation and curve analytics for fixed income:
//! unadjusted date lattices from roll conventions and tenors, stub-aware
//! calculation-period schedules, meta-schedule composition, and discount
//! factor ↔ zero rate conversion with pluggable curve interpolation.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `ra-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use rates_analytics::schedulers::CalculationPeriodSchedule;
//! use rates_analytics::time::{Date, RollConvention};
//!
//! let schedule = CalculationPeriodSchedule::from_dates(
//!     Date::from_ymd(2010, 1, 15).unwrap(),
//!     Date::from_ymd(2015, 1, 15).unwrap(),
//!     "3M".parse().unwrap(),
//!     RollConvention::None,
//!     None,
//! )
//! .unwrap();
//! assert_eq!(schedule.periods().len(), 20);
//! assert!(!schedule.has_final_stub());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, compounding conventions, and error definitions.
pub use ra_core as core;

/// Date, period, roll-convention, and day-count types.
pub use ra_time as time;

/// Interpolation strategies and float comparison utilities.
pub use ra_math as math;

/// Date, calculation-period, and meta-schedule generation.
pub use ra_schedulers as schedulers;

/// Discrete curves, interpolated spaces, and rate conversions.
pub use ra_curves as curves;
