//! # ra-schedulers
//!
//! Unadjusted date-lattice generation: the plain date scheduler,
//! calculation-period schedules with stub handling, and the meta-schedule
//! composer.
//!
//! All output dates are **unadjusted** — business-day adjustment belongs to
//! the consuming valuation layer, which attaches adjusted dates to
//! [`CalculationPeriod`] entries after the fact.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalculationPeriod` and stub-type primitives.
pub mod calculation_period;

/// `CalculationPeriodSchedule` — stub-aware period lists.
pub mod calculation_schedule;

/// Plain unadjusted date-sequence generation.
pub mod date_scheduler;

/// Meta-schedules: composing several roll/period regimes over one range.
pub mod meta_schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculation_period::{CalculationPeriod, StubPeriodType};
pub use calculation_schedule::CalculationPeriodSchedule;
pub use date_scheduler::{
    coupon_dates_from_maturity, unadjusted_date_schedule, unadjusted_dates_from_effective,
    unadjusted_dates_from_termination, unadjusted_dates_in_direction, CouponDates,
    DateGenerationDirection, ScheduleDates,
};
pub use meta_schedule::{
    simple_unadjusted_dates, unadjusted_dates_from_items, unadjusted_dates_from_triplets,
    unadjusted_dates_in_range, MetaScheduleItem,
};
