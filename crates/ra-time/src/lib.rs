//! # ra-time
//!
//! Date, period, roll-convention, and day-count types.
//!
//! Everything in this crate works on **unadjusted** calendar dates; applying
//! business-day calendars is a concern of the consuming valuation layer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_count;

/// `Period` — a tenor such as `3M` or `1Y`.
pub mod period;

/// Roll conventions: day-of-month, end-of-month, IMM anchors.
pub mod roll;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use day_count::{
    day_counter_from_name, Actual360, Actual36525, Actual365Fixed, DayCounter, Thirty360,
};
pub use period::Period;
pub use roll::RollConvention;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
