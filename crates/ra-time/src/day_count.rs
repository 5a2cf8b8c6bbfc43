//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter turns two dates into the **year fraction** used when
//! discounting or accruing interest.

use crate::date::Date;
use ra_core::errors::{Error, Result};
use ra_core::{Real, Time};
use std::sync::Arc;

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;
}

/// Actual/365 (Fixed): `actual_days / 365`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        d1.days_until(d2) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/360: `actual_days / 360`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        d1.days_until(d2) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Actual/365.25: `actual_days / 365.25`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual36525;

impl DayCounter for Actual36525 {
    fn name(&self) -> &str {
        "Actual/365.25"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        d1.days_until(d2) as i64
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.25
    }
}

/// 30/360 (US bond basis): months count 30 days, years 360.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360 (Bond Basis)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        let dd1 = d1.day_of_month().min(30) as i64;
        let mut dd2 = d2.day_of_month() as i64;
        if dd2 == 31 && dd1 == 30 {
            dd2 = 30;
        }
        360 * (d2.year() as i64 - d1.year() as i64)
            + 30 * (d2.month() as i64 - d1.month() as i64)
            + (dd2 - dd1)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// Look up a day counter by its selection string.
///
/// Accepts the common feed spellings: `"Actual365"`, `"ACT/365.FIXED"`,
/// `"Actual360"`, `"ACT/360"`, `"Actual365.25"`, `"30/360"`, `"Thirty360"`
/// (case-insensitive).
pub fn day_counter_from_name(name: &str) -> Result<Arc<dyn DayCounter>> {
    match name.trim().to_ascii_uppercase().as_str() {
        "ACTUAL365" | "ACT/365" | "ACT/365.FIXED" | "ACTUAL/365 (FIXED)" => {
            Ok(Arc::new(Actual365Fixed))
        }
        "ACTUAL360" | "ACT/360" | "ACTUAL/360" => Ok(Arc::new(Actual360)),
        "ACTUAL365.25" | "ACT/365.25" => Ok(Arc::new(Actual36525)),
        "30/360" | "THIRTY360" | "30E/360" => Ok(Arc::new(Thirty360)),
        _ => Err(Error::InvalidArgument(format!(
            "unknown day count convention {name:?}"
        ))),
    }
}
