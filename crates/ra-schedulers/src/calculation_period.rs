//! `CalculationPeriod` — one accrual period of a payment stream.

use ra_core::errors::{Error, Result};
use ra_time::{Date, Period};

/// A single calculation period.
///
/// Created from two adjacent dates of an unadjusted sequence; the adjusted
/// dates are attached later by the business-day-adjustment layer and start
/// out unset.  Periods are never re-ordered after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationPeriod {
    /// Unadjusted period start.
    pub unadjusted_start: Date,
    /// Unadjusted period end.
    pub unadjusted_end: Date,
    /// Business-day-adjusted start, once known.
    pub adjusted_start: Option<Date>,
    /// Business-day-adjusted end, once known.
    pub adjusted_end: Option<Date>,
}

impl CalculationPeriod {
    /// Create a period from its unadjusted boundary dates.
    pub fn new(unadjusted_start: Date, unadjusted_end: Date) -> Self {
        Self {
            unadjusted_start,
            unadjusted_end,
            adjusted_start: None,
            adjusted_end: None,
        }
    }

    /// Attach the business-day-adjusted dates.
    pub fn set_adjusted_dates(&mut self, adjusted_start: Date, adjusted_end: Date) {
        self.adjusted_start = Some(adjusted_start);
        self.adjusted_end = Some(adjusted_end);
    }

    /// Return `true` if this period is shorter than one regular interval.
    pub fn is_short_stub(&self, interval: Period) -> bool {
        interval
            .add_to(self.unadjusted_start)
            .map_or(false, |regular_end| self.unadjusted_end < regular_end)
    }

    /// Return `true` if this period is longer than one regular interval.
    pub fn is_long_stub(&self, interval: Period) -> bool {
        interval
            .add_to(self.unadjusted_start)
            .map_or(false, |regular_end| self.unadjusted_end > regular_end)
    }
}

/// Where an irregular period sits and whether it is merged or split.
///
/// `Short*` leaves the remainder as its own period; `Long*` merges the
/// remainder into the neighbouring regular period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubPeriodType {
    /// Short first period.
    ShortInitial,
    /// First period extended past one regular interval.
    LongInitial,
    /// Short last period.
    ShortFinal,
    /// Last period extended past one regular interval.
    LongFinal,
}

impl StubPeriodType {
    /// Return `true` for `ShortInitial` / `LongInitial`.
    pub fn is_initial(self) -> bool {
        matches!(self, StubPeriodType::ShortInitial | StubPeriodType::LongInitial)
    }
}

impl std::str::FromStr for StubPeriodType {
    type Err = Error;

    /// Parse a stub-type token (`"ShortInitial"`, `"LongFinal"`, ...),
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shortinitial" => Ok(StubPeriodType::ShortInitial),
            "longinitial" => Ok(StubPeriodType::LongInitial),
            "shortfinal" => Ok(StubPeriodType::ShortFinal),
            "longfinal" => Ok(StubPeriodType::LongFinal),
            _ => Err(Error::InvalidArgument(format!(
                "unknown stub period type {s:?}"
            ))),
        }
    }
}

impl std::fmt::Display for StubPeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StubPeriodType::ShortInitial => "ShortInitial",
            StubPeriodType::LongInitial => "LongInitial",
            StubPeriodType::ShortFinal => "ShortFinal",
            StubPeriodType::LongFinal => "LongFinal",
        };
        write!(f, "{s}")
    }
}
