//! `Period` — a tenor such as `3M` or `1Y`.

use crate::date::Date;
use crate::time_unit::TimeUnit;
use ra_core::errors::{Error, Result};
use ra_core::Real;

/// A time span made up of an integer length and a [`TimeUnit`].
///
/// Parsed periods always carry a positive length; direction (forward or
/// backward generation) is supplied by the calling context.  Negative
/// lengths only arise internally through [`negated`](Period::negated).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units.
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Return `true` if the length is zero.
    pub fn is_zero(self) -> bool {
        self.length == 0
    }

    /// Negate the period (reverse direction).
    pub fn negated(self) -> Self {
        Self {
            length: -self.length,
            unit: self.unit,
        }
    }

    /// Normalise to a canonical unit: weeks become days, whole years of
    /// months become years.
    pub fn normalized(self) -> Self {
        match self.unit {
            TimeUnit::Weeks => Period::new(self.length * 7, TimeUnit::Days),
            TimeUnit::Months if self.length % 12 == 0 => {
                Period::new(self.length / 12, TimeUnit::Years)
            }
            _ => self,
        }
    }

    /// Total length in months, if the unit is month-based.
    pub fn in_months(self) -> Option<i32> {
        match self.unit {
            TimeUnit::Months => Some(self.length),
            TimeUnit::Years => Some(self.length * 12),
            _ => None,
        }
    }

    /// Total length in days, if the unit is day-based.
    pub fn in_days(self) -> Option<i32> {
        match self.unit {
            TimeUnit::Days => Some(self.length),
            TimeUnit::Weeks => Some(self.length * 7),
            _ => None,
        }
    }

    /// How many times `other` fits into `self`, as a real number.
    ///
    /// Both periods must be month-based (`M`/`Y`) or both day-based
    /// (`D`/`W`); a month cannot be divided by a day count without a
    /// calendar.
    ///
    /// # Errors
    /// `InvalidPeriod` if the units are inconsistent or `other` is zero.
    pub fn ratio(self, other: Period) -> Result<Real> {
        let (a, b) = match (self.in_months(), other.in_months()) {
            (Some(a), Some(b)) => (a, b),
            _ => match (self.in_days(), other.in_days()) {
                (Some(a), Some(b)) => (a, b),
                _ => {
                    return Err(Error::InvalidPeriod(format!(
                        "cannot divide {self} by {other}: inconsistent units"
                    )))
                }
            },
        };
        if b == 0 {
            return Err(Error::InvalidPeriod(format!("cannot divide {self} by zero period")));
        }
        Ok(a as Real / b as Real)
    }

    /// Apply this period forward from `date`.
    pub fn add_to(self, date: Date) -> Result<Date> {
        date.advance(self.length, self.unit)
    }

    /// Apply this period backward from `date`.
    pub fn subtract_from(self, date: Date) -> Result<Date> {
        date.advance(-self.length, self.unit)
    }
}

impl std::str::FromStr for Period {
    type Err = Error;

    /// Parse a tenor string such as `"3M"`, `"1Y"`, `"26W"`, or `"90D"`.
    ///
    /// The unit code is case-insensitive.  Zero, signed, or malformed
    /// tenors fail with [`Error::InvalidPeriod`].
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let malformed = || Error::InvalidPeriod(format!("malformed tenor {s:?}"));
        if !s.is_ascii() || s.len() < 2 {
            return Err(malformed());
        }
        let (count, code) = s.split_at(s.len() - 1);
        let unit = match code.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('D') => TimeUnit::Days,
            Some('W') => TimeUnit::Weeks,
            Some('M') => TimeUnit::Months,
            Some('Y') => TimeUnit::Years,
            _ => return Err(malformed()),
        };
        if !count.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let length: i32 = count.parse().map_err(|_| malformed())?;
        if length == 0 {
            return Err(Error::InvalidPeriod(format!("zero-length tenor {s:?}")));
        }
        Ok(Period::new(length, unit))
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::ops::Mul<i32> for Period {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Period::new(self.length * rhs, self.unit)
    }
}

impl std::ops::Mul<Period> for i32 {
    type Output = Period;
    fn mul(self, rhs: Period) -> Period {
        rhs * self
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.length, self.unit.code())
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Period {
        s.parse().unwrap()
    }

    #[test]
    fn parse_tenors() {
        assert_eq!(p("3M"), Period::new(3, TimeUnit::Months));
        assert_eq!(p("1Y"), Period::new(1, TimeUnit::Years));
        assert_eq!(p("26w"), Period::new(26, TimeUnit::Weeks));
        assert_eq!(p("90d"), Period::new(90, TimeUnit::Days));
        assert_eq!(p(" 18M "), Period::new(18, TimeUnit::Months));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "M", "3", "0M", "-3M", "+1Y", "3Q", "1.5Y", "M3"] {
            assert!(
                bad.parse::<Period>().is_err(),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn display_roundtrip() {
        assert_eq!(p("3M").to_string(), "3M");
        assert_eq!(p("1Y").to_string(), "1Y");
        assert_eq!(p("3M").negated().to_string(), "-3M");
    }

    #[test]
    fn normalized() {
        assert_eq!(p("2W").normalized(), Period::new(14, TimeUnit::Days));
        assert_eq!(p("24M").normalized(), Period::new(2, TimeUnit::Years));
        assert_eq!(p("7M").normalized(), Period::new(7, TimeUnit::Months));
    }

    #[test]
    fn ratio_month_based() {
        assert_eq!(p("1Y").ratio(p("3M")).unwrap(), 4.0);
        assert_eq!(p("5Y").ratio(p("3M")).unwrap(), 20.0);
        assert_eq!(p("7M").ratio(p("2M")).unwrap(), 3.5);
    }

    #[test]
    fn ratio_day_based() {
        assert_eq!(p("4W").ratio(p("7D")).unwrap(), 4.0);
    }

    #[test]
    fn ratio_inconsistent_units() {
        let err = p("1Y").ratio(p("30D")).unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod(_)));
    }

    #[test]
    fn apply_to_date() {
        let d = Date::from_ymd(2010, 3, 31).unwrap();
        let later = p("1M").add_to(d).unwrap();
        assert_eq!(later, Date::from_ymd(2010, 4, 30).unwrap());
        let earlier = p("3M").subtract_from(d).unwrap();
        assert_eq!(earlier, Date::from_ymd(2009, 12, 31).unwrap());
    }
}
