//! `Date` — an unadjusted calendar date.
//!
//! Dates are stored as a signed day count from 1970-01-01, converted to and
//! from year/month/day with the standard civil-calendar algorithms.  The
//! supported range is 1901-01-01 through 2199-12-31, wide enough for any
//! traded instrument while keeping the arithmetic in `i32`.

use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use ra_core::errors::{Error, Result};

/// An unadjusted calendar date.
///
/// `Date` is `Copy` and totally ordered; differences and day offsets use
/// plain integers.  Month and year arithmetic clamps the day-of-month, so
/// `2023-01-31 + 1M = 2023-02-28`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum supported date: 1901-01-01.
    pub const MIN: Date = Date(days_from_civil(1901, 1, 1));

    /// Maximum supported date: 2199-12-31.
    pub const MAX: Date = Date(days_from_civil(2199, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1901..=2199).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1901, 2199]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year as i32, month as i32, day as i32)))
    }

    /// Create a date from a day offset relative to 1970-01-01.
    pub fn from_offset(days: i32) -> Result<Self> {
        let d = Date(days);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("day offset {days} out of range")));
        }
        Ok(d)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The day offset relative to 1970-01-01.
    pub fn offset(self) -> i32 {
        self.0
    }

    /// The year.
    pub fn year(self) -> u16 {
        civil_from_days(self.0).0 as u16
    }

    /// The month (1–12).
    pub fn month(self) -> u8 {
        civil_from_days(self.0).1 as u8
    }

    /// The day of the month (1–31).
    pub fn day_of_month(self) -> u8 {
        civil_from_days(self.0).2 as u8
    }

    /// The weekday.
    pub fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_offset(self.0 + n)
    }

    /// Advance by `n` of the given calendar unit.
    ///
    /// Month and year steps clamp the day-of-month to the target month's
    /// length.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n * 7),
            TimeUnit::Months => {
                let (y, m, d) = civil_from_days(self.0);
                let months = (y * 12 + (m - 1)) + n;
                let new_y = months.div_euclid(12);
                let new_m = months.rem_euclid(12) + 1;
                if !(1901..=2199).contains(&new_y) {
                    return Err(Error::Date(format!("year {new_y} out of range")));
                }
                let last = days_in_month(new_y as u16, new_m as u8) as i32;
                Ok(Date(days_from_civil(new_y, new_m, d.min(last))))
            }
            TimeUnit::Years => self.advance(n * 12, TimeUnit::Months),
        }
    }

    /// Number of calendar days from `self` to `other` (positive if
    /// `other > self`).
    pub fn days_until(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// The last calendar day of this date's month.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = civil_from_days(self.0);
        Date(days_from_civil(y, m, days_in_month(y as u16, m as u8) as i32))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// The *n*-th occurrence of `weekday` in the given month.
    ///
    /// `nth_weekday(3, Wednesday, 2024, 3)` is the third Wednesday of
    /// March 2024.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32).rem_euclid(7);
        let day = 1 + skip as u8 + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: no {n}-th {weekday} in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = civil_from_days(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

// Debug delegates to Display so assertion diffs stay readable.
impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Civil-calendar helpers ────────────────────────────────────────────────────

/// Whether `year` is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month {month} out of range"),
    }
}

/// Days since 1970-01-01 for a civil date (Howard Hinnant's algorithm).
const fn days_from_civil(y: i32, m: i32, d: i32) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400; // [0, 399]
    let mp = (m + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + d - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Civil date (year, month, day) for a days-since-1970 count.
const fn civil_from_days(days: i32) -> (i32, i32, i32) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn epoch() {
        let d = Date::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.offset(), 0);
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn ymd_roundtrip() {
        for (y, m, d) in [
            (1901, 1, 1),
            (1999, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2008, 7, 9),
            (2199, 12, 31),
        ] {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!((date.year(), date.month(), date.day_of_month()), (y, m, d));
        }
    }

    #[test]
    fn rejects_invalid_components() {
        assert!(Date::from_ymd(1900, 6, 1).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn weekday_known_dates() {
        // 2024-01-01 was a Monday, 2008-07-09 a Wednesday.
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(
            Date::from_ymd(2008, 7, 9).unwrap().weekday(),
            Weekday::Wednesday
        );
    }

    #[test]
    fn month_arithmetic_clamps() {
        let d = Date::from_ymd(2023, 1, 31).unwrap();
        let next = d.advance(1, TimeUnit::Months).unwrap();
        assert_eq!((next.month(), next.day_of_month()), (2, 28));

        let d = Date::from_ymd(2024, 1, 31).unwrap();
        let next = d.advance(1, TimeUnit::Months).unwrap();
        assert_eq!((next.month(), next.day_of_month()), (2, 29));

        // Stepping back out of a short month stays clamped.
        let d = Date::from_ymd(2023, 3, 31).unwrap();
        let prev = d.advance(-1, TimeUnit::Months).unwrap();
        assert_eq!((prev.month(), prev.day_of_month()), (2, 28));
    }

    #[test]
    fn year_arithmetic() {
        let d = Date::from_ymd(2024, 2, 29).unwrap();
        let next = d.advance(1, TimeUnit::Years).unwrap();
        assert_eq!(
            (next.year(), next.month(), next.day_of_month()),
            (2025, 2, 28)
        );
    }

    #[test]
    fn end_of_month() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().day_of_month(), 29);
        assert!(!d.is_end_of_month());
        assert!(d.end_of_month().is_end_of_month());
    }

    #[test]
    fn operators() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!((d2.month(), d2.day_of_month()), (2, 1));
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_until(d2), 31);
    }

    #[test]
    fn nth_weekday() {
        // Third Wednesday of March 2024 = March 20.
        let d = Date::nth_weekday(3, Weekday::Wednesday, 2024, 3).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 3, 20).unwrap());
        // No fifth Wednesday in February 2024.
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn display() {
        let d = Date::from_ymd(2008, 7, 9).unwrap();
        assert_eq!(d.to_string(), "2008-07-09");
    }

    proptest! {
        #[test]
        fn roundtrip_any_date(y in 1901u16..=2199, m in 1u8..=12, d in 1u8..=28) {
            let date = Date::from_ymd(y, m, d).unwrap();
            prop_assert_eq!((date.year(), date.month(), date.day_of_month()), (y, m, d));
        }

        #[test]
        fn offset_order_matches_ymd_order(a in 0i32..80_000, b in 0i32..80_000) {
            let da = Date::MIN + a;
            let db = Date::MIN + b;
            prop_assert_eq!(da < db, a < b);
        }
    }
}
