//! Roll conventions — the rule that snaps a stepped date to its canonical
//! day-of-month or weekday anchor.

use crate::date::{days_in_month, Date};
use crate::weekday::Weekday;
use ra_core::errors::{Error, Result};

/// A day-of-month / weekday anchor applied after each schedule step.
///
/// Applying a convention is a pure function of the input date; a fixed
/// roll day beyond the end of the month clamps to the month end, so
/// `Dom(30)` rolls a February date to the 28th (or 29th).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollConvention {
    /// Keep the stepped date's day-of-month.
    None,
    /// A fixed day of the month, 1–30.
    Dom(u8),
    /// The last calendar day of the month.
    Eom,
    /// The IMM anchor: third Wednesday of the month.
    ImmWednesday,
}

impl RollConvention {
    /// Create a fixed day-of-month convention.
    ///
    /// # Errors
    /// `InvalidArgument` unless `day` is in 1–30 (the 31st is expressed
    /// as [`RollConvention::Eom`]).
    pub fn dom(day: u8) -> Result<Self> {
        if !(1..=30).contains(&day) {
            return Err(Error::InvalidArgument(format!(
                "roll day {day} out of range [1, 30]"
            )));
        }
        Ok(RollConvention::Dom(day))
    }

    /// Snap `date` to this convention's anchor within the same month.
    pub fn apply(self, date: Date) -> Date {
        match self {
            RollConvention::None => date,
            RollConvention::Dom(day) => {
                let (y, m) = (date.year(), date.month());
                let clamped = day.min(days_in_month(y, m));
                Date::from_ymd(y, m, clamped).expect("clamped day is always valid")
            }
            RollConvention::Eom => date.end_of_month(),
            RollConvention::ImmWednesday => {
                Date::nth_weekday(3, Weekday::Wednesday, date.year(), date.month())
                    .expect("every month has a third Wednesday")
            }
        }
    }
}

impl std::str::FromStr for RollConvention {
    type Err = Error;

    /// Parse a roll-convention token: `"NONE"`, `"EOM"`, `"IMM"`, or a
    /// day number `"1"`–`"30"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        match t.to_ascii_uppercase().as_str() {
            "NONE" => Ok(RollConvention::None),
            "EOM" => Ok(RollConvention::Eom),
            "IMM" => Ok(RollConvention::ImmWednesday),
            _ => {
                let day: u8 = t
                    .parse()
                    .map_err(|_| Error::InvalidArgument(format!("unknown roll convention {s:?}")))?;
                RollConvention::dom(day)
            }
        }
    }
}

impl std::fmt::Display for RollConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RollConvention::None => write!(f, "NONE"),
            RollConvention::Dom(day) => write!(f, "{day}"),
            RollConvention::Eom => write!(f, "EOM"),
            RollConvention::ImmWednesday => write!(f, "IMM"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn none_is_identity() {
        let d = date(2010, 4, 9);
        assert_eq!(RollConvention::None.apply(d), d);
    }

    #[test]
    fn fixed_day() {
        let conv = RollConvention::dom(7).unwrap();
        assert_eq!(conv.apply(date(2008, 10, 9)), date(2008, 10, 7));
        assert_eq!(conv.apply(date(2008, 10, 7)), date(2008, 10, 7));
    }

    #[test]
    fn fixed_day_clamps_to_month_end() {
        let conv = RollConvention::dom(30).unwrap();
        assert_eq!(conv.apply(date(2023, 2, 10)), date(2023, 2, 28));
        assert_eq!(conv.apply(date(2024, 2, 10)), date(2024, 2, 29));
    }

    #[test]
    fn eom() {
        assert_eq!(RollConvention::Eom.apply(date(2010, 4, 15)), date(2010, 4, 30));
        assert_eq!(RollConvention::Eom.apply(date(2010, 5, 31)), date(2010, 5, 31));
    }

    #[test]
    fn imm_wednesday() {
        // Third Wednesday of March 2024 is the 20th.
        assert_eq!(
            RollConvention::ImmWednesday.apply(date(2024, 3, 1)),
            date(2024, 3, 20)
        );
    }

    #[test]
    fn parse() {
        assert_eq!("NONE".parse::<RollConvention>().unwrap(), RollConvention::None);
        assert_eq!("eom".parse::<RollConvention>().unwrap(), RollConvention::Eom);
        assert_eq!(
            "IMM".parse::<RollConvention>().unwrap(),
            RollConvention::ImmWednesday
        );
        assert_eq!("7".parse::<RollConvention>().unwrap(), RollConvention::Dom(7));
        assert!("31".parse::<RollConvention>().is_err());
        assert!("FRN".parse::<RollConvention>().is_err());
    }
}
