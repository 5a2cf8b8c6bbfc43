//! Plain unadjusted date-sequence generation.
//!
//! Sequences are built by repeatedly stepping one period from an anchor
//! (the effective date going forward, the termination date going backward)
//! and snapping each stepped date to the roll convention.  The remainder of
//! the final partial step becomes a stub, and the boundary between stub and
//! regular periods is reported alongside the dates.

use ra_core::errors::{Error, Result};
use ra_time::{Date, Period, RollConvention};

fn same_month_and_year(a: Date, b: Date) -> bool {
    a.month() == b.month() && a.year() == b.year()
}

/// The result of a directional date generation run.
///
/// `dates` is always sorted ascending; its first and last entries are the
/// supplied effective and termination dates.  `first_regular_start` /
/// `last_regular_end` mark the boundary between any stub and the regular
/// roll lattice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDates {
    /// The unadjusted dates, ascending.
    pub dates: Vec<Date>,
    /// Start of the first regular period.
    pub first_regular_start: Date,
    /// End of the last regular period.
    pub last_regular_end: Date,
}

/// A coupon lattice rolled back from maturity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponDates {
    /// The unadjusted roll dates, ascending; the first entry lies on or
    /// before the effective date.
    pub dates: Vec<Date>,
    /// The roll date on or immediately before the effective date.
    pub last_coupon: Date,
    /// The first roll date after [`last_coupon`](CouponDates::last_coupon).
    pub next_coupon: Date,
}

/// Which anchor a date generation run steps from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateGenerationDirection {
    /// Step forward from the effective date; any stub falls at the back.
    ForwardFromEffective,
    /// Step backward from the termination date; any stub falls at the front.
    BackwardFromTermination,
}

fn validate_range(effective: Date, termination: Date, period: Period) -> Result<()> {
    if period.length <= 0 {
        return Err(Error::InvalidPeriod(format!(
            "schedule period must be positive, got {period}"
        )));
    }
    if effective >= termination {
        return Err(Error::InconsistentSchedule(format!(
            "effective date {effective} must precede termination date {termination}"
        )));
    }
    Ok(())
}

/// Generate unadjusted dates stepping forward from the effective date.
///
/// Each step adds one `period` to the previous rolled date and re-applies
/// the roll convention.  A stepped date landing in the termination month is
/// replaced by the termination date itself; a stepped date beyond the
/// termination date leaves the remaining gap as a final stub.
pub fn unadjusted_dates_from_effective(
    effective: Date,
    termination: Date,
    period: Period,
    roll: RollConvention,
) -> Result<ScheduleDates> {
    validate_range(effective, termination, period)?;
    let mut dates = vec![effective];
    let mut first_regular_start = effective;
    let mut last_regular_end = termination;
    let mut prev = effective;
    let mut first_step = true;
    loop {
        let stepped = period.add_to(prev)?;
        let rolled = roll.apply(stepped);
        if first_step {
            // A roll that moves the natural first step makes the rolled
            // date the start of the regular lattice.
            first_regular_start = if stepped == rolled { effective } else { rolled };
            first_step = false;
        }
        if rolled <= prev {
            // A day-based period can be undone by the roll convention
            // (e.g. 5D snapped back to EOM) and would never terminate.
            return Err(Error::InvalidPeriod(format!(
                "period {period} does not advance past {prev} under roll convention {roll}"
            )));
        }
        if rolled < termination && !same_month_and_year(rolled, termination) {
            dates.push(rolled);
            prev = rolled;
            continue;
        }
        if rolled <= termination {
            // Landed in the termination month: the termination date takes
            // the place of the final roll.
            last_regular_end = if rolled.day_of_month() == termination.day_of_month() {
                termination
            } else {
                *dates.last().expect("dates starts non-empty")
            };
        } else {
            last_regular_end = *dates.last().expect("dates starts non-empty");
        }
        dates.push(termination);
        break;
    }
    dates.sort_unstable();
    dates.dedup();
    Ok(ScheduleDates {
        dates,
        first_regular_start,
        last_regular_end,
    })
}

/// Generate unadjusted dates stepping backward from the termination date.
///
/// Mirror of [`unadjusted_dates_from_effective`]: the stub, if any, falls at
/// the front, and the output is sorted ascending regardless.
pub fn unadjusted_dates_from_termination(
    effective: Date,
    termination: Date,
    period: Period,
    roll: RollConvention,
) -> Result<ScheduleDates> {
    validate_range(effective, termination, period)?;
    let mut dates = vec![termination];
    let mut first_regular_start = effective;
    let mut last_regular_end = termination;
    let mut prev = termination;
    let mut first_step = true;
    loop {
        let stepped = period.subtract_from(prev)?;
        let rolled = roll.apply(stepped);
        if first_step {
            last_regular_end = if stepped == rolled { termination } else { rolled };
            first_step = false;
        }
        if rolled >= prev {
            return Err(Error::InvalidPeriod(format!(
                "period {period} does not step back past {prev} under roll convention {roll}"
            )));
        }
        if rolled > effective && !same_month_and_year(rolled, effective) {
            dates.push(rolled);
            prev = rolled;
            continue;
        }
        if rolled >= effective {
            first_regular_start = if rolled.day_of_month() == effective.day_of_month() {
                effective
            } else {
                *dates.last().expect("dates starts non-empty")
            };
        } else {
            first_regular_start = *dates.last().expect("dates starts non-empty");
        }
        dates.push(effective);
        break;
    }
    dates.sort_unstable();
    dates.dedup();
    Ok(ScheduleDates {
        dates,
        first_regular_start,
        last_regular_end,
    })
}

/// Generate a date schedule from an effective date and an interval to the
/// termination date.
///
/// The period interval must divide the interval to termination exactly;
/// otherwise the requested frequency cannot roll onto the termination date
/// and the call fails with [`Error::InvalidPeriod`].  Dates are stepped as
/// whole multiples of the interval from the effective date, so a
/// month-end anchor stays snapped (2010-03-31 + 1M = 2010-04-30,
/// + 2M = 2010-05-31).
pub fn unadjusted_date_schedule(
    effective: Date,
    interval_to_termination: Period,
    period_interval: Period,
) -> Result<Vec<Date>> {
    let divisor = interval_to_termination.ratio(period_interval)?;
    if divisor <= 0.0 || divisor.fract() != 0.0 {
        return Err(Error::InvalidPeriod(format!(
            "period {period_interval} does not roll onto the termination interval {interval_to_termination}"
        )));
    }
    let termination = interval_to_termination.add_to(effective)?;
    let mut dates = Vec::with_capacity(divisor as usize + 1);
    let mut i = 0;
    loop {
        let d = (period_interval * i).add_to(effective)?;
        if d >= termination {
            break;
        }
        dates.push(d);
        i += 1;
    }
    dates.push(termination);
    Ok(dates)
}

/// Roll a regular coupon lattice back from the maturity date.
///
/// The lattice extends one roll past the effective date, so the first two
/// entries bracket it: `last_coupon` is the roll on or before the effective
/// date and `next_coupon` the one after.
pub fn coupon_dates_from_maturity(
    effective: Date,
    termination: Date,
    period: Period,
    roll: RollConvention,
) -> Result<CouponDates> {
    validate_range(effective, termination, period)?;
    let mut dates = vec![termination];
    let mut rolled = roll.apply(period.subtract_from(termination)?);
    while rolled > effective {
        dates.push(rolled);
        let next = roll.apply(period.subtract_from(rolled)?);
        if next >= rolled {
            return Err(Error::InvalidPeriod(format!(
                "period {period} does not step back past {rolled} under roll convention {roll}"
            )));
        }
        rolled = next;
    }
    dates.push(rolled);
    dates.sort_unstable();
    dates.dedup();
    Ok(CouponDates {
        last_coupon: dates[0],
        next_coupon: dates[1],
        dates,
    })
}

/// Directional entry point that normalises long stubs to short ones.
///
/// Forward generation splits a long final stub by inserting the missing
/// regular roll date before the termination date; backward generation does
/// the same for a long initial stub after the effective date.
pub fn unadjusted_dates_in_direction(
    direction: DateGenerationDirection,
    effective: Date,
    termination: Date,
    period: Period,
    roll: RollConvention,
) -> Result<Vec<Date>> {
    match direction {
        DateGenerationDirection::ForwardFromEffective => {
            let sched =
                unadjusted_dates_from_effective(effective, termination, period, roll)?;
            let mut dates = sched.dates;
            if sched.last_regular_end != termination && sched.last_regular_end != effective {
                let split = period.add_to(sched.last_regular_end)?;
                if split < termination {
                    dates.insert(dates.len() - 1, split);
                }
            }
            Ok(dates)
        }
        DateGenerationDirection::BackwardFromTermination => {
            let sched =
                unadjusted_dates_from_termination(effective, termination, period, roll)?;
            let mut dates = sched.dates;
            if sched.first_regular_start != effective && sched.first_regular_start != termination
            {
                let split = period.subtract_from(sched.first_regular_start)?;
                if split > effective {
                    dates.insert(1, split);
                }
            }
            Ok(dates)
        }
    }
}
