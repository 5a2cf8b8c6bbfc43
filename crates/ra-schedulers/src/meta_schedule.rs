//! Meta-schedules: one merged unadjusted date list produced by composing
//! several {period, roll-frequency, roll-convention} regimes over a date
//! range.
//!
//! Items are applied sequentially, each consuming the slice of the overall
//! range its period denotes.  Backward generation consumes the range from
//! the end anchor instead, which leaves the last item governing the
//! segment nearest the start date.  The merged output is always ascending
//! and duplicate-free — a date shared by two adjacent segments appears
//! once.

use crate::date_scheduler::{
    unadjusted_dates_from_effective, unadjusted_dates_from_termination,
};
use ra_core::errors::{Error, Result};
use ra_time::{Date, Period, RollConvention, TimeUnit};

/// One regime of a meta-schedule: a total span, the roll frequency within
/// it, and the roll convention to snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaScheduleItem {
    /// Total span this item covers.
    pub period: Period,
    /// Roll frequency within the span.
    pub roll_frequency: Period,
    /// Roll convention applied to each generated date.
    pub roll_convention: RollConvention,
}

fn validate_range(start: Date, end: Date) -> Result<()> {
    if start >= end {
        return Err(Error::InconsistentSchedule(format!(
            "start date {start} must precede end date {end}"
        )));
    }
    Ok(())
}

/// Number of whole rolls of `frequency` inside `span`, plus the frequency
/// expressed in months.  Meta-schedule regimes are month-expressed; other
/// units are rejected as in the consuming trade representations.
fn month_rolls(span: Period, frequency: Period) -> Result<(i32, i32)> {
    let months = frequency.in_months().ok_or_else(|| {
        Error::InvalidPeriod(format!(
            "meta-schedule roll frequency must be month-expressed, got {frequency}"
        ))
    })?;
    let rolls = span.ratio(frequency)? as i32;
    Ok((rolls, months))
}

/// Ascending, duplicate-free copy of `dates`.
fn sorted_unique(mut dates: Vec<Date>) -> Vec<Date> {
    dates.sort_unstable();
    dates.dedup();
    dates
}

/// Single period/convention applied uniformly in one direction.
///
/// Forward generation steps from the start date, backward from the end
/// date; either way the boundary dates are included and the result is
/// ascending.
pub fn simple_unadjusted_dates(
    start: Date,
    end: Date,
    interval: Period,
    roll: RollConvention,
    backward: bool,
) -> Result<Vec<Date>> {
    validate_range(start, end)?;
    if interval.length <= 0 {
        return Err(Error::InvalidPeriod(format!(
            "schedule period must be positive, got {interval}"
        )));
    }
    let stalled = |at: Date| {
        Error::InvalidPeriod(format!(
            "period {interval} does not advance past {at} under roll convention {roll}"
        ))
    };
    let mut results = Vec::new();
    if backward {
        let mut roll_date = end;
        while roll_date > start {
            results.push(roll_date);
            let next = roll.apply(interval.subtract_from(roll_date)?);
            if next >= roll_date {
                return Err(stalled(roll_date));
            }
            roll_date = next;
        }
        results.push(start);
    } else {
        let mut roll_date = start;
        while roll_date < end {
            results.push(roll_date);
            let next = roll.apply(interval.add_to(roll_date)?);
            if next <= roll_date {
                return Err(stalled(roll_date));
            }
            roll_date = next;
        }
        results.push(end);
    }
    Ok(sorted_unique(results))
}

/// Sequential composition of meta-schedule items between two dates.
///
/// Each item expands to `period / roll_frequency` rolls offset from the
/// anchor: the start date going forward, the end date going backward.
pub fn unadjusted_dates_from_items(
    start: Date,
    end: Date,
    items: &[MetaScheduleItem],
    backward: bool,
) -> Result<Vec<Date>> {
    validate_range(start, end)?;
    let mut results = vec![start, end];
    let mut offset_from_prev_items = 0;
    if backward {
        // Items consume the range from the end anchor in list order, so
        // the last item ends up governing the segment nearest the start.
        for item in items {
            let (rolls, months) = month_rolls(item.period, item.roll_frequency)?;
            let mut offset_in_months = 0;
            for roll_number in 1..=rolls {
                offset_in_months = roll_number * months;
                let unrolled =
                    end.advance(-offset_in_months + offset_from_prev_items, TimeUnit::Months)?;
                results.push(item.roll_convention.apply(unrolled));
            }
            offset_from_prev_items -= offset_in_months;
        }
    } else {
        for item in items {
            let (rolls, months) = month_rolls(item.period, item.roll_frequency)?;
            let mut offset_in_months = 0;
            for roll_number in 1..=rolls {
                offset_in_months = roll_number * months;
                let unrolled =
                    start.advance(offset_in_months + offset_from_prev_items, TimeUnit::Months)?;
                results.push(item.roll_convention.apply(unrolled));
            }
            offset_from_prev_items += offset_in_months;
        }
    }
    Ok(sorted_unique(results))
}

/// Expand `(roll_frequency, total_span, roll_convention)` triplets from a
/// bare start date.
///
/// Offsets accumulate across triplets, so each triplet's dates follow on
/// from where the previous one ended.
pub fn unadjusted_dates_from_triplets(
    defs: &[(Period, Period, RollConvention)],
    start: Date,
) -> Result<Vec<Date>> {
    let mut offsets = Vec::new();
    for &(frequency, span, convention) in defs {
        let (rolls, months) = month_rolls(span, frequency)?;
        for _ in 0..rolls {
            let last = offsets.last().map_or(0, |&(o, _)| o);
            offsets.push((last + months, convention));
        }
    }
    let mut results = Vec::with_capacity(offsets.len());
    for (offset, convention) in offsets {
        let unrolled = start.advance(offset, TimeUnit::Months)?;
        results.push(convention.apply(unrolled));
    }
    Ok(sorted_unique(results))
}

/// Triplet expansion bounded by an end date, falling back to a plain
/// scheduler run when the meta definition does not cover the whole range.
///
/// `from_start` selects forward generation (offsets step from the start
/// date) or backward generation (offsets step from the end date).  When
/// the expanded definition runs out before reaching the far boundary, the
/// remainder is filled with `default_interval` / `default_roll` dates.
pub fn unadjusted_dates_in_range(
    defs: &[(Period, Period, RollConvention)],
    start: Date,
    end: Date,
    default_interval: Period,
    default_roll: RollConvention,
    from_start: bool,
) -> Result<Vec<Date>> {
    validate_range(start, end)?;
    let (from_date, to_date) = if from_start { (start, end) } else { (end, start) };

    let mut steps = Vec::new();
    for &(frequency, span, convention) in defs {
        let rolls = span.ratio(frequency)? as i32;
        if rolls == 0 {
            return Err(Error::InvalidPeriod(format!(
                "period interval {frequency} is greater than its covering duration {span}"
            )));
        }
        let step = if from_start { frequency } else { frequency.negated() };
        for _ in 0..rolls {
            steps.push((step, convention));
        }
    }

    if steps.is_empty() {
        let sched = if from_start {
            unadjusted_dates_from_effective(start, end, default_interval, default_roll)?
        } else {
            unadjusted_dates_from_termination(start, end, default_interval, default_roll)?
        };
        return Ok(sched.dates);
    }

    let mut result = vec![from_date];
    let mut reference = from_date;
    let mut exhausted = true;
    for (step, convention) in steps {
        let unrolled = step.add_to(reference)?;
        let rolled = convention.apply(unrolled);
        let past_boundary = if from_start {
            rolled > to_date
        } else {
            rolled < to_date
        };
        if past_boundary {
            result.push(to_date);
            exhausted = false;
            break;
        }
        result.push(rolled);
        reference = unrolled;
    }

    // Meta definition underran the range: fill the remainder with the
    // default interval and convention.
    if exhausted {
        let last = *result.last().expect("result holds at least from_date");
        if last != to_date {
            let sched = if from_start {
                unadjusted_dates_from_effective(last, to_date, default_interval, default_roll)?
            } else {
                unadjusted_dates_from_termination(to_date, last, default_interval, default_roll)?
            };
            result.extend(sched.dates);
        }
    }
    Ok(sorted_unique(result))
}
