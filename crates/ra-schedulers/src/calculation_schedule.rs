//! `CalculationPeriodSchedule` — the stub-aware list of calculation periods
//! underlying a payment stream.
//!
//! Regular periods are generated outward from the first-regular-period
//! anchor: forward to the termination date and, when the anchor sits after
//! the effective date, backward to cover the front of the range.  Whatever
//! remainder the regular lattice leaves is spliced in as a stub according
//! to the requested [`StubPeriodType`].

use crate::calculation_period::{CalculationPeriod, StubPeriodType};
use ra_core::errors::{Error, Result};
use ra_time::{Date, Period, RollConvention};

/// An ordered list of calculation periods with stub metadata.
#[derive(Debug, Clone)]
pub struct CalculationPeriodSchedule {
    periods: Vec<CalculationPeriod>,
    period_interval: Period,
    roll_convention: RollConvention,
    has_initial_stub: bool,
    has_final_stub: bool,
}

impl CalculationPeriodSchedule {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Build a schedule between two dates, deriving the first regular
    /// period start by one roll-adjusted step from the effective date.
    ///
    /// A range shorter than one interval collapses to a single stub
    /// period covering it.
    pub fn from_dates(
        effective: Date,
        termination: Date,
        interval: Period,
        roll: RollConvention,
        stub_type: Option<StubPeriodType>,
    ) -> Result<Self> {
        validate(effective, termination, interval)?;
        let regular_start = first_regular_period_start(effective, interval, roll)?;
        if regular_start >= termination {
            let periods = vec![CalculationPeriod::new(effective, termination)];
            return Ok(Self::from_parts(periods, interval, roll));
        }
        Self::from_regular_period_start(
            effective,
            termination,
            regular_start,
            interval,
            roll,
            stub_type,
        )
    }

    /// Build a schedule with an explicit first-regular-period anchor.
    ///
    /// The gap between the effective date and the anchor (if any) becomes
    /// the initial stub; a remainder before the termination date becomes
    /// the final stub.  With no explicit `stub_type` a trailing remainder
    /// merges into the last regular period (long final) and a leading gap
    /// stays its own short period.
    pub fn from_regular_period_start(
        effective: Date,
        termination: Date,
        regular_start: Date,
        interval: Period,
        roll: RollConvention,
        stub_type: Option<StubPeriodType>,
    ) -> Result<Self> {
        validate(effective, termination, interval)?;
        if regular_start < effective || regular_start >= termination {
            return Err(Error::InconsistentSchedule(format!(
                "first regular period start {regular_start} outside [{effective}, {termination})"
            )));
        }

        let (mut forward, irregular_final) =
            forward_regular_periods(regular_start, termination, interval, roll)?;
        if irregular_final {
            if forward.is_empty() {
                forward.push(CalculationPeriod::new(regular_start, termination));
            } else {
                splice_final_stub(
                    &mut forward,
                    termination,
                    stub_type.unwrap_or(StubPeriodType::LongFinal),
                );
            }
        }

        let mut periods = Vec::new();
        if regular_start > effective {
            let (mut backward, irregular_initial) =
                backward_regular_periods(regular_start, effective, interval, roll)?;
            if irregular_initial {
                // An explicit final-only stub type still forces the leading
                // gap long when the anchor sits more than one interval
                // after the effective date.
                let one_interval_in = interval.add_to(effective)?;
                let initial_stub = match stub_type {
                    Some(st) if st.is_initial() => st,
                    Some(_) if regular_start > one_interval_in => StubPeriodType::LongInitial,
                    _ => StubPeriodType::ShortInitial,
                };
                if backward.is_empty() {
                    backward.push(CalculationPeriod::new(effective, regular_start));
                } else {
                    splice_initial_stub(&mut backward, effective, initial_stub);
                }
            }
            periods.append(&mut backward);
        }
        periods.append(&mut forward);

        Ok(Self::from_parts(periods, interval, roll))
    }

    /// Build a schedule with both regular-period anchors stated
    /// explicitly.
    ///
    /// Regular periods stepped forward from `first_regular_start` must
    /// land exactly on `last_regular_end`; the anchors are rejected as
    /// inconsistent otherwise.
    pub fn from_regular_bounds(
        effective: Date,
        termination: Date,
        first_regular_start: Date,
        last_regular_end: Date,
        interval: Period,
        roll: RollConvention,
        stub_type: Option<StubPeriodType>,
    ) -> Result<Self> {
        validate(effective, termination, interval)?;
        let (regular, _) =
            forward_regular_periods(first_regular_start, termination, interval, roll)?;
        if let Some(last) = regular.last() {
            if last.unadjusted_end != last_regular_end {
                return Err(Error::InconsistentSchedule(format!(
                    "regular periods from {first_regular_start} end at {}, not at the stated last regular period end {last_regular_end}",
                    last.unadjusted_end
                )));
            }
        }
        Self::from_regular_period_start(
            effective,
            termination,
            first_regular_start,
            interval,
            roll,
            stub_type,
        )
    }

    /// Build a whole-multiple schedule from an effective date and the
    /// interval out to the termination date.
    ///
    /// # Errors
    /// `InvalidPeriod` when `period_interval` does not divide
    /// `interval_to_termination` exactly — the requested frequency cannot
    /// roll onto the termination date and nothing is silently truncated.
    pub fn from_interval_to_termination(
        effective: Date,
        interval_to_termination: Period,
        period_interval: Period,
        roll: RollConvention,
    ) -> Result<Self> {
        let divisor = interval_to_termination.ratio(period_interval)?;
        if divisor <= 0.0 || divisor.fract() != 0.0 {
            return Err(Error::InvalidPeriod(format!(
                "period {period_interval} does not roll onto the termination interval {interval_to_termination}"
            )));
        }
        let start = roll.apply(effective);
        let termination = interval_to_termination.add_to(start)?;
        Self::from_regular_period_start(start, termination, start, period_interval, roll, None)
    }

    /// Build a schedule anchored on an explicit last-regular-period end.
    ///
    /// Regular periods are rolled back from the anchor to locate the first
    /// regular period start, then the schedule is generated as usual.
    pub fn from_last_regular_end(
        effective: Date,
        termination: Date,
        interval: Period,
        last_regular_end: Date,
        roll: RollConvention,
        stub_type: Option<StubPeriodType>,
    ) -> Result<Self> {
        validate(effective, termination, interval)?;
        let last_regular_start = interval.subtract_from(last_regular_end)?;
        if last_regular_start < effective {
            return Err(Error::InconsistentSchedule(format!(
                "last regular period end {last_regular_end} leaves no room after the effective date {effective}"
            )));
        }
        if last_regular_start == effective {
            return Self::from_regular_period_start(
                effective,
                termination,
                effective,
                interval,
                roll,
                stub_type,
            );
        }
        let (regular, _) =
            backward_regular_periods(last_regular_start, effective, interval, roll)?;
        let first_regular_start = regular
            .first()
            .map(|p| p.unadjusted_start)
            .unwrap_or(last_regular_start);
        Self::from_regular_period_start(
            effective,
            termination,
            first_regular_start,
            interval,
            roll,
            stub_type,
        )
    }

    /// Build exactly `n_coupon_periods` regular periods counting back from
    /// the termination date.  No effective date is involved.
    pub fn from_coupon_count(
        termination: Date,
        interval: Period,
        n_coupon_periods: usize,
    ) -> Result<Self> {
        if interval.length <= 0 {
            return Err(Error::InvalidPeriod(format!(
                "schedule period must be positive, got {interval}"
            )));
        }
        if n_coupon_periods == 0 {
            return Err(Error::InvalidArgument(
                "the number of coupon periods must be greater than zero".into(),
            ));
        }
        let mut periods = Vec::with_capacity(n_coupon_periods);
        let mut end = termination;
        for i in 1..=n_coupon_periods {
            let start = (interval * i as i32).subtract_from(termination)?;
            periods.insert(0, CalculationPeriod::new(start, end));
            end = start;
        }
        Ok(Self::from_parts(periods, interval, RollConvention::None))
    }

    /// Build a bond-style schedule rolled back from the termination date.
    ///
    /// With `full_first_coupon` false the first period truncates at the
    /// effective date; with it true the first period keeps a full interval
    /// and may start before the effective date.
    pub fn from_full_first_coupon(
        effective: Date,
        termination: Date,
        interval: Period,
        full_first_coupon: bool,
    ) -> Result<Self> {
        validate(effective, termination, interval)?;
        let mut periods = Vec::new();
        let mut end = termination;
        let mut i = 1;
        loop {
            let mut start = (interval * i).subtract_from(termination)?;
            let mut reached_first = false;
            if !full_first_coupon && start < effective {
                reached_first = true;
                start = effective;
            } else if start <= effective {
                reached_first = true;
            }
            periods.insert(0, CalculationPeriod::new(start, end));
            end = start;
            i += 1;
            if reached_first {
                break;
            }
        }
        Ok(Self::from_parts(periods, interval, RollConvention::None))
    }

    fn from_parts(
        periods: Vec<CalculationPeriod>,
        period_interval: Period,
        roll_convention: RollConvention,
    ) -> Self {
        let has_initial_stub = periods.first().map_or(false, |p| {
            period_interval
                .add_to(p.unadjusted_start)
                .map_or(true, |regular_end| regular_end != p.unadjusted_end)
        });
        let has_final_stub = periods.last().map_or(false, |p| {
            period_interval
                .subtract_from(p.unadjusted_end)
                .map_or(true, |regular_start| regular_start != p.unadjusted_start)
        });
        Self {
            periods,
            period_interval,
            roll_convention,
            has_initial_stub,
            has_final_stub,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The calculation periods, in order.
    pub fn periods(&self) -> &[CalculationPeriod] {
        &self.periods
    }

    /// The nominal regular period interval.
    pub fn period_interval(&self) -> Period {
        self.period_interval
    }

    /// The roll convention the schedule was generated with.
    pub fn roll_convention(&self) -> RollConvention {
        self.roll_convention
    }

    /// Return `true` if the first period is irregular.
    pub fn has_initial_stub(&self) -> bool {
        self.has_initial_stub
    }

    /// Return `true` if the last period is irregular.
    pub fn has_final_stub(&self) -> bool {
        self.has_final_stub
    }

    /// The unadjusted start dates of all periods.
    pub fn unadjusted_start_dates(&self) -> Vec<Date> {
        self.periods.iter().map(|p| p.unadjusted_start).collect()
    }

    /// The unadjusted end dates of all periods.
    pub fn unadjusted_end_dates(&self) -> Vec<Date> {
        self.periods.iter().map(|p| p.unadjusted_end).collect()
    }
}

// ── Generation helpers ────────────────────────────────────────────────────────

fn validate(effective: Date, termination: Date, interval: Period) -> Result<()> {
    if interval.length <= 0 {
        return Err(Error::InvalidPeriod(format!(
            "schedule period must be positive, got {interval}"
        )));
    }
    if effective >= termination {
        return Err(Error::InconsistentSchedule(format!(
            "effective date {effective} must precede termination date {termination}"
        )));
    }
    Ok(())
}

/// One roll-adjusted interval step from `start`.
fn first_regular_period_start(start: Date, interval: Period, roll: RollConvention) -> Result<Date> {
    Ok(roll.apply(interval.add_to(start)?))
}

/// Generate regular periods stepping forward from `start` toward `end`.
///
/// The second value reports whether a remainder shorter or longer than a
/// whole interval was left before `end`.
fn forward_regular_periods(
    start: Date,
    end: Date,
    interval: Period,
    roll: RollConvention,
) -> Result<(Vec<CalculationPeriod>, bool)> {
    let mut period_start = start;
    let mut period_end = interval.add_to(period_start)?;
    let mut periods = Vec::new();
    loop {
        let period = CalculationPeriod::new(roll.apply(period_start), roll.apply(period_end));
        if period.unadjusted_end < end {
            periods.push(period);
            period_start = period_end;
            period_end = interval.add_to(period_start)?;
        } else if period.unadjusted_end == end {
            periods.push(period);
            return Ok((periods, false));
        } else {
            return Ok((periods, true));
        }
    }
}

/// Generate regular periods stepping backward from `anchor` toward `far`.
fn backward_regular_periods(
    anchor: Date,
    far: Date,
    interval: Period,
    roll: RollConvention,
) -> Result<(Vec<CalculationPeriod>, bool)> {
    let mut period_end = anchor;
    let mut period_start = interval.subtract_from(period_end)?;
    let mut periods = Vec::new();
    loop {
        let period = CalculationPeriod::new(roll.apply(period_start), roll.apply(period_end));
        if period.unadjusted_start > far {
            periods.insert(0, period);
            period_end = period_start;
            period_start = interval.subtract_from(period_end)?;
        } else if period.unadjusted_start == far {
            periods.insert(0, period);
            return Ok((periods, false));
        } else {
            return Ok((periods, true));
        }
    }
}

/// Splice the remainder between the last regular period and `end`.
fn splice_final_stub(periods: &mut Vec<CalculationPeriod>, end: Date, stub: StubPeriodType) {
    let last = *periods.last().expect("periods must be non-empty");
    if last.unadjusted_end < end {
        if stub == StubPeriodType::LongFinal {
            periods.pop();
            periods.push(CalculationPeriod::new(last.unadjusted_start, end));
        } else {
            periods.push(CalculationPeriod::new(last.unadjusted_end, end));
        }
    }
}

/// Splice the remainder between `start` and the first regular period.
fn splice_initial_stub(periods: &mut Vec<CalculationPeriod>, start: Date, stub: StubPeriodType) {
    let first = periods[0];
    if first.unadjusted_start > start {
        if stub == StubPeriodType::LongInitial {
            periods[0] = CalculationPeriod::new(start, first.unadjusted_end);
        } else {
            periods.insert(0, CalculationPeriod::new(start, first.unadjusted_start));
        }
    }
}
