//! Zero-rate curves presenting discount factors.

use crate::discrete_curve::DiscreteCurve;
use crate::interpolated_curve::InterpolatedCurve;
use crate::rates::discount_factor_to_zero_rate;
use ra_core::errors::{Error, Result};
use ra_core::{DiscountFactor, Rate, Time};
use ra_time::{Date, DayCounter};

/// A curve that stores continuously-compounded zero rates internally and
/// presents discount factors on read: `P(t) = exp(-t · z(t))`.
///
/// Interpolation happens in zero-rate space, which keeps long-dated
/// discount factors positive and monotonic for reasonable rate inputs.
#[derive(Debug)]
pub struct ZeroRateDiscountCurve {
    zeros: InterpolatedCurve,
}

impl ZeroRateDiscountCurve {
    /// Build from (time, zero-rate) knots and a named interpolation
    /// method.
    pub fn new(
        times: Vec<Time>,
        zero_rates: Vec<Rate>,
        method: &str,
        extrapolation_allowed: bool,
    ) -> Result<Self> {
        let curve = DiscreteCurve::new(times, zero_rates)?;
        Ok(Self {
            zeros: InterpolatedCurve::new(curve, method, extrapolation_allowed)?,
        })
    }

    /// Build from quoted discount factors at dates, converting each quote
    /// to a continuously-compounded zero rate on construction.
    ///
    /// Every date must lie strictly after `base_date` — a quote at the
    /// base date has no implied zero rate.
    pub fn from_discount_factors(
        base_date: Date,
        dates: &[Date],
        discount_factors: &[DiscountFactor],
        day_counter: &dyn DayCounter,
        method: &str,
        extrapolation_allowed: bool,
    ) -> Result<Self> {
        if dates.len() != discount_factors.len() {
            return Err(Error::InconsistentSchedule(format!(
                "quote count mismatch: {} dates vs {} discount factors",
                dates.len(),
                discount_factors.len()
            )));
        }
        let mut times = Vec::with_capacity(dates.len());
        let mut zeros = Vec::with_capacity(dates.len());
        for (&date, &df) in dates.iter().zip(discount_factors) {
            if date <= base_date {
                return Err(Error::InvalidArgument(format!(
                    "quote date {date} is not after the base date {base_date}"
                )));
            }
            let t = day_counter.year_fraction(base_date, date);
            times.push(t);
            zeros.push(discount_factor_to_zero_rate(df, t, 0.0)?);
        }
        Self::new(times, zeros, method, extrapolation_allowed)
    }

    /// The interpolated zero rate at `t`.
    pub fn zero_rate(&self, t: Time) -> Result<Rate> {
        self.zeros.value(t)
    }

    /// The discount factor at `t`: `exp(-t · z(t))`, with `P(0) = 1`.
    pub fn value(&self, t: Time) -> Result<DiscountFactor> {
        if t == 0.0 {
            return Ok(1.0);
        }
        let z = self.zeros.value(t)?;
        Ok((-z * t).exp())
    }

    /// The underlying zero-rate knots.
    pub fn zeros(&self) -> &DiscreteCurve {
        self.zeros.curve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ra_time::Actual365Fixed;

    fn sample() -> ZeroRateDiscountCurve {
        ZeroRateDiscountCurve::new(
            vec![0.25, 0.5, 1.0, 2.0, 5.0],
            vec![0.02, 0.025, 0.03, 0.035, 0.04],
            "LinearInterpolation",
            false,
        )
        .unwrap()
    }

    #[test]
    fn discount_factor_at_zero_is_one() {
        assert_eq!(sample().value(0.0).unwrap(), 1.0);
    }

    #[test]
    fn presents_exp_transform_of_zero_rates() {
        let curve = sample();
        for t in [0.25, 0.4, 1.0, 3.0, 5.0] {
            let z = curve.zero_rate(t).unwrap();
            assert_abs_diff_eq!(curve.value(t).unwrap(), (-z * t).exp(), epsilon = 1e-15);
        }
    }

    #[test]
    fn out_of_range_respects_extrapolation_flag() {
        assert!(matches!(
            sample().value(10.0),
            Err(Error::OutOfRange { .. })
        ));
        let extrap = ZeroRateDiscountCurve::new(
            vec![0.25, 0.5, 1.0],
            vec![0.02, 0.025, 0.03],
            "LinearInterpolation",
            true,
        )
        .unwrap();
        assert!(extrap.value(2.0).is_ok());
    }

    #[test]
    fn from_discount_factors_roundtrips_quotes() {
        let base = Date::from_ymd(2025, 1, 2).unwrap();
        let dates = [
            Date::from_ymd(2025, 7, 2).unwrap(),
            Date::from_ymd(2026, 1, 2).unwrap(),
            Date::from_ymd(2027, 1, 2).unwrap(),
        ];
        let dfs = [0.99, 0.97, 0.93];
        let curve = ZeroRateDiscountCurve::from_discount_factors(
            base,
            &dates,
            &dfs,
            &Actual365Fixed,
            "LinearInterpolation",
            false,
        )
        .unwrap();
        let dc = Actual365Fixed;
        for (&date, &df) in dates.iter().zip(&dfs) {
            let t = dc.year_fraction(base, date);
            assert_abs_diff_eq!(curve.value(t).unwrap(), df, epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_quote_on_base_date() {
        let base = Date::from_ymd(2025, 1, 2).unwrap();
        let result = ZeroRateDiscountCurve::from_discount_factors(
            base,
            &[base, Date::from_ymd(2026, 1, 2).unwrap()],
            &[1.0, 0.97],
            &Actual365Fixed,
            "LinearInterpolation",
            false,
        );
        assert!(result.is_err());
    }
}
