//! End-to-end test: quoted discount factors through zero-rate conversion,
//! curve construction, and interpolated queries.

use approx::assert_abs_diff_eq;
use ra_curves::rates::{discount_factor_to_zero_rate, zero_rate_to_discount_factor};
use ra_curves::{DiscreteCurve, InterpolatedCurve, ZeroRateDiscountCurve};
use ra_time::{Actual365Fixed, Date, DayCounter};

#[test]
fn quotes_to_curve_to_discount_factors() {
    // Market quotes: discount factors at pillar dates.
    let base = Date::from_ymd(2025, 1, 2).unwrap();
    let pillars = [
        Date::from_ymd(2025, 4, 2).unwrap(),
        Date::from_ymd(2025, 7, 2).unwrap(),
        Date::from_ymd(2026, 1, 2).unwrap(),
        Date::from_ymd(2027, 1, 2).unwrap(),
        Date::from_ymd(2030, 1, 2).unwrap(),
    ];
    let quotes = [0.995, 0.988, 0.972, 0.941, 0.852];

    let curve = ZeroRateDiscountCurve::from_discount_factors(
        base,
        &pillars,
        &quotes,
        &Actual365Fixed,
        "LinearInterpolation",
        false,
    )
    .unwrap();

    let dc = Actual365Fixed;

    // Pillar quotes are reproduced exactly.
    for (&date, &df) in pillars.iter().zip(&quotes) {
        let t = dc.year_fraction(base, date);
        assert_abs_diff_eq!(curve.value(t).unwrap(), df, epsilon = 1e-12);
    }

    // Between pillars the zero rate interpolates linearly, and the
    // discount factor is the exponential transform of it.
    let t1 = dc.year_fraction(base, pillars[1]);
    let t2 = dc.year_fraction(base, pillars[2]);
    let t_mid = (t1 + t2) / 2.0;
    let z1 = discount_factor_to_zero_rate(quotes[1], t1, 0.0).unwrap();
    let z2 = discount_factor_to_zero_rate(quotes[2], t2, 0.0).unwrap();
    let z_mid = (z1 + z2) / 2.0;
    assert_abs_diff_eq!(curve.zero_rate(t_mid).unwrap(), z_mid, epsilon = 1e-12);
    assert_abs_diff_eq!(
        curve.value(t_mid).unwrap(),
        zero_rate_to_discount_factor(z_mid, t_mid, 0.0),
        epsilon = 1e-12
    );

    // Discount factors decrease with maturity for a positive-rate curve.
    let mut last = 1.0;
    for q in (1..=20).map(|i| i as f64 * 0.25) {
        let df = curve.value(q).unwrap();
        assert!(df < last, "discount factor did not decrease at t = {q}");
        last = df;
    }
}

#[test]
fn log_linear_space_reproduces_discount_quotes_between_pillars() {
    // Interpolating discount factors directly in log space: midpoints are
    // the geometric mean of the neighbouring quotes.
    let times = vec![0.5, 1.0, 2.0, 5.0];
    let dfs = vec![0.99, 0.97, 0.93, 0.84];
    let curve = InterpolatedCurve::new(
        DiscreteCurve::new(times, dfs).unwrap(),
        "LogLinearInterpolation",
        false,
    )
    .unwrap();
    let expected = (0.97f64 * 0.93).sqrt();
    assert_abs_diff_eq!(curve.value(1.5).unwrap(), expected, epsilon = 1e-12);
}
