//! Pure rate conversion functions.
//!
//! A compounding period of zero selects the continuous limit
//! (`exp`/`ln`); any positive period selects periodic compounding with
//! that period length in years.

use ra_core::errors::Result;
use ra_core::{CompoundingFrequency, DiscountFactor, Rate, Real, Time};

/// Year fractions this small are treated as zero by the forward-rate
/// conversion.
const TOLERANCE: Real = 1e-6;

/// Convert a zero rate to a discount factor.
///
/// `compounding_period == 0` selects continuous compounding
/// `exp(-r·t)`; otherwise `(1 + p·r)^(-t/p)` with period length `p`.
pub fn zero_rate_to_discount_factor(
    zero_rate: Rate,
    year_fraction: Time,
    compounding_period: Real,
) -> DiscountFactor {
    if compounding_period == 0.0 {
        (-zero_rate * year_fraction).exp()
    } else {
        let base = 1.0 + zero_rate * compounding_period;
        base.powf(-year_fraction / compounding_period)
    }
}

/// [`zero_rate_to_discount_factor`] with the period taken from a
/// frequency token (`"Continuous"`, `"Quarterly"`, ...).
pub fn zero_rate_to_discount_factor_with(
    zero_rate: Rate,
    year_fraction: Time,
    frequency: &str,
) -> Result<DiscountFactor> {
    let freq: CompoundingFrequency = frequency.parse()?;
    Ok(zero_rate_to_discount_factor(
        zero_rate,
        year_fraction,
        freq.period_fraction(),
    ))
}

/// Convert a discount factor to a zero rate — the inverse of
/// [`zero_rate_to_discount_factor`].
///
/// # Errors
/// `InvalidArgument` when `year_fraction` is zero (no rate equates a
/// discount factor over an empty interval) or when `discount_factor` is
/// not positive.
pub fn discount_factor_to_zero_rate(
    discount_factor: DiscountFactor,
    year_fraction: Time,
    compounding_period: Real,
) -> Result<Rate> {
    ra_core::ensure!(
        year_fraction != 0.0,
        "cannot imply a zero rate over a zero year fraction"
    );
    ra_core::ensure!(
        discount_factor > 0.0,
        "discount factor must be positive, got {discount_factor}"
    );
    if compounding_period == 0.0 {
        Ok(-discount_factor.ln() / year_fraction)
    } else {
        let power = -compounding_period / year_fraction;
        Ok((discount_factor.powf(power) - 1.0) / compounding_period)
    }
}

/// [`discount_factor_to_zero_rate`] with the period taken from a
/// frequency token.
pub fn discount_factor_to_zero_rate_with(
    discount_factor: DiscountFactor,
    year_fraction: Time,
    frequency: &str,
) -> Result<Rate> {
    let freq: CompoundingFrequency = frequency.parse()?;
    discount_factor_to_zero_rate(discount_factor, year_fraction, freq.period_fraction())
}

/// Simple forward rate between two discount factors.
///
/// Year fractions below an absolute tolerance of 1e-6 return zero rather
/// than amplifying noise in the quotient.
pub fn discount_factors_to_forward_rate(
    start_discount_factor: DiscountFactor,
    end_discount_factor: DiscountFactor,
    year_fraction: Time,
) -> Rate {
    if year_fraction.abs() <= TOLERANCE {
        return 0.0;
    }
    (start_discount_factor / end_discount_factor - 1.0) / year_fraction
}

/// Simple accrual rate implied by two discount factors.
pub fn rate_from_discount_factors(
    start_discount_factor: DiscountFactor,
    end_discount_factor: DiscountFactor,
    year_fraction: Time,
) -> Rate {
    if year_fraction == 0.0 {
        return 0.0;
    }
    (start_discount_factor / end_discount_factor - 1.0) / year_fraction
}

/// Terminal-wealth factor of one unit invested at `rate`.
///
/// Below one compounding period the investment accrues simple interest;
/// beyond it, periodic compounding applies.
pub fn terminal_wealth_from_zero_rate(
    rate: Rate,
    year_fraction: Time,
    frequency: CompoundingFrequency,
) -> Real {
    let period = frequency.period_fraction();
    if period == 0.0 {
        return (-rate * year_fraction).exp();
    }
    let compound_factor = if year_fraction > period {
        (1.0 + period * rate).powf(year_fraction)
    } else {
        1.0 + year_fraction * rate
    };
    1.0 / compound_factor
}
