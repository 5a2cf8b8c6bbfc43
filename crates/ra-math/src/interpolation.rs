//! 1D interpolation strategies.
//!
//! A curve owns one strategy as a boxed trait object; the strategy decides
//! both the in-range shape and the boundary behaviour used when a caller
//! has explicitly permitted extrapolation (linear extension for the linear
//! family, flat for the piecewise-constant step).

use ra_core::errors::{Error, Result};
use ra_core::Real;

/// A 1D interpolation function defined by a set of knots.
pub trait Interpolation: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x`.
    ///
    /// Outside `[x_min, x_max]` the strategy's boundary behaviour applies;
    /// gating out-of-range queries is the owning curve's responsibility.
    fn value_at(&self, x: Real) -> Real;

    /// Lower bound of the knot domain.
    fn x_min(&self) -> Real;

    /// Upper bound of the knot domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` lies within the knot domain.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

/// Validate a knot set: at least two points, equal lengths, strictly
/// increasing abscissae.
fn check_knots(xs: &[Real], ys: &[Real]) -> Result<()> {
    ra_core::ensure!(xs.len() >= 2, "need at least 2 knots, got {}", xs.len());
    ra_core::ensure!(
        xs.len() == ys.len(),
        "knot count mismatch: {} x-values vs {} y-values",
        xs.len(),
        ys.len()
    );
    if let Some(w) = xs.windows(2).find(|w| w[1] <= w[0]) {
        return Err(Error::InvalidArgument(format!(
            "x-values must be strictly increasing, found {} after {}",
            w[1], w[0]
        )));
    }
    Ok(())
}

/// Index of the segment containing `x`, clamped to the terminal segments.
fn locate(xs: &[Real], x: Real) -> usize {
    let n = xs.len();
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }
    xs.partition_point(|&knot| knot <= x) - 1
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation between adjacent knots.
///
/// Beyond the boundary knots the terminal segment is extended, so
/// extrapolation (where permitted) is linear.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct from strictly increasing `xs` and corresponding `ys`.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_knots(xs, ys)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }
}

impl Interpolation for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().unwrap()
    }

    fn value_at(&self, x: Real) -> Real {
        let i = locate(&self.xs, x);
        let dx = self.xs[i + 1] - self.xs[i];
        self.ys[i] + (x - self.xs[i]) * (self.ys[i + 1] - self.ys[i]) / dx
    }
}

// ── Log-linear ────────────────────────────────────────────────────────────────

/// Log-linear interpolation: `log(y)` is interpolated linearly and the
/// result exponentiated.  The natural choice for discount factors.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolation {
    inner: LinearInterpolation,
}

impl LogLinearInterpolation {
    /// Construct from strictly increasing `xs` and strictly positive `ys`.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        if let Some(&y) = ys.iter().find(|&&y| y <= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "log-linear interpolation requires positive y-values, found {y}"
            )));
        }
        let log_ys: Vec<Real> = ys.iter().map(|&y| y.ln()).collect();
        Ok(Self {
            inner: LinearInterpolation::new(xs, &log_ys)?,
        })
    }
}

impl Interpolation for LogLinearInterpolation {
    fn x_min(&self) -> Real {
        self.inner.x_min()
    }

    fn x_max(&self) -> Real {
        self.inner.x_max()
    }

    fn value_at(&self, x: Real) -> Real {
        self.inner.value_at(x).exp()
    }
}

// ── Piecewise constant ────────────────────────────────────────────────────────

/// Piecewise-constant (left-node step) interpolation; flat beyond the
/// boundary knots.
#[derive(Debug, Clone)]
pub struct PiecewiseConstantInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl PiecewiseConstantInterpolation {
    /// Construct from strictly increasing `xs` and corresponding `ys`.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_knots(xs, ys)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }
}

impl Interpolation for PiecewiseConstantInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().unwrap()
    }

    fn value_at(&self, x: Real) -> Real {
        if x >= *self.xs.last().unwrap() {
            return *self.ys.last().unwrap();
        }
        self.ys[locate(&self.xs, x)]
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

/// Build an interpolation strategy by its registered name.
///
/// Known names: `"LinearInterpolation"`, `"LogLinearInterpolation"`,
/// `"PiecewiseConstantInterpolation"`.
pub fn interpolation_from_name(
    name: &str,
    xs: &[Real],
    ys: &[Real],
) -> Result<Box<dyn Interpolation>> {
    match name {
        "LinearInterpolation" => Ok(Box::new(LinearInterpolation::new(xs, ys)?)),
        "LogLinearInterpolation" => Ok(Box::new(LogLinearInterpolation::new(xs, ys)?)),
        "PiecewiseConstantInterpolation" => {
            Ok(Box::new(PiecewiseConstantInterpolation::new(xs, ys)?))
        }
        _ => Err(Error::InvalidArgument(format!(
            "unknown interpolation method {name:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn linear_between_knots() {
        let interp = LinearInterpolation::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_abs_diff_eq!(interp.value_at(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.value_at(1.5), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn linear_hits_knots_exactly() {
        let xs = [0.0, 0.5, 1.0, 2.0, 5.0];
        let ys = [0.02, 0.025, 0.03, 0.035, 0.04];
        let interp = LinearInterpolation::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_abs_diff_eq!(interp.value_at(*x), *y, epsilon = 1e-14);
        }
    }

    #[test]
    fn linear_extends_terminal_segments() {
        let interp = LinearInterpolation::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_abs_diff_eq!(interp.value_at(2.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.value_at(-1.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn log_linear_midpoint() {
        let interp =
            LogLinearInterpolation::new(&[0.0, 1.0], &[1.0, std::f64::consts::E]).unwrap();
        // log(y) at 0.5 is 0.5, so y is e^0.5.
        assert_abs_diff_eq!(
            interp.value_at(0.5),
            std::f64::consts::E.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn log_linear_rejects_nonpositive() {
        assert!(LogLinearInterpolation::new(&[0.0, 1.0], &[1.0, 0.0]).is_err());
        assert!(LogLinearInterpolation::new(&[0.0, 1.0], &[1.0, -0.5]).is_err());
    }

    #[test]
    fn piecewise_constant_steps() {
        let interp =
            PiecewiseConstantInterpolation::new(&[0.0, 1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_abs_diff_eq!(interp.value_at(0.5), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.value_at(1.5), 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.value_at(2.0), 3.0, epsilon = 1e-15);
        // Flat beyond the boundary knots.
        assert_abs_diff_eq!(interp.value_at(9.0), 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(interp.value_at(-1.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn rejects_bad_knot_sets() {
        assert!(LinearInterpolation::new(&[0.0], &[1.0]).is_err());
        assert!(LinearInterpolation::new(&[0.0, 1.0], &[1.0]).is_err());
        assert!(LinearInterpolation::new(&[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
        assert!(LinearInterpolation::new(&[0.0, 2.0, 1.0], &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn factory_by_name() {
        let xs = [0.0, 1.0];
        let ys = [1.0, 2.0];
        assert!(interpolation_from_name("LinearInterpolation", &xs, &ys).is_ok());
        assert!(interpolation_from_name("LogLinearInterpolation", &xs, &ys).is_ok());
        assert!(interpolation_from_name("PiecewiseConstantInterpolation", &xs, &ys).is_ok());
        assert!(interpolation_from_name("WingModelInterpolation", &xs, &ys).is_err());
    }

    proptest! {
        #[test]
        fn linear_is_bounded_by_knot_values(x in 0.0f64..10.0) {
            let xs = [0.0, 2.5, 5.0, 10.0];
            let ys = [0.01, 0.02, 0.015, 0.03];
            let interp = LinearInterpolation::new(&xs, &ys).unwrap();
            let v = interp.value_at(x);
            let lo = ys.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
        }
    }
}
