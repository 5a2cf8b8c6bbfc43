//! `InterpolatedCurve` — a discrete curve queryable at arbitrary points.

use crate::discrete_curve::DiscreteCurve;
use ra_core::errors::{Error, Result};
use ra_core::{Real, Time};
use ra_math::{interpolation_from_name, Interpolation};

/// A curve space: discrete knots, an interpolation strategy, and an
/// extrapolation flag.
///
/// Queries inside the knot domain interpolate; queries outside fail with
/// [`Error::OutOfRange`] unless extrapolation was permitted at
/// construction, in which case the strategy's boundary behaviour applies.
#[derive(Debug)]
pub struct InterpolatedCurve {
    curve: DiscreteCurve,
    interpolation: Box<dyn Interpolation>,
    extrapolation_allowed: bool,
}

impl InterpolatedCurve {
    /// Build a curve space using a named interpolation method (see
    /// [`interpolation_from_name`]).
    pub fn new(
        curve: DiscreteCurve,
        method: &str,
        extrapolation_allowed: bool,
    ) -> Result<Self> {
        let interpolation = interpolation_from_name(method, curve.times(), curve.values())?;
        Ok(Self {
            curve,
            interpolation,
            extrapolation_allowed,
        })
    }

    /// Build a curve space with an externally constructed strategy.
    ///
    /// The strategy must have been built over the same knots as `curve`.
    pub fn with_strategy(
        curve: DiscreteCurve,
        interpolation: Box<dyn Interpolation>,
        extrapolation_allowed: bool,
    ) -> Self {
        Self {
            curve,
            interpolation,
            extrapolation_allowed,
        }
    }

    /// The underlying knots.
    pub fn curve(&self) -> &DiscreteCurve {
        &self.curve
    }

    /// Whether out-of-domain queries are permitted.
    pub fn extrapolation_allowed(&self) -> bool {
        self.extrapolation_allowed
    }

    /// Evaluate the curve at `x`.
    pub fn value(&self, x: Time) -> Result<Real> {
        if !self.interpolation.is_in_range(x) && !self.extrapolation_allowed {
            return Err(Error::OutOfRange {
                point: x,
                min: self.curve.x_min(),
                max: self.curve.x_max(),
            });
        }
        Ok(self.interpolation.value_at(x))
    }
}
