//! `DiscreteCurve` — an ordered set of (time, value) knots.

use crate::point::Point1D;
use ra_core::errors::{Error, Result};
use ra_core::{Real, Time};

/// An x-sorted set of curve knots.
///
/// Construction enforces strictly increasing times; the knot data is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteCurve {
    times: Vec<Time>,
    values: Vec<Real>,
}

impl DiscreteCurve {
    /// Create a curve from strictly increasing `times` and matching
    /// `values`.
    pub fn new(times: Vec<Time>, values: Vec<Real>) -> Result<Self> {
        if times.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "a discrete curve needs at least 2 knots, got {}",
                times.len()
            )));
        }
        if times.len() != values.len() {
            return Err(Error::InconsistentSchedule(format!(
                "knot count mismatch: {} times vs {} values",
                times.len(),
                values.len()
            )));
        }
        if let Some(w) = times.windows(2).find(|w| w[1] <= w[0]) {
            return Err(Error::InvalidArgument(format!(
                "curve times must be strictly increasing, found {} after {}",
                w[1], w[0]
            )));
        }
        Ok(Self { times, values })
    }

    /// The knot times, ascending.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// The knot values, in time order.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`: construction requires at least two knots.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The `i`-th knot as a point.
    pub fn point(&self, i: usize) -> Point1D {
        Point1D::new(self.times[i], self.values[i])
    }

    /// Smallest knot time.
    pub fn x_min(&self) -> Time {
        self.times[0]
    }

    /// Largest knot time.
    pub fn x_max(&self) -> Time {
        *self.times.last().expect("curve has at least 2 knots")
    }

    /// The knot pair bracketing `x`, found by binary search.
    ///
    /// Returns `None` when `x` lands exactly on a knot — no interpolation
    /// is needed and the caller should use the knot value directly.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] when `x` lies outside the knot domain.
    pub fn closest_values(&self, x: Time) -> Result<Option<(Point1D, Point1D)>> {
        if x < self.x_min() || x > self.x_max() {
            return Err(Error::OutOfRange {
                point: x,
                min: self.x_min(),
                max: self.x_max(),
            });
        }
        let upper = self.times.partition_point(|&t| t < x);
        if self.times[upper] == x {
            return Ok(None);
        }
        Ok(Some((self.point(upper - 1), self.point(upper))))
    }
}
