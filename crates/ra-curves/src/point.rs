//! Curve points.

use ra_core::{Real, Time};
use ra_time::{Date, DayCounter};

/// An (x, y) pair where `x` is a year fraction and `y` a curve value
/// (discount factor, zero rate, volatility, ...).  Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point1D {
    /// Year fraction from the curve's base date.
    pub x: Time,
    /// Function value at `x`.
    pub y: Real,
}

impl Point1D {
    /// Create a point.
    pub fn new(x: Time, y: Real) -> Self {
        Self { x, y }
    }
}

/// A curve point keyed by a calendar date.
///
/// The x-coordinate is the day-count year fraction from the base date, so
/// two `DateTimePoint1D`s built with different day counters are not
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTimePoint1D {
    /// The date this point belongs to.
    pub date: Date,
    /// Year fraction from the base date under the chosen day counter.
    pub x: Time,
    /// Function value.
    pub y: Real,
}

impl DateTimePoint1D {
    /// Create a date-keyed point, computing the year fraction from
    /// `base_date` under `day_counter`.
    pub fn new(base_date: Date, date: Date, value: Real, day_counter: &dyn DayCounter) -> Self {
        Self {
            date,
            x: day_counter.year_fraction(base_date, date),
            y: value,
        }
    }

    /// The underlying (year fraction, value) pair.
    pub fn point(&self) -> Point1D {
        Point1D::new(self.x, self.y)
    }
}
