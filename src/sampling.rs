//! View intervals and sample vectors.

use std::fmt;

use ndarray::Array1;

use crate::error::{Result, XcurveError};

/// A closed, finite, non-empty x-interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRange {
    low: f64,
    high: f64,
}

impl ViewRange {
    /// Create an interval, rejecting reversed, empty or non-finite bounds.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if low.is_finite() && high.is_finite() && low < high && (high - low).is_finite() {
            Ok(Self { low, high })
        } else {
            Err(XcurveError::invalid_range(low, high))
        }
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Width of the interval.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Midpoint of the interval.
    pub fn center(&self) -> f64 {
        self.low + self.width() / 2.0
    }

    /// Whether `x` lies inside the interval.
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Bounds as the `[low, high]` pair chart axes expect.
    pub fn bounds(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

impl Default for ViewRange {
    fn default() -> Self {
        Self {
            low: -10.0,
            high: 10.0,
        }
    }
}

impl fmt::Display for ViewRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Evenly spaced samples over `range`, both ends included.
pub fn sample(range: ViewRange, points: usize) -> Array1<f64> {
    let mut samples = Array1::linspace(range.low, range.high, points);
    // linspace accumulates the step, so pin the closing bound exactly
    if let Some(last) = samples.last_mut() {
        if points > 1 {
            *last = range.high;
        }
    }
    samples
}
