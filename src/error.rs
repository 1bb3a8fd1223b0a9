//! Error types for Xcurve.
//!
//! This module provides the application-level errors using `thiserror`.
//! Expression failures live in [`crate::eval::EvalError`] and never escape
//! the evaluator as anything but a value.

use thiserror::Error;

/// Result type alias for Xcurve operations.
pub type Result<T> = std::result::Result<T, XcurveError>;

/// Errors that can occur in Xcurve outside of expression evaluation.
#[derive(Debug, Error)]
pub enum XcurveError {
    /// The x-interval is empty, reversed or not finite.
    #[error("Invalid x-range: [{low}, {high}]")]
    InvalidRange {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },

    /// Too few sample points to draw a curve.
    #[error("Invalid point count: {0} (need at least 2)")]
    InvalidPointCount(usize),

    /// No expression was supplied.
    #[error("No expression given")]
    EmptyExpression,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal could not be set up or restored.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl XcurveError {
    /// Create an InvalidRange error.
    pub fn invalid_range(low: f64, high: f64) -> Self {
        Self::InvalidRange { low, high }
    }

    /// Create a Terminal error.
    pub fn terminal(err: impl std::fmt::Display) -> Self {
        Self::Terminal(err.to_string())
    }
}
