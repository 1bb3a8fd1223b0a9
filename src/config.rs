//! Session and layout configuration.

use crate::error::{Result, XcurveError};
use crate::sampling::ViewRange;

/// Point count for the interactive plot.
pub const DEFAULT_INTERACTIVE_POINTS: usize = 10_000;

/// Point count for `--dump` output.
pub const DEFAULT_DUMP_POINTS: usize = 400;

/// How the curve is sampled and navigated.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Interval shown at start and on reset.
    pub x_range: ViewRange,
    /// Samples per evaluation.
    pub num_points: usize,
    /// Width multiplier for one zoom-in step (zoom-out uses the inverse).
    pub zoom_factor: f64,
    /// Fraction of the width moved by one pan step.
    pub pan_fraction: f64,
}

impl PlotConfig {
    /// Create a configuration, validating the point count.
    pub fn new(x_range: ViewRange, num_points: usize) -> Result<Self> {
        if num_points < 2 {
            return Err(XcurveError::InvalidPointCount(num_points));
        }
        Ok(Self {
            x_range,
            num_points,
            ..Self::default()
        })
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_range: ViewRange::default(),
            num_points: DEFAULT_INTERACTIVE_POINTS,
            zoom_factor: 0.8,
            pan_fraction: 0.1,
        }
    }
}

/// Configuration for the plot scene layout.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for the y-axis (0.1 = 10% margin on each side).
    pub y_axis_padding_factor: f64,
    /// Number of grid cells along each axis.
    pub grid_divisions: usize,
    /// Plotted points per terminal column (braille cells are two dots wide).
    pub points_per_column: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            grid_divisions: 4,
            points_per_column: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.x_range.bounds(), [-10.0, 10.0]);
        assert_eq!(config.num_points, DEFAULT_INTERACTIVE_POINTS);
    }

    #[test]
    fn test_point_count_validation() {
        let range = ViewRange::default();
        assert!(matches!(
            PlotConfig::new(range, 1),
            Err(XcurveError::InvalidPointCount(1))
        ));
        assert_eq!(
            PlotConfig::new(range, DEFAULT_DUMP_POINTS).unwrap().num_points,
            400
        );
    }
}
