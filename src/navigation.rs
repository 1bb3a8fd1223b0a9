//! Zoom and pan over the x-axis.
//!
//! Navigation turns a key press into a new [`ViewRange`]. It never touches the
//! renderer; the caller dispatches the resulting interval as a view change.

use crate::config::PlotConfig;
use crate::sampling::ViewRange;

/// Narrowest interval zooming will produce.
const MIN_WIDTH: f64 = 1e-9;

/// Widest interval zooming will produce.
const MAX_WIDTH: f64 = 1e12;

/// A single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Shrink the interval about its centre.
    ZoomIn,
    /// Grow the interval about its centre.
    ZoomOut,
    /// Move the interval towards negative x.
    PanLeft,
    /// Move the interval towards positive x.
    PanRight,
    /// Return to the configured range.
    Reset,
}

impl Navigation {
    /// Interval after applying this step to `range`.
    ///
    /// Returns `None` when the step would leave the usable range, in which
    /// case the view should stay where it is.
    pub fn apply(self, range: ViewRange, config: &PlotConfig) -> Option<ViewRange> {
        let next = match self {
            Navigation::ZoomIn => zoom(range, config.zoom_factor),
            Navigation::ZoomOut => zoom(range, 1.0 / config.zoom_factor),
            Navigation::PanLeft => pan(range, -config.pan_fraction),
            Navigation::PanRight => pan(range, config.pan_fraction),
            Navigation::Reset => return Some(config.x_range),
        }?;

        (MIN_WIDTH..=MAX_WIDTH)
            .contains(&next.width())
            .then_some(next)
    }

    /// Short description for the status bar.
    pub fn name(self) -> &'static str {
        match self {
            Navigation::ZoomIn => "Zoom in",
            Navigation::ZoomOut => "Zoom out",
            Navigation::PanLeft => "Pan left",
            Navigation::PanRight => "Pan right",
            Navigation::Reset => "Reset view",
        }
    }
}

fn zoom(range: ViewRange, factor: f64) -> Option<ViewRange> {
    let half = range.width() * factor / 2.0;
    let center = range.center();
    ViewRange::new(center - half, center + half).ok()
}

fn pan(range: ViewRange, fraction: f64) -> Option<ViewRange> {
    let shift = range.width() * fraction;
    ViewRange::new(range.low() + shift, range.high() + shift).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(low: f64, high: f64) -> ViewRange {
        ViewRange::new(low, high).unwrap()
    }

    #[test]
    fn test_zoom_keeps_center() {
        let config = PlotConfig::default();
        let zoomed = Navigation::ZoomIn.apply(range(-10.0, 10.0), &config).unwrap();
        assert_eq!(zoomed, range(-8.0, 8.0));

        let restored = Navigation::ZoomOut.apply(zoomed, &config).unwrap();
        assert!((restored.low() + 10.0).abs() < 1e-12);
        assert!((restored.high() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_pan_moves_by_fraction_of_width() {
        let config = PlotConfig::default();
        let start = range(0.0, 10.0);
        assert_eq!(Navigation::PanRight.apply(start, &config), Some(range(1.0, 11.0)));
        assert_eq!(Navigation::PanLeft.apply(start, &config), Some(range(-1.0, 9.0)));
    }

    #[test]
    fn test_reset_returns_configured_range() {
        let config = PlotConfig::new(range(-3.0, 3.0), 100).unwrap();
        assert_eq!(
            Navigation::Reset.apply(range(40.0, 41.0), &config),
            Some(range(-3.0, 3.0))
        );
    }

    #[test]
    fn test_zoom_limits() {
        let config = PlotConfig::default();
        assert_eq!(Navigation::ZoomIn.apply(range(0.0, 1e-9), &config), None);
        assert_eq!(Navigation::ZoomOut.apply(range(-1e12, 1e12), &config), None);
    }
}
