//! Retained drawing of one evaluated curve.

use ndarray::Array1;

use crate::config::PlotLayoutConfig;
use crate::sampling::ViewRange;

/// Samples and values from one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Interval the samples span.
    pub range: ViewRange,
    /// Sample positions.
    pub xs: Array1<f64>,
    /// Values at each sample; may hold NaN or infinities.
    pub ys: Array1<f64>,
}

/// Everything needed to draw one frame of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Chart title (the expression).
    pub title: String,
    /// Legend entry for the curve (the expression).
    pub legend: String,
    /// Horizontal axis label.
    pub x_label: &'static str,
    /// Vertical axis label.
    pub y_label: &'static str,
    /// Visible x bounds.
    pub x_bounds: [f64; 2],
    /// Visible y bounds.
    pub y_bounds: [f64; 2],
    /// Runs of consecutive finite points. Non-finite samples split the curve.
    pub segments: Vec<Vec<(f64, f64)>>,
    /// The x = 0 and y = 0 reference lines that fall inside the bounds.
    pub zero_lines: Vec<Vec<(f64, f64)>>,
    /// Interior grid lines.
    pub grid: Vec<Vec<(f64, f64)>>,
    /// Tick positions along x, bounds included.
    pub x_ticks: Vec<f64>,
    /// Tick positions along y, bounds included.
    pub y_ticks: Vec<f64>,
    /// Number of samples evaluated.
    pub points: usize,
    /// Number of samples that evaluated to NaN or an infinity.
    pub non_finite: usize,
}

impl Scene {
    /// Lay out `curve` for drawing.
    pub fn build(expression: &str, curve: &Curve, layout: &PlotLayoutConfig) -> Self {
        let segments = split_segments(&curve.xs, &curve.ys);
        let finite: usize = segments.iter().map(Vec::len).sum();

        let x_bounds = curve.range.bounds();
        let y_bounds = y_bounds(&segments, layout.y_axis_padding_factor);
        let x_ticks = ticks(x_bounds, layout.grid_divisions);
        let y_ticks = ticks(y_bounds, layout.grid_divisions);

        let mut grid = Vec::new();
        for &x in interior(&x_ticks).iter().filter(|x| x.is_finite()) {
            grid.push(vec![(x, y_bounds[0]), (x, y_bounds[1])]);
        }
        for &y in interior(&y_ticks).iter().filter(|y| y.is_finite()) {
            grid.push(vec![(x_bounds[0], y), (x_bounds[1], y)]);
        }

        let mut zero_lines = Vec::new();
        if y_bounds[0] <= 0.0 && 0.0 <= y_bounds[1] {
            zero_lines.push(vec![(x_bounds[0], 0.0), (x_bounds[1], 0.0)]);
        }
        if curve.range.contains(0.0) {
            zero_lines.push(vec![(0.0, y_bounds[0]), (0.0, y_bounds[1])]);
        }

        Self {
            title: expression.to_string(),
            legend: expression.to_string(),
            x_label: "x",
            y_label: "y",
            x_bounds,
            y_bounds,
            segments,
            zero_lines,
            grid,
            x_ticks,
            y_ticks,
            points: curve.xs.len(),
            non_finite: curve.xs.len() - finite,
        }
    }
}

fn split_segments(xs: &Array1<f64>, ys: &Array1<f64>) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        if y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn y_bounds(segments: &[Vec<(f64, f64)>], padding_factor: f64) -> [f64; 2] {
    let (min, max) = segments
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &(_, y)| {
            (min.min(y), max.max(y))
        });

    if min > max {
        // nothing finite to show
        return [-1.0, 1.0];
    }
    let span = max - min;
    let padding = if span > 0.0 {
        span * padding_factor
    } else {
        min.abs().max(1.0) * padding_factor.max(0.5)
    };
    let bounds = [min - padding, max + padding];
    if bounds[0].is_finite() && bounds[1].is_finite() {
        bounds
    } else {
        [min, max]
    }
}

fn ticks(bounds: [f64; 2], divisions: usize) -> Vec<f64> {
    let divisions = divisions.max(1);
    let n = divisions as f64;
    // Dividing first keeps the step finite even when the span is not.
    let step = bounds[1] / n - bounds[0] / n;
    (0..=divisions)
        .map(|i| match i {
            0 => bounds[0],
            i if i == divisions => bounds[1],
            i => bounds[0] + step * i as f64,
        })
        .collect()
}

fn interior(ticks: &[f64]) -> &[f64] {
    match ticks.len() {
        0..=2 => &[],
        n => &ticks[1..n - 1],
    }
}
