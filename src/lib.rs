//! Xcurve - a terminal plotter for functions of one variable.
//!
//! Xcurve reads an expression in `x`, evaluates it over the visible x-range and
//! draws the curve in the terminal. Zooming or panning changes the range, and
//! the curve is resampled and redrawn for the new interval.
//!
//! # Features
//!
//! - A closed expression language: only the built-in constants and
//!   elementwise functions are reachable
//! - Evaluation failures are values, never crashes
//! - Resampling on every zoom and pan
//! - Gaps where the function is undefined
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use xcurve::config::{PlotConfig, PlotLayoutConfig};
//! use xcurve::renderer::{Renderer, ViewListener};
//! use xcurve::sampling::ViewRange;
//!
//! let config = PlotConfig::new(ViewRange::default(), 400)?;
//! let mut renderer = Renderer::new("sin(x) + x**2", &config, PlotLayoutConfig::default());
//! assert_eq!(renderer.scene().map(|s| s.points), Some(400));
//!
//! renderer.on_view_change(ViewRange::new(-2.0, 2.0)?);
//! assert_eq!(renderer.scene().map(|s| s.x_bounds), Some([-2.0, 2.0]));
//! # Ok::<(), xcurve::XcurveError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod dump;
pub mod error;
pub mod eval;
pub mod input;
pub mod navigation;
pub mod renderer;
pub mod sampling;
pub mod ui;

pub use error::{Result, XcurveError};
