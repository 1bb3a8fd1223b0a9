//! Viewport-reactive renderer.
//!
//! The renderer owns the visible x-interval and the current [`Scene`]. It is
//! driven through [`ViewListener`]: every view change resamples the interval at
//! the configured point count, evaluates the expression and swaps in a new
//! scene. When evaluation fails the previous scene stays on screen and the
//! diagnostic is logged once for that change.

mod scene;

pub use scene::{Curve, Scene};

use crate::config::{PlotConfig, PlotLayoutConfig};
use crate::eval::{EvalError, Evaluate, Evaluator};
use crate::sampling::{sample, ViewRange};

/// Receiver of view-range-change events.
pub trait ViewListener {
    /// The visible x-interval changed to `range`.
    fn on_view_change(&mut self, range: ViewRange);
}

/// Owns the view state and redraws the curve when it changes.
#[derive(Debug)]
pub struct Renderer<E = Evaluator> {
    evaluator: E,
    expression: String,
    points: usize,
    layout: PlotLayoutConfig,
    view: ViewRange,
    scene: Option<Scene>,
    diagnostic: Option<String>,
    redraws: usize,
}

impl Renderer<Evaluator> {
    /// Create a renderer backed by the built-in evaluator and draw the
    /// initial curve.
    pub fn new(expression: impl Into<String>, config: &PlotConfig, layout: PlotLayoutConfig) -> Self {
        Self::with_evaluator(Evaluator, expression, config, layout)
    }
}

impl<E: Evaluate> Renderer<E> {
    /// Create a renderer with a custom evaluator and draw the initial curve.
    pub fn with_evaluator(
        evaluator: E,
        expression: impl Into<String>,
        config: &PlotConfig,
        layout: PlotLayoutConfig,
    ) -> Self {
        let mut renderer = Self {
            evaluator,
            expression: expression.into(),
            points: config.num_points,
            layout,
            view: config.x_range,
            scene: None,
            diagnostic: None,
            redraws: 0,
        };
        tracing::info!(
            expression = %renderer.expression,
            view = %renderer.view,
            points = renderer.points,
            "Initial draw"
        );
        renderer.refresh();
        renderer
    }

    /// The expression being plotted.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The visible x-interval.
    pub fn view(&self) -> ViewRange {
        self.view
    }

    /// Samples per evaluation.
    pub fn points(&self) -> usize {
        self.points
    }

    /// The curve on screen, if any evaluation has succeeded.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Message from the most recent evaluation, if it failed.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Number of scenes drawn so far.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    fn refresh(&mut self) {
        match self.recompute() {
            Ok(curve) => self.redraw(curve),
            Err(err) => {
                tracing::warn!(
                    expression = %self.expression,
                    view = %self.view,
                    "Evaluation failed: {}",
                    err
                );
                self.diagnostic = Some(err.to_string());
            },
        }
    }

    fn recompute(&self) -> Result<Curve, EvalError> {
        tracing::debug!(view = %self.view, points = self.points, "Recompute");
        let xs = sample(self.view, self.points);
        let ys = self.evaluator.evaluate(&self.expression, xs.view())?;
        if ys.len() != xs.len() {
            return Err(EvalError::LengthMismatch {
                expected: xs.len(),
                found: ys.len(),
            });
        }
        Ok(Curve {
            range: self.view,
            xs,
            ys,
        })
    }

    fn redraw(&mut self, curve: Curve) {
        self.scene = Some(Scene::build(&self.expression, &curve, &self.layout));
        self.diagnostic = None;
        self.redraws += 1;
    }
}

impl<E: Evaluate> ViewListener for Renderer<E> {
    fn on_view_change(&mut self, range: ViewRange) {
        self.view = range;
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, ArrayView1};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Counts WARN events seen while installed.
    #[derive(Debug, Clone, Default)]
    struct WarnCounter(Arc<AtomicUsize>);

    impl WarnCounter {
        fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    /// Delegates to the real evaluator unless told to fail.
    #[derive(Debug, Default)]
    struct Switchable {
        fail: Rc<Cell<bool>>,
        calls: Rc<Cell<usize>>,
    }

    impl Evaluate for Switchable {
        fn evaluate(
            &self,
            expression: &str,
            samples: ArrayView1<'_, f64>,
        ) -> Result<Array1<f64>, EvalError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail.get() {
                Err(EvalError::UnknownName("boom".to_string()))
            } else {
                Evaluator.evaluate(expression, samples)
            }
        }
    }

    #[derive(Debug)]
    struct Truncating;

    impl Evaluate for Truncating {
        fn evaluate(
            &self,
            _expression: &str,
            samples: ArrayView1<'_, f64>,
        ) -> Result<Array1<f64>, EvalError> {
            Ok(samples.slice(ndarray::s![..1]).to_owned())
        }
    }

    fn config(points: usize) -> PlotConfig {
        PlotConfig::new(ViewRange::default(), points).unwrap()
    }

    #[test]
    fn test_initial_draw() {
        let renderer = Renderer::new("sin(x) + x**2", &config(400), PlotLayoutConfig::default());
        let scene = renderer.scene().unwrap();
        assert_eq!(scene.points, 400);
        assert_eq!(scene.title, "sin(x) + x**2");
        assert_eq!(scene.x_bounds, [-10.0, 10.0]);
        let (x0, y0) = scene.segments[0][0];
        assert_eq!(x0, -10.0);
        assert!((y0 - ((-10f64).sin() + 100.0)).abs() < 1e-12);
        assert_eq!(renderer.redraws(), 1);
        assert!(renderer.diagnostic().is_none());
    }

    #[test]
    fn test_initial_failure_leaves_no_curve() {
        let renderer = Renderer::new("foo(x)", &config(100), PlotLayoutConfig::default());
        assert!(renderer.scene().is_none());
        assert_eq!(renderer.redraws(), 0);
        assert!(renderer.diagnostic().unwrap().contains("foo"));
    }

    #[test]
    fn test_view_change_recomputes_and_replaces() {
        let mut renderer = Renderer::new("x**2", &config(400), PlotLayoutConfig::default());
        let before = renderer.scene().unwrap().clone();

        let narrow = ViewRange::new(-2.0, 2.0).unwrap();
        renderer.on_view_change(narrow);

        let after = renderer.scene().unwrap();
        assert_ne!(&before, after);
        assert_eq!(renderer.view(), narrow);
        assert_eq!(after.points, 400);
        assert_eq!(after.x_bounds, [-2.0, 2.0]);
        assert_eq!(after.segments[0].first(), Some(&(-2.0, 4.0)));
        assert_eq!(after.segments[0].last(), Some(&(2.0, 4.0)));
        assert_eq!(renderer.redraws(), 2);
    }

    #[test]
    fn test_failure_during_view_change_keeps_previous_curve() {
        let evaluator = Switchable::default();
        let fail = Rc::clone(&evaluator.fail);
        let calls = Rc::clone(&evaluator.calls);
        let mut renderer =
            Renderer::with_evaluator(evaluator, "x", &config(50), PlotLayoutConfig::default());
        let drawn = renderer.scene().unwrap().clone();
        assert_eq!(calls.get(), 1);

        fail.set(true);
        let narrow = ViewRange::new(-1.0, 1.0).unwrap();
        renderer.on_view_change(narrow);

        assert_eq!(calls.get(), 2);
        assert_eq!(renderer.scene(), Some(&drawn));
        assert_eq!(renderer.redraws(), 1);
        assert_eq!(renderer.view(), narrow);
        assert_eq!(renderer.diagnostic(), Some("unknown name 'boom'"));

        fail.set(false);
        renderer.on_view_change(narrow);
        assert_eq!(renderer.scene().unwrap().x_bounds, [-1.0, 1.0]);
        assert!(renderer.diagnostic().is_none());
    }

    #[test]
    fn test_diagnostic_logged_once_per_failed_change() {
        let warnings = WarnCounter::default();
        let subscriber = tracing_subscriber::registry().with(warnings.clone());

        tracing::subscriber::with_default(subscriber, || {
            let evaluator = Switchable::default();
            let fail = Rc::clone(&evaluator.fail);
            let mut renderer =
                Renderer::with_evaluator(evaluator, "x", &config(20), PlotLayoutConfig::default());
            assert_eq!(warnings.get(), 0);

            fail.set(true);
            renderer.on_view_change(ViewRange::new(-1.0, 1.0).unwrap());
            assert_eq!(warnings.get(), 1);
            renderer.on_view_change(ViewRange::new(-0.5, 0.5).unwrap());
            assert_eq!(warnings.get(), 2);

            fail.set(false);
            renderer.on_view_change(ViewRange::new(-2.0, 2.0).unwrap());
            assert_eq!(warnings.get(), 2);
            assert!(renderer.diagnostic().is_none());

            // a failing initial draw is reported once too
            let _failed = Renderer::new("foo(x)", &config(20), PlotLayoutConfig::default());
            assert_eq!(warnings.get(), 3);
        });
    }

    #[test]
    fn test_short_results_are_rejected() {
        let renderer =
            Renderer::with_evaluator(Truncating, "x", &config(10), PlotLayoutConfig::default());
        assert!(renderer.scene().is_none());
        assert_eq!(
            renderer.diagnostic(),
            Some("result has 1 values for 10 samples")
        );
    }

    #[test]
    fn test_same_point_count_across_changes() {
        let mut renderer = Renderer::new("1/x", &config(101), PlotLayoutConfig::default());
        for (low, high) in [(-1.0, 1.0), (3.0, 4.0), (-100.0, -50.0)] {
            renderer.on_view_change(ViewRange::new(low, high).unwrap());
            assert_eq!(renderer.scene().unwrap().points, 101);
        }
        assert_eq!(renderer.points(), 101);
    }
}
