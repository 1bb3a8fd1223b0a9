//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::{PlotConfig, PlotLayoutConfig};
use crate::navigation::Navigation;
use crate::renderer::{Renderer, ViewListener};
use crate::sampling::ViewRange;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The plot and its view state.
    pub renderer: Renderer,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Set when the user asked to quit.
    pub should_quit: bool,
    config: PlotConfig,
    /// View change folded from input that has not been dispatched yet.
    pending_view: Option<ViewRange>,
}

impl App {
    /// Create the application and draw the initial curve.
    pub fn new(expression: impl Into<String>, config: PlotConfig, layout: PlotLayoutConfig) -> Self {
        let renderer = Renderer::new(expression, &config, layout);
        let status = match renderer.diagnostic() {
            Some(diagnostic) => format!("Error: {}", diagnostic),
            None => view_status(&renderer),
        };

        Self {
            renderer,
            status,
            theme: Theme::GruvboxDark,
            should_quit: false,
            config,
            pending_view: None,
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match (key.modifiers, key.code) {
            (_, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
            },

            // Zoom
            (_, KeyCode::Char('+'))
            | (_, KeyCode::Char('='))
            | (KeyModifiers::NONE, KeyCode::Char('i'))
            | (KeyModifiers::NONE, KeyCode::Up)
            | (KeyModifiers::NONE, KeyCode::Char('k')) => self.navigate(Navigation::ZoomIn),
            (_, KeyCode::Char('-'))
            | (_, KeyCode::Char('_'))
            | (KeyModifiers::NONE, KeyCode::Char('o'))
            | (KeyModifiers::NONE, KeyCode::Down)
            | (KeyModifiers::NONE, KeyCode::Char('j')) => self.navigate(Navigation::ZoomOut),

            // Pan
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                self.navigate(Navigation::PanLeft)
            },
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                self.navigate(Navigation::PanRight)
            },

            // Reset
            (KeyModifiers::NONE, KeyCode::Char('r')) | (KeyModifiers::NONE, KeyCode::Char('0')) => {
                self.navigate(Navigation::Reset)
            },

            (KeyModifiers::SHIFT, KeyCode::Char('T')) | (KeyModifiers::NONE, KeyCode::Char('T')) => {
                self.cycle_theme();
            },

            _ => {},
        }
    }

    /// Fold a navigation step into the pending view change.
    ///
    /// Steps build on the latest pending interval, so a burst of input
    /// collapses into a single recompute when [`App::flush_view_change`] runs.
    pub fn navigate(&mut self, nav: Navigation) {
        let current = self.pending_view.unwrap_or_else(|| self.renderer.view());
        match nav.apply(current, &self.config) {
            Some(next) => self.pending_view = Some(next),
            None => self.status = format!("{}: limit reached", nav.name()),
        }
    }

    /// Dispatch the pending view change, if any, to the renderer.
    ///
    /// Returns whether a change was dispatched.
    pub fn flush_view_change(&mut self) -> bool {
        let Some(range) = self.pending_view.take() else {
            return false;
        };

        let before = self.renderer.redraws();
        self.renderer.on_view_change(range);
        self.status = match self.renderer.diagnostic() {
            Some(diagnostic) if self.renderer.redraws() == before => {
                if self.renderer.scene().is_some() {
                    format!("Error: {} (keeping previous curve)", diagnostic)
                } else {
                    format!("Error: {}", diagnostic)
                }
            },
            _ => view_status(&self.renderer),
        };
        true
    }

    /// The interval the next flush will dispatch.
    pub fn pending_view(&self) -> Option<ViewRange> {
        self.pending_view
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}

fn view_status(renderer: &Renderer) -> String {
    format!(
        "x ∈ {} | {} points",
        renderer.view(),
        renderer.points()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(expression: &str) -> App {
        let config = PlotConfig::new(ViewRange::default(), 200).unwrap();
        App::new(expression, config, PlotLayoutConfig::default())
    }

    #[test]
    fn test_start_status() {
        assert_eq!(app("x").status, "x ∈ [-10, 10] | 200 points");
        assert_eq!(app("foo(x)").status, "Error: unknown name 'foo'");
    }

    #[test]
    fn test_burst_of_input_is_one_view_change() {
        let mut app = app("x**2");
        app.handle_key(key(KeyCode::Char('+')));
        app.handle_key(key(KeyCode::Char('+')));
        app.handle_key(key(KeyCode::Right));

        // nothing reaches the renderer until the flush
        assert_eq!(app.renderer.view(), ViewRange::default());
        assert_eq!(app.renderer.redraws(), 1);

        assert!(app.flush_view_change());
        assert_eq!(app.renderer.redraws(), 2);
        let view = app.renderer.view();
        assert!((view.width() - 12.8).abs() < 1e-9);
        assert!((view.center() - 1.28).abs() < 1e-9);
        assert!(app.pending_view().is_none());
        assert!(!app.flush_view_change());
    }

    #[test]
    fn test_reset() {
        let mut app = app("x");
        app.handle_key(key(KeyCode::Char('h')));
        app.flush_view_change();
        assert_ne!(app.renderer.view(), ViewRange::default());

        app.handle_key(key(KeyCode::Char('r')));
        app.flush_view_change();
        assert_eq!(app.renderer.view(), ViewRange::default());
    }

    #[test]
    fn test_failed_expression_stays_interactive() {
        let mut app = app("foo(x)");
        app.handle_key(key(KeyCode::Char('-')));
        assert!(app.flush_view_change());
        assert!(app.renderer.scene().is_none());
        assert_eq!(app.status, "Error: unknown name 'foo'");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_and_theme() {
        let mut app = app("x");
        app.handle_key(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT));
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert_eq!(app.status, "Theme: Gruvbox Light");

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_zoom_limit_reports_status() {
        let config = PlotConfig::new(ViewRange::new(0.0, 1.1e-9).unwrap(), 10).unwrap();
        let mut app = App::new("x", config, PlotLayoutConfig::default());
        app.handle_key(key(KeyCode::Char('+')));
        assert_eq!(app.status, "Zoom in: limit reached");
        assert!(!app.flush_view_change());
    }
}
