//! User interface rendering.

mod formatters;
mod keymap_bar;
mod plot;
mod status_bar;
mod theme;

use crate::app::App;
use crate::config::PlotLayoutConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App, layout: &PlotLayoutConfig) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Plot
            Constraint::Length(1), // Status
            Constraint::Length(1), // Keymap
        ])
        .split(f.area());

    plot::draw_plot(f, chunks[0], &app.renderer, layout.points_per_column, &colors);
    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}
