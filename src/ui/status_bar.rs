//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, status: &str, colors: &ThemeColors) {
    let fg = if status.starts_with("Error") {
        colors.error
    } else {
        colors.status_fg
    };
    let paragraph = Paragraph::new(status.to_string()).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
