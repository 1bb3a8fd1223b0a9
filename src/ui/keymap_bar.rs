//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let keymap_text = "q:quit | +/k:zoom in | -/j:zoom out | h/l:pan | r:reset | T:theme";

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.hint).bg(colors.bg));

    f.render_widget(paragraph, area);
}
