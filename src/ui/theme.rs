//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Curve color.
    pub curve: Color,
    /// Zero reference line color.
    pub axis: Color,
    /// Grid line color.
    pub grid: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap hint color.
    pub hint: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                curve: Color::Rgb(142, 192, 124),
                axis: Color::Rgb(168, 153, 132),
                grid: Color::Rgb(80, 73, 69),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                hint: Color::Rgb(184, 187, 38),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                curve: Color::Rgb(7, 102, 120),
                axis: Color::Rgb(124, 111, 100),
                grid: Color::Rgb(213, 196, 161),
                border: Color::Rgb(189, 174, 147),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                hint: Color::Rgb(121, 116, 14),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }
}
