//! Value formatting helpers.

use unicode_width::UnicodeWidthChar;

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // leave one column for the ellipsis
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
