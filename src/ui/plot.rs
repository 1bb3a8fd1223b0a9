//! Chart rendering for the current scene.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph, Wrap},
    Frame,
};

use super::formatters::{format_axis_label, truncate_to_width};
use super::ThemeColors;
use crate::renderer::{Renderer, Scene};

/// Draw the plot, or an explanation when there is no curve.
pub fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    renderer: &Renderer,
    points_per_column: usize,
    colors: &ThemeColors,
) {
    match renderer.scene() {
        Some(scene) => draw_scene(f, area, scene, points_per_column, colors),
        None => draw_no_curve(f, area, renderer, colors),
    }
}

fn draw_scene(
    f: &mut Frame<'_>,
    area: Rect,
    scene: &Scene,
    points_per_column: usize,
    colors: &ThemeColors,
) {
    let max_points = (area.width as usize)
        .saturating_sub(8)
        .max(1)
        .saturating_mul(points_per_column.max(1));
    let thinned: Vec<Vec<(f64, f64)>> = scene
        .segments
        .iter()
        .map(|segment| thin(segment, max_points))
        .collect();

    let mut datasets = Vec::new();
    for line in &scene.grid {
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.grid))
                .data(line),
        );
    }
    for line in &scene.zero_lines {
        datasets.push(
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.axis))
                .data(line),
        );
    }
    // Only the first segment carries the name, so the legend has one entry.
    for (i, segment) in thinned.iter().enumerate() {
        let dataset = Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.curve))
            .data(segment);
        datasets.push(if i == 0 {
            dataset.name(scene.legend.clone())
        } else {
            dataset
        });
    }

    let x_axis = Axis::default()
        .title(scene.x_label)
        .style(Style::default().fg(colors.text))
        .bounds(scene.x_bounds)
        .labels(axis_labels(&scene.x_ticks));

    let y_axis = Axis::default()
        .title(scene.y_label)
        .style(Style::default().fg(colors.text))
        .bounds(scene.y_bounds)
        .labels(axis_labels(&scene.y_ticks));

    let mut title = format!(" {} ", scene.title);
    if scene.non_finite > 0 {
        title.push_str(&format!("({} undefined) ", scene.non_finite));
    }
    let title = truncate_to_width(&title, (area.width as usize).saturating_sub(2));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(title)
                .title_style(
                    Style::default()
                        .fg(colors.heading)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .style(Style::default().bg(colors.bg))
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 4)))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn draw_no_curve(f: &mut Frame<'_>, area: Rect, renderer: &Renderer, colors: &ThemeColors) {
    let message = renderer.diagnostic().unwrap_or("nothing to draw");
    let lines = vec![
        Line::from(Span::styled(
            "No curve",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            renderer.expression().to_string(),
            Style::default().fg(colors.text),
        )),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(colors.error),
        )),
        Line::from(""),
        Line::from("Press q to quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        )
        .style(Style::default().fg(colors.text).bg(colors.bg))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn axis_labels(ticks: &[f64]) -> Vec<String> {
    ticks.iter().map(|&t| format_axis_label(t)).collect()
}

/// Keep at most about `max_points` of `segment`, always including both ends.
fn thin(segment: &[(f64, f64)], max_points: usize) -> Vec<(f64, f64)> {
    if segment.len() <= max_points || max_points < 2 {
        return segment.to_vec();
    }
    let step = segment.len().div_ceil(max_points);
    let mut out: Vec<(f64, f64)> = segment.iter().step_by(step).copied().collect();
    if let (Some(&last), Some(&kept)) = (segment.last(), out.last()) {
        if kept != last {
            out.push(last);
        }
    }
    out
}
