//! Bar chart pane for the sorting timelines
//!
//! One bar per array slot. Highlighted indices (the comparison pair, the
//! element being inserted, the slot being written) are drawn in the
//! highlight color; once the terminal snapshot is reached every bar turns
//! green.

use super::border_style;
use crate::snapshot::{Snapshot, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Baseline so that zero and negative values still get a visible bar
fn baseline(values: &[i32]) -> i64 {
    match values.iter().min() {
        Some(&min) if min <= 0 => i64::from(min) - 1,
        _ => 0,
    }
}

fn bar_height(value: i32, floor: i64) -> u64 {
    (i64::from(value) - floor).max(0) as u64
}

/// Render the array of the current snapshot as vertical bars
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    snapshot: &Snapshot,
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let values = snapshot.state.as_array().unwrap_or(&[]);
    if values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let done = snapshot.kind == StepKind::Complete;
    let floor = baseline(values);

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = if snapshot.highlight.contains(&index) {
                DEFAULT_THEME.highlight
            } else if done {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.primary
            };
            Bar::default()
                .value(bar_height(value, floor))
                .text_value(value.to_string())
                .label(Line::from(index.to_string()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    // Fit every bar into the inner width with a one-column gap
    let inner_width = area.width.saturating_sub(2) as usize;
    let slot = (inner_width / values.len()).max(1);
    let bar_width = slot.saturating_sub(1).max(1) as u16;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_values_use_zero_baseline() {
        assert_eq!(baseline(&[10, 99, 42]), 0);
        assert_eq!(bar_height(42, 0), 42);
    }

    #[test]
    fn test_negative_values_stay_visible() {
        let floor = baseline(&[-3, 4, 0]);
        assert_eq!(floor, -4);
        assert_eq!(bar_height(-3, floor), 1);
        assert_eq!(bar_height(0, floor), 4);
    }
}
