//! Step log pane rendering

use super::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the log pane. The last line is emphasized as the most recent entry.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no entries)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let last = lines.len() - 1;
    let all_items: Vec<ListItem> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == last {
                Style::default()
                    .fg(DEFAULT_THEME.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
