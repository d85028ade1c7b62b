//! Details pane: what the current step is and why it happened

use super::border_style;
use crate::generators::Algorithm;
use crate::snapshot::{Metrics, Snapshot, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn kind_color(kind: StepKind) -> Color {
    match kind {
        StepKind::Accept | StepKind::Complete => DEFAULT_THEME.success,
        StepKind::Reject | StepKind::Incomplete => DEFAULT_THEME.error,
        StepKind::Compare | StepKind::Consider | StepKind::Select => DEFAULT_THEME.highlight,
        StepKind::Swap | StepKind::MergeWrite | StepKind::Drain => DEFAULT_THEME.secondary,
        StepKind::Candidates | StepKind::Update => DEFAULT_THEME.candidate,
        StepKind::Start | StepKind::Visit => DEFAULT_THEME.primary,
    }
}

/// Label/value rows for the precomputed metrics
fn metric_rows(metrics: &Metrics) -> Vec<(&'static str, String)> {
    match *metrics {
        Metrics::Sort {
            comparisons,
            writes,
        } => vec![
            ("Comparisons", comparisons.to_string()),
            ("Writes", writes.to_string()),
        ],
        Metrics::Mst {
            total_cost,
            component_count,
        } => vec![
            ("Total cost", total_cost.to_string()),
            ("Components", component_count.to_string()),
        ],
        Metrics::Traversal { visited, remaining } => vec![
            ("Visited", visited.to_string()),
            ("Remaining", remaining.to_string()),
        ],
    }
}

pub fn render_details_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Algorithm,
    snapshot: &Snapshot,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Current Step ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![
        Line::from(Span::styled(
            algorithm.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Step: ", label_style),
            Span::styled(
                format!(" {} ", snapshot.kind.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(kind_color(snapshot.kind))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            snapshot.description.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
    ];

    for (label, value) in metric_rows(&snapshot.metrics) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", label), label_style),
            Span::styled(value, Style::default().fg(DEFAULT_THEME.secondary)),
        ]));
    }

    if !snapshot.highlight.is_empty() {
        let highlight = snapshot
            .highlight
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", "Highlight"), label_style),
            Span::styled(highlight, Style::default().fg(DEFAULT_THEME.highlight)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
