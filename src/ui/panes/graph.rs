//! Graph pane for the MST timelines
//!
//! Left: nodes laid out on a circle with every input edge drawn and colored
//! by its status at the current step. Right: the edge list with weights and
//! statuses, followed by the component partition.

use super::border_style;
use crate::snapshot::{MstState, Snapshot};
use crate::structures::graph::{Edge, Graph};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, List, ListItem,
    },
    Frame,
};
use std::f64::consts::PI;

/// Status of an input edge at one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStatus {
    Current,
    Accepted,
    Rejected,
    Candidate,
    Pending,
}

impl EdgeStatus {
    /// Status of input `edge`. Parallel edges get their own status; only the
    /// candidate list, rebuilt from lightest weights, matches by node pair.
    pub fn of(edge: &Edge, state: &MstState) -> Self {
        if state.current.is_some_and(|current| current.matches(edge)) {
            EdgeStatus::Current
        } else if state.accepted.iter().any(|e| e.matches(edge)) {
            EdgeStatus::Accepted
        } else if state.rejected.iter().any(|e| e.matches(edge)) {
            EdgeStatus::Rejected
        } else if state.candidates.iter().any(|e| e.same_pair(edge)) {
            EdgeStatus::Candidate
        } else {
            EdgeStatus::Pending
        }
    }

    fn color(self) -> Color {
        match self {
            EdgeStatus::Current => DEFAULT_THEME.highlight,
            EdgeStatus::Accepted => DEFAULT_THEME.success,
            EdgeStatus::Rejected => DEFAULT_THEME.error,
            EdgeStatus::Candidate => DEFAULT_THEME.candidate,
            EdgeStatus::Pending => DEFAULT_THEME.comment,
        }
    }

    fn label(self) -> &'static str {
        match self {
            EdgeStatus::Current => "current",
            EdgeStatus::Accepted => "accepted",
            EdgeStatus::Rejected => "rejected",
            EdgeStatus::Candidate => "candidate",
            EdgeStatus::Pending => "pending",
        }
    }
}

/// Position of `node` on the unit circle, node 0 at the top
fn node_position(node: usize, node_count: usize) -> (f64, f64) {
    let angle = PI / 2.0 - 2.0 * PI * node as f64 / node_count.max(1) as f64;
    (angle.cos(), angle.sin())
}

fn component_index(node: usize, state: &MstState) -> usize {
    state
        .components
        .iter()
        .position(|group| group.contains(&node))
        .unwrap_or(0)
}

pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    graph: &Graph,
    snapshot: &Snapshot,
    is_focused: bool,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let empty = MstState::default();
    let state = snapshot.state.as_mst().unwrap_or(&empty);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(border_style(is_focused)),
        )
        .marker(Marker::Braille)
        .x_bounds([-1.3, 1.3])
        .y_bounds([-1.3, 1.3])
        .paint(|ctx| {
            for edge in &graph.edges {
                let (x1, y1) = node_position(edge.node1, graph.node_count);
                let (x2, y2) = node_position(edge.node2, graph.node_count);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: EdgeStatus::of(edge, state).color(),
                });
            }
            ctx.layer();
            for edge in &graph.edges {
                let (x1, y1) = node_position(edge.node1, graph.node_count);
                let (x2, y2) = node_position(edge.node2, graph.node_count);
                ctx.print(
                    (x1 + x2) / 2.0,
                    (y1 + y2) / 2.0,
                    Span::styled(
                        edge.weight.to_string(),
                        Style::default().fg(EdgeStatus::of(edge, state).color()),
                    ),
                );
            }
            for node in 0..graph.node_count {
                let (x, y) = node_position(node, graph.node_count);
                let highlighted = snapshot.highlight.contains(&node);
                let color = if highlighted {
                    DEFAULT_THEME.highlight
                } else {
                    DEFAULT_THEME.component_color(component_index(node, state))
                };
                let mut style = Style::default().fg(Color::Black).bg(color);
                if highlighted {
                    style = style.add_modifier(Modifier::BOLD);
                }
                ctx.print(x * 1.1, y * 1.1, Span::styled(format!(" {} ", node), style));
            }
        });
    frame.render_widget(canvas, columns[0]);

    render_edge_list(frame, columns[1], graph, state);
}

fn render_edge_list(frame: &mut Frame, area: Rect, graph: &Graph, state: &MstState) {
    let block = Block::default()
        .title(" Edges ")
        .borders(Borders::ALL)
        .border_style(border_style(false));

    let mut sorted: Vec<&Edge> = graph.edges.iter().collect();
    sorted.sort_by_key(|edge| edge.weight);

    let mut items: Vec<ListItem> = sorted
        .into_iter()
        .map(|edge| {
            let status = EdgeStatus::of(edge, state);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>5}", edge.to_string()),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    format!("  w={:<3}", edge.weight),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
                Span::styled(status.label(), Style::default().fg(status.color())),
            ]))
        })
        .collect();

    if items.is_empty() {
        items.push(
            ListItem::new("(no edges)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    items.push(ListItem::new(""));
    items.push(
        ListItem::new("Components").style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
    );
    for (index, group) in state.components.iter().enumerate() {
        let members = group
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        items.push(
            ListItem::new(format!("  {{{}}}", members))
                .style(Style::default().fg(DEFAULT_THEME.component_color(index))),
        );
    }

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{generate_mst_timeline, MstAlgorithm};

    #[test]
    fn test_edge_status_precedence() {
        let edge = Edge::new(1, 2, 4);
        let state = MstState {
            accepted: vec![Edge::new(2, 1, 4)],
            current: Some(edge),
            ..MstState::default()
        };
        assert_eq!(EdgeStatus::of(&edge, &state), EdgeStatus::Current);

        let state = MstState {
            current: None,
            ..state
        };
        assert_eq!(EdgeStatus::of(&edge, &state), EdgeStatus::Accepted);
    }

    #[test]
    fn test_parallel_edges_keep_their_own_status() {
        let light = Edge::new(0, 1, 2);
        let heavy = Edge::new(1, 0, 7);
        let bridge = Edge::new(1, 2, 9);
        let timeline =
            generate_mst_timeline(MstAlgorithm::Kruskal, 3, &[heavy, bridge, light], None)
                .unwrap();
        let state = timeline.last().state.as_mst().unwrap();

        assert_eq!(state.rejected, vec![heavy]);
        assert_eq!(EdgeStatus::of(&light, state), EdgeStatus::Accepted);
        assert_eq!(EdgeStatus::of(&heavy, state), EdgeStatus::Rejected);
        assert_eq!(EdgeStatus::of(&bridge, state), EdgeStatus::Accepted);
    }

    #[test]
    fn test_prim_edge_matches_reversed_input_edge() {
        let input = Edge::new(1, 0, 5);
        let timeline =
            generate_mst_timeline(MstAlgorithm::Prim, 2, &[input], Some(0)).unwrap();
        let state = timeline.last().state.as_mst().unwrap();
        assert_eq!(state.accepted, vec![Edge::new(0, 1, 5)]);
        assert_eq!(EdgeStatus::of(&input, state), EdgeStatus::Accepted);
    }

    #[test]
    fn test_node_zero_is_on_top() {
        let (x, y) = node_position(0, 6);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }
}
