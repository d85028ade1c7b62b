//! Binary search tree pane
//!
//! The tree is drawn top-down as an indented outline, left child first:
//!
//! ```text
//! 50
//! ├─L 30
//! │  ├─L 20
//! │  └─R 40
//! └─R 70
//! ```
//!
//! Nodes already visited by the traversal are green; the node visited at the
//! current step is yellow.

use super::border_style;
use crate::snapshot::Snapshot;
use crate::structures::bst::{Bst, Node};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Visit status used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Current,
    Visited,
    Unvisited,
}

fn mark_of(value: i32, visited: &[i32], current: Option<i32>) -> Mark {
    if current == Some(value) {
        Mark::Current
    } else if visited.contains(&value) {
        Mark::Visited
    } else {
        Mark::Unvisited
    }
}

/// Outline rows as (prefix, value) pairs in display order
fn outline(root: &Node) -> Vec<(String, i32)> {
    fn walk(node: &Node, prefix: &str, connector: &str, rows: &mut Vec<(String, i32)>) {
        rows.push((format!("{}{}", prefix, connector), node.value));

        let child_prefix = match connector {
            "" => String::new(),
            c if c.starts_with('├') => format!("{}│  ", prefix),
            _ => format!("{}   ", prefix),
        };
        let children: Vec<(&str, &Node)> = [("L", node.left.as_deref()), ("R", node.right.as_deref())]
            .into_iter()
            .filter_map(|(side, child)| child.map(|c| (side, c)))
            .collect();
        let count = children.len();
        for (i, (side, child)) in children.into_iter().enumerate() {
            let branch = if i + 1 == count { "└─" } else { "├─" };
            walk(child, &child_prefix, &format!("{}{} ", branch, side), rows);
        }
    }

    let mut rows = Vec::new();
    walk(root, "", "", &mut rows);
    rows
}

pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    tree: &Bst,
    snapshot: &Snapshot,
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let (visited, current): (&[i32], Option<i32>) = match snapshot.state.as_traversal() {
        Some(state) => {
            let current = snapshot
                .highlight
                .first()
                .and_then(|&position| state.visited.get(position).copied());
            (state.visited.as_slice(), current)
        }
        None => (&[][..], None),
    };

    let mut lines: Vec<Line> = Vec::new();
    match tree.root() {
        None => lines.push(Line::styled(
            "(empty tree)",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Some(root) => {
            for (prefix, value) in outline(root) {
                let style = match mark_of(value, visited, current) {
                    Mark::Current => Style::default()
                        .fg(DEFAULT_THEME.highlight)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                    Mark::Visited => Style::default().fg(DEFAULT_THEME.success),
                    Mark::Unvisited => Style::default().fg(DEFAULT_THEME.fg),
                };
                lines.push(Line::from(vec![
                    Span::styled(prefix, Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(value.to_string(), style),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Nodes: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(tree.len().to_string(), Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled("   Height: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            tree.height().to_string(),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
    ]));

    let sequence = visited
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(Line::from(vec![
        Span::styled("Visited: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("[{}]", sequence),
            Style::default().fg(DEFAULT_THEME.success),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_orders_left_before_right() {
        let tree = Bst::from_values(&[50, 30, 70, 20]);
        let rows = outline(tree.root().unwrap());
        let values: Vec<i32> = rows.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![50, 30, 20, 70]);
        assert_eq!(rows[0].0, "");
        assert_eq!(rows[1].0, "├─L ");
        assert_eq!(rows[2].0, "│  └─L ");
        assert_eq!(rows[3].0, "└─R ");
    }

    #[test]
    fn test_current_mark_wins_over_visited() {
        assert_eq!(mark_of(5, &[3, 5], Some(5)), Mark::Current);
        assert_eq!(mark_of(3, &[3, 5], Some(5)), Mark::Visited);
        assert_eq!(mark_of(9, &[3, 5], Some(5)), Mark::Unvisited);
    }
}
