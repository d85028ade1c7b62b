//! TUI pane rendering modules
//!
//! Every pane is a stateless render function reading the current
//! [`Snapshot`](crate::snapshot::Snapshot); none of them derive state of
//! their own beyond layout.
//!
//! # Pane Modules
//!
//! - [`bars`]: array bars for the sorting timelines
//! - [`graph`]: node/edge canvas and edge list for the MST timelines
//! - [`tree`]: BST outline for the traversal timelines
//! - [`details`]: step kind, description and metrics
//! - [`log`]: descriptions of every step up to the cursor
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod details;
pub mod graph;
pub mod log;
pub mod status;
pub mod tree;

pub use bars::render_bars_pane;
pub use details::render_details_pane;
pub use graph::render_graph_pane;
pub use log::render_log_pane;
pub use status::{render_status_bar, KeyHints};
pub use tree::render_tree_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all panes
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
