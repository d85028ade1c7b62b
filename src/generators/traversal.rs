//! Tree traversals wrapped as timelines
//!
//! The full visiting order is computed up front by [`Bst::traverse`]; the
//! timeline then reveals one more value per step. Step `i` (1-based after the
//! initial snapshot) highlights position `i - 1` of the visited sequence.

use crate::generators::Algorithm;
use crate::snapshot::{Metrics, Snapshot, StepKind, StepState, Timeline, TimelineInput, TraversalState};
use crate::structures::bst::{Bst, TraversalOrder};

pub fn traversal(tree: &Bst, order: TraversalOrder) -> Timeline {
    let sequence = tree.traverse(order);
    let total = sequence.len();

    let state_at = |revealed: usize| {
        StepState::Traversal(TraversalState {
            order,
            visited: sequence[..revealed].to_vec(),
        })
    };
    let metrics_at = |revealed: usize| Metrics::Traversal {
        visited: revealed,
        remaining: total - revealed,
    };

    let initial = Snapshot::new(
        StepKind::Start,
        state_at(0),
        vec![],
        metrics_at(0),
        format!("Starting {} traversal of {} node(s)", order, total),
    );
    let mut timeline = Timeline::new(
        Algorithm::Traversal(order),
        TimelineInput::Tree(tree.clone()),
        initial,
    );

    for (position, value) in sequence.iter().enumerate() {
        timeline.push(Snapshot::new(
            StepKind::Visit,
            state_at(position + 1),
            vec![position],
            metrics_at(position + 1),
            format!("Visited {}", value),
        ));
    }

    let joined = sequence
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    timeline.push(Snapshot::new(
        StepKind::Complete,
        state_at(total),
        vec![],
        metrics_at(total),
        format!("{} Traversal: [{}]", order, joined),
    ));
    timeline
}
