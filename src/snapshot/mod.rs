// Snapshot and timeline types shared by every step generator

use crate::generators::Algorithm;
use crate::structures::bst::{Bst, TraversalOrder};
use crate::structures::graph::{Edge, Graph};

/// Semantic role of a recorded step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Pre-algorithm state
    Start,
    /// Insertion sort picks the next element to insert
    Select,
    Compare,
    Swap,
    /// Merge takes the leftover element of a half that still has items
    Drain,
    MergeWrite,
    /// Prim lists the start node's candidate edges
    Candidates,
    Consider,
    Accept,
    Reject,
    /// Prim regenerates its candidate list
    Update,
    Visit,
    Complete,
    /// Terminal step of an MST run that could not span the graph
    Incomplete,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Start => "start",
            StepKind::Select => "select",
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Drain => "drain",
            StepKind::MergeWrite => "merge-write",
            StepKind::Candidates => "candidates",
            StepKind::Consider => "consider-edge",
            StepKind::Accept => "accept-edge",
            StepKind::Reject => "reject-edge",
            StepKind::Update => "update",
            StepKind::Visit => "visit",
            StepKind::Complete => "complete",
            StepKind::Incomplete => "incomplete",
        }
    }

    /// True for the kinds that may only end a timeline
    pub fn is_terminal(self) -> bool {
        matches!(self, StepKind::Complete | StepKind::Incomplete)
    }
}

/// MST progress at one instant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MstState {
    pub accepted: Vec<Edge>,
    pub rejected: Vec<Edge>,
    /// Prim only: edges with exactly one visited endpoint, lightest first
    pub candidates: Vec<Edge>,
    pub current: Option<Edge>,
    /// Prim only: visited nodes in ascending order
    pub visited: Vec<usize>,
    /// Connected-component partition of all nodes under the accepted edges
    pub components: Vec<Vec<usize>>,
}

/// Traversal progress at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    pub order: TraversalOrder,
    /// Values revealed so far, in visiting order
    pub visited: Vec<i32>,
}

/// The full value being visualized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepState {
    Array(Vec<i32>),
    Mst(MstState),
    Traversal(TraversalState),
}

impl StepState {
    pub fn as_array(&self) -> Option<&[i32]> {
        match self {
            StepState::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_mst(&self) -> Option<&MstState> {
        match self {
            StepState::Mst(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_traversal(&self) -> Option<&TraversalState> {
        match self {
            StepState::Traversal(state) => Some(state),
            _ => None,
        }
    }
}

/// Aggregates precomputed at generation time for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metrics {
    Sort { comparisons: usize, writes: usize },
    Mst { total_cost: u32, component_count: usize },
    Traversal { visited: usize, remaining: usize },
}

/// One recorded algorithm step
///
/// Every field is an owned copy taken at the moment of recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub kind: StepKind,
    pub state: StepState,
    /// Array indices (sorts), node ids (MST) or visit positions (traversals)
    pub highlight: Vec<usize>,
    pub metrics: Metrics,
    pub description: String,
}

impl Snapshot {
    pub fn new(
        kind: StepKind,
        state: StepState,
        highlight: Vec<usize>,
        metrics: Metrics,
        description: impl Into<String>,
    ) -> Self {
        Snapshot {
            kind,
            state,
            highlight,
            metrics,
            description: description.into(),
        }
    }
}

/// Input a timeline was generated from, kept for renderers that draw
/// the static parts (all graph edges, the tree shape).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineInput {
    Array(Vec<i32>),
    Graph(Graph),
    Tree(Bst),
}

/// Ordered, fully materialized sequence of snapshots for one run
///
/// A timeline always holds at least its initial snapshot. Snapshots are only
/// ever handed out by shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    algorithm: Algorithm,
    input: TimelineInput,
    snapshots: Vec<Snapshot>,
}

impl Timeline {
    /// Start a timeline with its pre-algorithm snapshot
    pub fn new(algorithm: Algorithm, input: TimelineInput, initial: Snapshot) -> Self {
        Timeline {
            algorithm,
            input,
            snapshots: vec![initial],
        }
    }

    /// Append a snapshot
    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &TimelineInput {
        &self.input
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a timeline is created with its initial snapshot
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    pub fn last(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Index of the terminal snapshot
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
