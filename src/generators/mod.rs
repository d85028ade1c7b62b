//! Step generators
//!
//! Each generator runs its algorithm to completion on a private working copy
//! of the input and records a [`Snapshot`](crate::snapshot::Snapshot) at every
//! observable micro-step:
//!
//! - [`sort`]: insertion sort and merge sort over an `i32` array
//! - [`mst`]: Kruskal and Prim over an undirected weighted graph
//! - [`traversal`]: in/pre/post/level-order walks of a [`Bst`]
//!
//! # Execution Model
//!
//! Generation is eager and synchronous. The returned [`Timeline`] is complete
//! before playback starts, so stepping backward is an index decrement and
//! never requires recomputation.

pub mod errors;
pub mod mst;
pub mod sort;
pub mod traversal;

use crate::snapshot::Timeline;
use crate::structures::bst::{Bst, TraversalOrder};
use crate::structures::graph::{Edge, Graph};
use errors::EngineError;
use std::fmt;

/// Comparison sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SortAlgorithm {
    Insertion,
    Merge,
}

/// Minimum-spanning-tree builders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum MstAlgorithm {
    Prim,
    Kruskal,
}

/// Algorithm that produced a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sort(SortAlgorithm),
    Mst(MstAlgorithm),
    Traversal(TraversalOrder),
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Sort(SortAlgorithm::Insertion) => f.write_str("Insertion Sort"),
            Algorithm::Sort(SortAlgorithm::Merge) => f.write_str("Merge Sort"),
            Algorithm::Mst(MstAlgorithm::Prim) => f.write_str("Prim's Algorithm"),
            Algorithm::Mst(MstAlgorithm::Kruskal) => f.write_str("Kruskal's Algorithm"),
            Algorithm::Traversal(order) => write!(f, "{} Traversal", order),
        }
    }
}

impl SortAlgorithm {
    pub fn other(self) -> Self {
        match self {
            SortAlgorithm::Insertion => SortAlgorithm::Merge,
            SortAlgorithm::Merge => SortAlgorithm::Insertion,
        }
    }
}

impl MstAlgorithm {
    pub fn other(self) -> Self {
        match self {
            MstAlgorithm::Prim => MstAlgorithm::Kruskal,
            MstAlgorithm::Kruskal => MstAlgorithm::Prim,
        }
    }
}

/// Record a sort of `input` step by step
pub fn generate_sort_timeline(algorithm: SortAlgorithm, input: &[i32]) -> Timeline {
    let timeline = match algorithm {
        SortAlgorithm::Insertion => sort::insertion_sort(input),
        SortAlgorithm::Merge => sort::merge_sort(input),
    };
    tracing::debug!(
        algorithm = ?algorithm,
        len = input.len(),
        steps = timeline.len(),
        "generated sort timeline"
    );
    timeline
}

/// Record an MST construction over `node_count` nodes and `edges`.
///
/// `start_node` only affects Prim and defaults to node 0.
pub fn generate_mst_timeline(
    algorithm: MstAlgorithm,
    node_count: usize,
    edges: &[Edge],
    start_node: Option<usize>,
) -> Result<Timeline, EngineError> {
    let graph = Graph::new(node_count, edges.to_vec())?;
    let timeline = match algorithm {
        MstAlgorithm::Kruskal => mst::kruskal(&graph),
        MstAlgorithm::Prim => {
            let start = start_node.unwrap_or(0);
            if node_count > 0 && start >= node_count {
                return Err(EngineError::InvalidNode {
                    node: start,
                    node_count,
                });
            }
            mst::prim(&graph, start)
        }
    };
    tracing::debug!(
        algorithm = ?algorithm,
        nodes = node_count,
        edges = edges.len(),
        steps = timeline.len(),
        "generated MST timeline"
    );
    Ok(timeline)
}

/// Wrap a traversal of `tree` as a one-value-per-step timeline
pub fn generate_traversal_timeline(tree: &Bst, order: TraversalOrder) -> Timeline {
    let timeline = traversal::traversal(tree, order);
    tracing::debug!(
        order = %order,
        nodes = tree.len(),
        steps = timeline.len(),
        "generated traversal timeline"
    );
    timeline
}
