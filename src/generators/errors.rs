//! Error types for timeline generation
//!
//! The engine has very few failure modes: graph input that names a node the
//! graph does not have, and asking an empty tree for its minimum through the
//! checked accessor. Disconnected graphs are not errors; they produce a
//! partial forest.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Edge endpoint or start node outside `0..node_count`
    #[error("Invalid node {node}: graph has {node_count} node(s)")]
    InvalidNode { node: usize, node_count: usize },

    /// Edge whose endpoints are the same node
    #[error("Self-loop on node {node} is not allowed")]
    SelfLoop { node: usize },

    /// Minimum requested from an empty tree
    #[error("Tree is empty")]
    EmptyTree,
}
