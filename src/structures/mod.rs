//! Data structures the step generators operate on
//!
//! - [`bst`]: owned binary search tree with insert/remove/min and traversals
//! - [`union_find`]: disjoint-set forest used by Kruskal's algorithm
//! - [`graph`]: undirected weighted edge list with validation
//!
//! None of these types share storage with a caller: generators clone their
//! input before working on it, so recorded snapshots can never be disturbed
//! by later mutation.

pub mod bst;
pub mod graph;
pub mod union_find;
