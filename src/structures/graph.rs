//! Undirected weighted graph used by the MST generators

use crate::generators::errors::EngineError;
use std::fmt;

/// An undirected weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub node1: usize,
    pub node2: usize,
    pub weight: u32,
}

impl Edge {
    pub fn new(node1: usize, node2: usize, weight: u32) -> Self {
        Edge {
            node1,
            node2,
            weight,
        }
    }

    /// Endpoints ordered (low, high), identifying the edge regardless of direction
    pub fn key(&self) -> (usize, usize) {
        (self.node1.min(self.node2), self.node1.max(self.node2))
    }

    /// True if both edges join the same pair of nodes
    pub fn same_pair(&self, other: &Edge) -> bool {
        self.key() == other.key()
    }

    /// Same pair and same weight, in either direction.
    ///
    /// Tells parallel edges apart while still matching an edge that a
    /// builder re-created from the adjacency matrix with swapped endpoints.
    pub fn matches(&self, other: &Edge) -> bool {
        self.same_pair(other) && self.weight == other.weight
    }

    pub fn touches(&self, node: usize) -> bool {
        self.node1 == node || self.node2 == node
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.node1, self.node2)
    }
}

/// Fixed node count plus an edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    pub node_count: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph, rejecting self-loops and out-of-range endpoints
    pub fn new(node_count: usize, edges: Vec<Edge>) -> Result<Self, EngineError> {
        for edge in &edges {
            for node in [edge.node1, edge.node2] {
                if node >= node_count {
                    return Err(EngineError::InvalidNode { node, node_count });
                }
            }
            if edge.node1 == edge.node2 {
                return Err(EngineError::SelfLoop { node: edge.node1 });
            }
        }
        Ok(Graph { node_count, edges })
    }

    /// Adjacency matrix keeping the lightest weight per node pair
    pub fn adjacency(&self) -> Vec<Vec<Option<u32>>> {
        let mut matrix = vec![vec![None; self.node_count]; self.node_count];
        for edge in &self.edges {
            let slot = matrix[edge.node1][edge.node2];
            let weight = slot.map_or(edge.weight, |w: u32| w.min(edge.weight));
            matrix[edge.node1][edge.node2] = Some(weight);
            matrix[edge.node2][edge.node1] = Some(weight);
        }
        matrix
    }

    /// Number of edges incident to `node`
    pub fn degree(&self, node: usize) -> usize {
        self.edges.iter().filter(|e| e.touches(node)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_endpoint() {
        let err = Graph::new(3, vec![Edge::new(0, 3, 1)]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidNode {
                node: 3,
                node_count: 3
            }
        ));
    }

    #[test]
    fn test_adjacency_keeps_lightest_parallel_edge() {
        let graph = Graph::new(2, vec![Edge::new(0, 1, 9), Edge::new(1, 0, 4)]).unwrap();
        let matrix = graph.adjacency();
        assert_eq!(matrix[0][1], Some(4));
        assert_eq!(matrix[1][0], Some(4));
        assert_eq!(matrix[0][0], None);
    }
}
