//! Random inputs for the visualizer
//!
//! Arrays of small integers for the sorts, and small graphs for the MST
//! builders. Graph generation includes every pair `(i, j)` with some
//! probability, then repairs isolated nodes by attaching each one to a
//! random other node, so every node ends up with at least one incident edge.

use crate::structures::graph::{Edge, Graph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const ARRAY_MIN: i32 = 10;
pub const ARRAY_MAX: i32 = 99;

/// Seeded generator when `seed` is given, entropy-seeded otherwise
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `len` values drawn uniformly from `ARRAY_MIN..=ARRAY_MAX`
pub fn random_array<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(ARRAY_MIN..=ARRAY_MAX)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphParams {
    pub node_count: usize,
    /// Chance of including each node pair
    pub edge_probability: f64,
    pub max_weight: u32,
    /// Upper weight bound for edges added by the repair pass
    pub repair_max_weight: u32,
}

impl GraphParams {
    /// Six nodes with the given edge probability, weights 1..=15
    pub fn with_probability(edge_probability: f64) -> Self {
        GraphParams {
            node_count: 6,
            edge_probability,
            max_weight: 15,
            repair_max_weight: 10,
        }
    }
}

impl Default for GraphParams {
    fn default() -> Self {
        GraphParams::with_probability(0.7)
    }
}

pub fn random_graph<R: Rng + ?Sized>(rng: &mut R, params: GraphParams) -> Graph {
    let n = params.node_count;
    let mut edges = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(params.edge_probability) {
                edges.push(Edge::new(i, j, rng.gen_range(1..=params.max_weight)));
            }
        }
    }

    if n >= 2 {
        for i in 0..n {
            if edges.iter().any(|edge| edge.touches(i)) {
                continue;
            }
            // Pick uniformly among the other n - 1 nodes
            let mut target = rng.gen_range(0..n - 1);
            if target >= i {
                target += 1;
            }
            let weight = rng.gen_range(1..=params.repair_max_weight);
            edges.push(Edge::new(i.min(target), i.max(target), weight));
        }
    }

    Graph {
        node_count: n,
        edges,
    }
}
