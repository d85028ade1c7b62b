//! Command-line configuration and playback defaults

use crate::generators::{Algorithm, MstAlgorithm, SortAlgorithm};
use crate::structures::bst::TraversalOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Autoplay intervals per algorithm
pub const INSERTION_INTERVAL: Duration = Duration::from_millis(200);
pub const MERGE_INTERVAL: Duration = Duration::from_millis(300);
pub const KRUSKAL_INTERVAL: Duration = Duration::from_millis(1500);
pub const PRIM_INTERVAL: Duration = Duration::from_millis(2000);
pub const TRAVERSAL_INTERVAL: Duration = Duration::from_millis(800);

pub const DEFAULT_ARRAY_LEN: usize = 20;
pub const DEFAULT_NODE_COUNT: usize = 6;
pub const KRUSKAL_EDGE_PROBABILITY: f64 = 0.7;
pub const PRIM_EDGE_PROBABILITY: f64 = 0.75;
pub const DEFAULT_TREE_VALUES: [i32; 7] = [50, 30, 70, 20, 40, 60, 80];

/// Default autoplay interval for an algorithm family
pub fn autoplay_interval(algorithm: Algorithm) -> Duration {
    match algorithm {
        Algorithm::Sort(SortAlgorithm::Insertion) => INSERTION_INTERVAL,
        Algorithm::Sort(SortAlgorithm::Merge) => MERGE_INTERVAL,
        Algorithm::Mst(MstAlgorithm::Kruskal) => KRUSKAL_INTERVAL,
        Algorithm::Mst(MstAlgorithm::Prim) => PRIM_INTERVAL,
        Algorithm::Traversal(_) => TRAVERSAL_INTERVAL,
    }
}

/// Edge inclusion probability used when generating a graph for `algorithm`
pub fn edge_probability(algorithm: MstAlgorithm) -> f64 {
    match algorithm {
        MstAlgorithm::Kruskal => KRUSKAL_EDGE_PROBABILITY,
        MstAlgorithm::Prim => PRIM_EDGE_PROBABILITY,
    }
}

#[derive(Debug, Parser)]
#[command(name = "algotty", version)]
#[command(about = "Step through sorting, MST and tree traversal algorithms in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Seed for random inputs (same seed, same arrays and graphs)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the autoplay interval in milliseconds
    #[arg(long, global = true)]
    pub interval_ms: Option<u64>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Visualize a comparison sort
    Sort {
        #[arg(long, value_enum, default_value_t = SortAlgorithm::Insertion)]
        algorithm: SortAlgorithm,

        /// Length of the random array
        #[arg(long, default_value_t = DEFAULT_ARRAY_LEN)]
        len: usize,

        /// Explicit input instead of a random array, e.g. 5,3,8,1
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Visualize a minimum-spanning-tree construction on a random graph
    Mst {
        #[arg(long, value_enum, default_value_t = MstAlgorithm::Kruskal)]
        algorithm: MstAlgorithm,

        #[arg(long, default_value_t = DEFAULT_NODE_COUNT)]
        nodes: usize,

        /// Start node for Prim's algorithm
        #[arg(long)]
        start: Option<usize>,
    },

    /// Build a binary search tree and visualize a traversal
    Tree {
        /// Values inserted in order, e.g. 5,3,8,1,4
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i32>,

        /// Values removed after insertion
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        remove: Vec<i32>,

        #[arg(long, value_enum, default_value_t = TraversalOrder::InOrder)]
        order: TraversalOrder,
    },
}

impl Cli {
    /// Interval override from the command line, if any
    pub fn interval(&self) -> Option<Duration> {
        self.interval_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_values() {
        let cli = Cli::parse_from(["algotty", "sort", "--algorithm", "merge", "--values", "5,3,8,1"]);
        match cli.command {
            Command::Sort {
                algorithm, values, ..
            } => {
                assert_eq!(algorithm, SortAlgorithm::Merge);
                assert_eq!(values, vec![5, 3, 8, 1]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_tree_order_and_globals() {
        let cli = Cli::parse_from([
            "algotty", "tree", "--order", "levelorder", "--seed", "9", "--interval-ms", "50",
        ]);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.interval(), Some(Duration::from_millis(50)));
        assert!(matches!(
            cli.command,
            Command::Tree {
                order: TraversalOrder::LevelOrder,
                ..
            }
        ));
    }

    #[test]
    fn test_intervals_per_family() {
        assert_eq!(
            autoplay_interval(Algorithm::Sort(SortAlgorithm::Insertion)),
            Duration::from_millis(200)
        );
        assert_eq!(
            autoplay_interval(Algorithm::Mst(MstAlgorithm::Prim)),
            Duration::from_millis(2000)
        );
    }
}
