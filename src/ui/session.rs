//! What the TUI is currently visualizing and how to regenerate it
//!
//! A session owns the random generator and the per-family parameters, and
//! turns user requests (new input, other algorithm, other traversal order,
//! tree edits) into freshly generated timelines for the player.

use crate::config::{edge_probability, Command, DEFAULT_TREE_VALUES};
use crate::generators::errors::EngineError;
use crate::generators::{
    generate_mst_timeline, generate_sort_timeline, generate_traversal_timeline, MstAlgorithm,
    SortAlgorithm,
};
use crate::random::{random_array, random_graph, rng_from_seed, GraphParams, ARRAY_MAX, ARRAY_MIN};
use crate::snapshot::{Timeline, TimelineInput};
use crate::structures::bst::{Bst, TraversalOrder};
use crate::ui::panes::KeyHints;
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Debug, Clone)]
enum Family {
    Sort {
        algorithm: SortAlgorithm,
        len: usize,
    },
    Mst {
        algorithm: MstAlgorithm,
        node_count: usize,
        start: Option<usize>,
    },
    Tree {
        tree: Bst,
        order: TraversalOrder,
        log: Vec<String>,
    },
}

pub struct Session {
    family: Family,
    rng: StdRng,
}

impl Session {
    /// Build the session described by `command` and its first timeline
    pub fn from_command(command: &Command, seed: Option<u64>) -> Result<(Self, Timeline), EngineError> {
        let mut rng = rng_from_seed(seed);
        match command {
            Command::Sort {
                algorithm,
                len,
                values,
            } => {
                let input = if values.is_empty() {
                    random_array(&mut rng, *len)
                } else {
                    values.clone()
                };
                let timeline = generate_sort_timeline(*algorithm, &input);
                let family = Family::Sort {
                    algorithm: *algorithm,
                    len: input.len(),
                };
                Ok((Session { family, rng }, timeline))
            }
            Command::Mst {
                algorithm,
                nodes,
                start,
            } => {
                let mut session = Session {
                    family: Family::Mst {
                        algorithm: *algorithm,
                        node_count: *nodes,
                        start: *start,
                    },
                    rng,
                };
                let timeline = session.new_input()?;
                Ok((session, timeline))
            }
            Command::Tree {
                values,
                remove,
                order,
            } => {
                let values: &[i32] = if values.is_empty() {
                    &DEFAULT_TREE_VALUES
                } else {
                    values
                };
                let mut tree = Bst::new();
                let mut log = Vec::new();
                for &value in values {
                    log.push(insert_logged(&mut tree, value));
                }
                for &value in remove {
                    log.push(remove_logged(&mut tree, value));
                }
                let timeline = traverse(&tree, *order, &mut log);
                let family = Family::Tree {
                    tree,
                    order: *order,
                    log,
                };
                Ok((Session { family, rng }, timeline))
            }
        }
    }

    /// Fresh random input for the current family.
    ///
    /// For the tree this inserts one random value rather than replacing the tree.
    pub fn new_input(&mut self) -> Result<Timeline, EngineError> {
        match &mut self.family {
            Family::Sort { algorithm, len } => {
                let input = random_array(&mut self.rng, *len);
                Ok(generate_sort_timeline(*algorithm, &input))
            }
            Family::Mst {
                algorithm,
                node_count,
                start,
            } => {
                let params = GraphParams {
                    node_count: *node_count,
                    ..GraphParams::with_probability(edge_probability(*algorithm))
                };
                let graph = random_graph(&mut self.rng, params);
                generate_mst_timeline(*algorithm, graph.node_count, &graph.edges, *start)
            }
            Family::Tree { tree, order, log } => {
                let value = self.rng.gen_range(ARRAY_MIN..=ARRAY_MAX);
                log.push(insert_logged(tree, value));
                Ok(traverse(tree, *order, log))
            }
        }
    }

    /// Re-run the same input with the other algorithm of the family.
    ///
    /// Returns `None` for the tree, which has orders instead of algorithms.
    pub fn switch_algorithm(&mut self, current: &Timeline) -> Result<Option<Timeline>, EngineError> {
        match (&mut self.family, current.input()) {
            (Family::Sort { algorithm, .. }, TimelineInput::Array(input)) => {
                *algorithm = algorithm.other();
                Ok(Some(generate_sort_timeline(*algorithm, input)))
            }
            (Family::Mst {
                algorithm, start, ..
            }, TimelineInput::Graph(graph)) => {
                *algorithm = algorithm.other();
                generate_mst_timeline(*algorithm, graph.node_count, &graph.edges, *start).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Move to the next traversal order (tree only)
    pub fn cycle_order(&mut self) -> Option<Timeline> {
        match &mut self.family {
            Family::Tree { tree, order, log } => {
                *order = order.next();
                Some(traverse(tree, *order, log))
            }
            _ => None,
        }
    }

    /// Remove the root value, exercising the two-child removal path (tree only)
    pub fn delete_root(&mut self) -> Option<Timeline> {
        match &mut self.family {
            Family::Tree { tree, order, log } => {
                match tree.root().map(|root| root.value) {
                    Some(value) => log.push(remove_logged(tree, value)),
                    None => log.push("Tree is empty".to_string()),
                }
                Some(traverse(tree, *order, log))
            }
            _ => None,
        }
    }

    /// Operation log of the tree session; empty for the other families
    pub fn operation_log(&self) -> &[String] {
        match &self.family {
            Family::Tree { log, .. } => log,
            _ => &[],
        }
    }

    pub fn key_hints(&self) -> KeyHints {
        match self.family {
            Family::Tree { .. } => KeyHints::Tree,
            _ => KeyHints::Algorithm,
        }
    }
}

/// Traversal timeline of `tree`, logging the visiting order
fn traverse(tree: &Bst, order: TraversalOrder, log: &mut Vec<String>) -> Timeline {
    let timeline = generate_traversal_timeline(tree, order);
    let visited = tree
        .traverse(order)
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    log.push(format!("{} Traversal: [{}]", order, visited));
    timeline
}

fn insert_logged(tree: &mut Bst, value: i32) -> String {
    if tree.insert(value) {
        format!("Added node: {}", value)
    } else {
        format!("Node {} already present", value)
    }
}

fn remove_logged(tree: &mut Bst, value: i32) -> String {
    if tree.remove(value) {
        format!("Removed node: {}", value)
    } else {
        format!("Node {} not found", value)
    }
}
