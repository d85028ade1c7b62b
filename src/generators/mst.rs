//! Minimum-spanning-tree builders recorded step by step
//!
//! Both builders carry an [`MstState`] that is cloned into every snapshot
//! together with the running total cost and the current component
//! partition, so the renderer never recomputes connectivity.

use crate::generators::{Algorithm, MstAlgorithm};
use crate::snapshot::{Metrics, MstState, Snapshot, StepKind, StepState, Timeline, TimelineInput};
use crate::structures::graph::{Edge, Graph};
use crate::structures::union_find::UnionFind;

fn mst_snapshot(
    kind: StepKind,
    state: &MstState,
    highlight: Vec<usize>,
    total_cost: u32,
    description: String,
) -> Snapshot {
    Snapshot::new(
        kind,
        StepState::Mst(state.clone()),
        highlight,
        Metrics::Mst {
            total_cost,
            component_count: state.components.len(),
        },
        description,
    )
}

fn endpoints(edge: &Edge) -> Vec<usize> {
    vec![edge.node1, edge.node2]
}

/// Kruskal's algorithm over the edges sorted by weight
///
/// Ties keep input order. Generation stops with a `complete` step as soon as
/// `node_count - 1` edges are accepted; a disconnected graph exhausts the
/// edge list and ends with an `incomplete` step describing the forest.
pub(crate) fn kruskal(graph: &Graph) -> Timeline {
    let n = graph.node_count;
    let target = n.saturating_sub(1);
    let mut sets = UnionFind::new(n);

    let mut sorted = graph.edges.clone();
    sorted.sort_by_key(|edge| edge.weight);

    let mut state = MstState {
        components: sets.components(),
        ..MstState::default()
    };
    let mut total_cost = 0;

    let initial = mst_snapshot(
        StepKind::Start,
        &state,
        vec![],
        0,
        "Starting Kruskal's Algorithm. Edges sorted by weight.".to_string(),
    );
    let mut timeline = Timeline::new(
        Algorithm::Mst(MstAlgorithm::Kruskal),
        TimelineInput::Graph(graph.clone()),
        initial,
    );

    if target == 0 {
        timeline.push(mst_snapshot(
            StepKind::Complete,
            &state,
            vec![],
            0,
            "MST complete! Total cost: 0".to_string(),
        ));
        return timeline;
    }

    for edge in sorted {
        state.current = Some(edge);
        timeline.push(mst_snapshot(
            StepKind::Consider,
            &state,
            endpoints(&edge),
            total_cost,
            format!("Considering edge {} with weight {}", edge, edge.weight),
        ));

        let root1 = sets.find(edge.node1);
        let root2 = sets.find(edge.node2);
        if root1 != root2 {
            sets.union(root1, root2);
            state.accepted.push(edge);
            state.components = sets.components();
            total_cost += edge.weight;
            timeline.push(mst_snapshot(
                StepKind::Accept,
                &state,
                endpoints(&edge),
                total_cost,
                format!("Accepted edge {}. No cycle formed.", edge),
            ));
        } else {
            state.rejected.push(edge);
            timeline.push(mst_snapshot(
                StepKind::Reject,
                &state,
                endpoints(&edge),
                total_cost,
                format!("Rejected edge {}. Would create a cycle.", edge),
            ));
        }

        if state.accepted.len() == target {
            state.current = None;
            timeline.push(mst_snapshot(
                StepKind::Complete,
                &state,
                vec![],
                total_cost,
                format!("MST complete! Total cost: {}", total_cost),
            ));
            return timeline;
        }
    }

    tracing::warn!(
        components = state.components.len(),
        total_cost,
        "kruskal exhausted edges without spanning the graph"
    );
    state.current = None;
    let description = format!(
        "Graph is disconnected: spanning forest with {} components, total cost {}",
        state.components.len(),
        total_cost
    );
    timeline.push(mst_snapshot(
        StepKind::Incomplete,
        &state,
        vec![],
        total_cost,
        description,
    ));
    timeline
}

/// Visited nodes form one component; every unvisited node is a singleton
fn tree_components(visited: &[bool]) -> Vec<Vec<usize>> {
    let tree: Vec<usize> = (0..visited.len()).filter(|&i| visited[i]).collect();
    let mut components: Vec<Vec<usize>> = (0..visited.len())
        .filter(|&i| !visited[i])
        .map(|i| vec![i])
        .collect();
    if !tree.is_empty() {
        components.push(tree);
    }
    components.sort_by_key(|group| group[0]);
    components
}

fn visited_nodes(visited: &[bool]) -> Vec<usize> {
    (0..visited.len()).filter(|&i| visited[i]).collect()
}

/// Prim's algorithm grown from `start`
///
/// Candidate edges are kept sorted by weight and scanned linearly for the
/// first one crossing the visited/unvisited cut. `start` must be a node of a
/// non-empty graph; [`generate_mst_timeline`](super::generate_mst_timeline)
/// checks it before calling in.
pub(crate) fn prim(graph: &Graph, start: usize) -> Timeline {
    let n = graph.node_count;
    let algorithm = Algorithm::Mst(MstAlgorithm::Prim);
    let input = TimelineInput::Graph(graph.clone());

    if n == 0 {
        let state = MstState::default();
        let initial = mst_snapshot(
            StepKind::Start,
            &state,
            vec![],
            0,
            "Graph has no nodes".to_string(),
        );
        let mut timeline = Timeline::new(algorithm, input, initial);
        timeline.push(mst_snapshot(
            StepKind::Complete,
            &state,
            vec![],
            0,
            "MST complete! Total minimum cost: 0".to_string(),
        ));
        return timeline;
    }

    let target = n - 1;
    let matrix = graph.adjacency();
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut state = MstState {
        visited: visited_nodes(&visited),
        components: tree_components(&visited),
        ..MstState::default()
    };
    let mut total_cost = 0;

    let initial = mst_snapshot(
        StepKind::Start,
        &state,
        vec![start],
        0,
        format!("Starting Prim's algorithm from node {}", start),
    );
    let mut timeline = Timeline::new(algorithm, input, initial);

    state.candidates = (0..n)
        .filter(|&i| i != start)
        .filter_map(|i| matrix[start][i].map(|w| Edge::new(start, i, w)))
        .collect();
    state.candidates.sort_by_key(|edge| edge.weight);
    timeline.push(mst_snapshot(
        StepKind::Candidates,
        &state,
        vec![start],
        0,
        format!(
            "Added candidate edges from node {}. Selecting minimum weight edge.",
            start
        ),
    ));

    while state.accepted.len() < target && !state.candidates.is_empty() {
        let Some(index) = state
            .candidates
            .iter()
            .position(|edge| visited[edge.node1] != visited[edge.node2])
        else {
            break;
        };
        let edge = state.candidates[index];

        state.current = Some(edge);
        timeline.push(mst_snapshot(
            StepKind::Consider,
            &state,
            endpoints(&edge),
            total_cost,
            format!("Considering edge {} with weight {}", edge, edge.weight),
        ));

        let new_node = if visited[edge.node1] {
            edge.node2
        } else {
            edge.node1
        };
        visited[new_node] = true;
        state.accepted.push(edge);
        state.candidates.remove(index);
        state.visited = visited_nodes(&visited);
        state.components = tree_components(&visited);
        total_cost += edge.weight;
        timeline.push(mst_snapshot(
            StepKind::Accept,
            &state,
            endpoints(&edge),
            total_cost,
            format!(
                "Added edge {} to MST. Node {} joined the tree.",
                edge, new_node
            ),
        ));

        for i in 0..n {
            if !visited[i] {
                if let Some(w) = matrix[new_node][i] {
                    state.candidates.push(Edge::new(new_node, i, w));
                }
            }
        }
        state
            .candidates
            .retain(|edge| visited[edge.node1] != visited[edge.node2]);
        state.candidates.sort_by_key(|edge| edge.weight);

        if state.accepted.len() < target {
            state.current = None;
            let next = state
                .candidates
                .first()
                .map_or_else(|| "none".to_string(), |edge| edge.weight.to_string());
            timeline.push(mst_snapshot(
                StepKind::Update,
                &state,
                vec![],
                total_cost,
                format!("Updated candidate edges. Next minimum: {}", next),
            ));
        }
    }

    if state.accepted.len() < target {
        tracing::warn!(
            visited = state.visited.len(),
            nodes = n,
            "prim ran out of candidate edges before spanning the graph"
        );
    }

    state.current = None;
    state.candidates.clear();
    timeline.push(mst_snapshot(
        StepKind::Complete,
        &state,
        vec![],
        total_cost,
        format!("MST complete! Total minimum cost: {}", total_cost),
    ));
    timeline
}
