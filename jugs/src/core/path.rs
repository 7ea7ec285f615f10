//! Shortest-path selection over the reachability graph.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::explorer::ReachabilityGraph;
use crate::core::types::State;

/// How to choose among several states that hold the goal volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Minimum distance over all goal states, then lexicographic `(a, b)`.
    #[default]
    Nearest,
    /// First goal state in discovery order.
    FirstDiscovered,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Nearest => f.write_str("nearest"),
            TieBreak::FirstDiscovered => f.write_str("first-discovered"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "nearest" => Ok(TieBreak::Nearest),
            "first-discovered" => Ok(TieBreak::FirstDiscovered),
            other => Err(format!(
                "unknown tie-break '{other}' (expected nearest or first-discovered)"
            )),
        }
    }
}

/// BFS predecessor tree rooted at the empty state.
struct BfsTree {
    parent: Vec<Option<usize>>,
    distance: Vec<Option<usize>>,
}

impl BfsTree {
    /// Predecessors follow expansion order, so reconstruction is deterministic.
    fn from_root(graph: &ReachabilityGraph, root: usize) -> Self {
        let mut parent = vec![None; graph.len()];
        let mut distance = vec![None; graph.len()];
        let mut queue = VecDeque::new();
        distance[root] = Some(0);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            let next_distance = distance[current].map(|d| d + 1);
            for &next in graph.successor_ids(current) {
                if distance[next].is_none() {
                    distance[next] = next_distance;
                    parent[next] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        Self { parent, distance }
    }

    fn path_to(&self, graph: &ReachabilityGraph, target: usize) -> Vec<State> {
        let mut path = vec![graph.state_at(target)];
        let mut cursor = target;
        while let Some(previous) = self.parent[cursor] {
            path.push(graph.state_at(previous));
            cursor = previous;
        }
        path.reverse();
        path
    }
}

/// Shortest-edge-count distance from the empty state to every visited state,
/// indexed like [`ReachabilityGraph::states`].
pub fn distances_from_empty(graph: &ReachabilityGraph) -> Vec<Option<usize>> {
    match graph.index_of(State::EMPTY) {
        Some(root) => BfsTree::from_root(graph, root).distance,
        None => vec![None; graph.len()],
    }
}

/// Shortest path from the empty state to a state holding `goal`.
///
/// The returned path starts with [`State::EMPTY`] and ends at the selected
/// goal state. `None` if no visited state holds `goal`.
pub fn shortest_path(
    graph: &ReachabilityGraph,
    goal: u32,
    tie_break: TieBreak,
) -> Option<Vec<State>> {
    let root = graph.index_of(State::EMPTY)?;
    let tree = BfsTree::from_root(graph, root);

    let mut candidates = graph
        .states()
        .iter()
        .enumerate()
        .filter(|(id, state)| state.holds(goal) && tree.distance[*id].is_some());

    let target = match tie_break {
        TieBreak::FirstDiscovered => candidates.next().map(|(id, _)| id),
        TieBreak::Nearest => candidates
            .min_by_key(|(id, state)| (tree.distance[*id], **state))
            .map(|(id, _)| id),
    }?;

    Some(tree.path_to(graph, target))
}
