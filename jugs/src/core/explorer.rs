//! Breadth-first construction of the reachability graph.
//!
//! Vertices are stored in discovery order and addressed by dense indices;
//! edges keep the order in which the six transition rules produced them.

use std::collections::{HashMap, VecDeque};

use crate::core::types::{Capacities, State};

/// Directed graph of every state reachable from [`State::EMPTY`].
///
/// Self-loops (e.g. filling a full jug) are kept as legal edges. Parallel
/// edges between the same two states are stored once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityGraph {
    states: Vec<State>,
    index: HashMap<State, usize>,
    edges: Vec<Vec<usize>>,
}

impl ReachabilityGraph {
    fn new() -> Self {
        Self {
            states: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Insert `state` if unseen. Returns its index and whether it was new.
    fn intern(&mut self, state: State) -> (usize, bool) {
        if let Some(&id) = self.index.get(&state) {
            return (id, false);
        }
        let id = self.states.len();
        self.states.push(state);
        self.index.insert(state, id);
        self.edges.push(Vec::new());
        (id, true)
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        let successors = &mut self.edges[from];
        if !successors.contains(&to) {
            successors.push(to);
        }
    }

    /// Number of visited states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Visited states in discovery order; the first entry is the empty state.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn contains(&self, state: State) -> bool {
        self.index.contains_key(&state)
    }

    pub fn index_of(&self, state: State) -> Option<usize> {
        self.index.get(&state).copied()
    }

    pub fn state_at(&self, id: usize) -> State {
        self.states[id]
    }

    pub(crate) fn successor_ids(&self, id: usize) -> &[usize] {
        &self.edges[id]
    }

    /// Successors of `state` in generation order. Empty if `state` is unvisited.
    pub fn successors(&self, state: State) -> impl Iterator<Item = State> + '_ {
        self.index_of(state)
            .into_iter()
            .flat_map(move |id| self.edges[id].iter().map(move |&next| self.states[next]))
    }

    pub fn has_edge(&self, from: State, to: State) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(from), Some(to)) => self.edges[from].contains(&to),
            _ => false,
        }
    }

    /// Total number of distinct edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}

/// The six candidate successors of `state`, in rule order:
/// fill A, fill B, empty A, empty B, pour A into B, pour B into A.
pub fn next_states(caps: Capacities, state: State) -> [State; 6] {
    let State { a, b } = state;
    let into_b = a.min(caps.b - b);
    let into_a = b.min(caps.a - a);
    [
        State::new(caps.a, b),
        State::new(a, caps.b),
        State::new(0, b),
        State::new(a, 0),
        State::new(a - into_b, b + into_b),
        State::new(a + into_a, b - into_a),
    ]
}

/// True if `to` follows from `from` by one non-trivial transition.
pub fn is_transition(caps: Capacities, from: State, to: State) -> bool {
    from != to
        && caps.contains(from)
        && next_states(caps, from).contains(&to)
}

/// Explore every state reachable from the empty state.
///
/// Each candidate becomes an edge from the state being expanded; a candidate
/// is queued for expansion only the first time it is seen.
pub fn build_graph(caps: Capacities) -> ReachabilityGraph {
    let mut graph = ReachabilityGraph::new();
    let mut queue = VecDeque::new();
    let (start, _) = graph.intern(State::EMPTY);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let state = graph.state_at(current);
        for next in next_states(caps, state) {
            let (next_id, is_new) = graph.intern(next);
            if is_new {
                queue.push_back(next_id);
            }
            graph.add_edge(current, next_id);
        }
    }

    graph
}
