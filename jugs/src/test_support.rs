//! Test-only helpers: shorthand constructors and an independent BFS oracle.

use std::collections::{HashMap, VecDeque};

use crate::core::explorer::is_transition;
use crate::core::types::{Capacities, State};

pub fn caps(a: u32, b: u32) -> Capacities {
    Capacities::new(a, b)
}

pub fn state(a: u32, b: u32) -> State {
    State::new(a, b)
}

/// Distances from the empty state, computed without the solver's graph.
///
/// Applies the pour rules directly so tests can cross-check the explorer and
/// path selector against a second implementation.
pub fn brute_force_distances(caps: Capacities) -> HashMap<State, usize> {
    let mut distances = HashMap::from([(State::EMPTY, 0)]);
    let mut queue = VecDeque::from([State::EMPTY]);

    while let Some(current) = queue.pop_front() {
        let distance = distances[&current];
        let State { a, b } = current;
        let to_b = a.min(caps.b - b);
        let to_a = b.min(caps.a - a);
        let candidates = [
            (caps.a, b),
            (a, caps.b),
            (0, b),
            (a, 0),
            (a - to_b, b + to_b),
            (a + to_a, b - to_a),
        ];
        for (next_a, next_b) in candidates {
            let next = State::new(next_a, next_b);
            if !distances.contains_key(&next) {
                distances.insert(next, distance + 1);
                queue.push_back(next);
            }
        }
    }

    distances
}

/// Fewest operations needed to leave `goal` in either jug, if possible.
pub fn min_steps_to_goal(caps: Capacities, goal: u32) -> Option<usize> {
    brute_force_distances(caps)
        .into_iter()
        .filter(|(state, _)| state.holds(goal))
        .map(|(_, distance)| distance)
        .min()
}

/// True if `path` starts empty and every hop is one legal transition.
pub fn is_valid_path(caps: Capacities, path: &[State]) -> bool {
    path.first() == Some(&State::EMPTY)
        && path
            .windows(2)
            .all(|pair| is_transition(caps, pair[0], pair[1]))
}
