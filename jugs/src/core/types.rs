//! Shared value types for the solver core.
//!
//! Everything here is a plain value: copyable, structurally comparable and
//! serializable so step logs can round-trip through JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Capacities of jug A and jug B, fixed for one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capacities {
    pub a: u32,
    pub b: u32,
}

impl Capacities {
    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// Capacity of the larger jug.
    pub fn max(&self) -> u32 {
        self.a.max(self.b)
    }

    /// True if `state` fits inside both jugs.
    pub fn contains(&self, state: State) -> bool {
        state.a <= self.a && state.b <= self.b
    }
}

impl fmt::Display for Capacities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A={}L B={}L", self.a, self.b)
    }
}

/// Volumes currently held by jug A and jug B.
///
/// Ordering is lexicographic on `(a, b)`, which the path selector relies on
/// to break ties between equally distant goal states.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct State {
    pub a: u32,
    pub b: u32,
}

impl State {
    /// Both jugs empty; every search starts here.
    pub const EMPTY: State = State { a: 0, b: 0 };

    pub fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// True if either jug holds exactly `volume`.
    pub fn holds(&self, volume: u32) -> bool {
        self.a == volume || self.b == volume
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}L, {}L)", self.a, self.b)
    }
}

impl From<(u32, u32)> for State {
    fn from((a, b): (u32, u32)) -> Self {
        Self { a, b }
    }
}

/// Semantic kind of a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    FillA,
    FillB,
    EmptyA,
    EmptyB,
    /// Pour from A into B; `amount` is the volume that moved.
    PourAToB { amount: u32 },
    /// Pour from B into A; `amount` is the volume that moved.
    PourBToA { amount: u32 },
}

/// One classified transition together with the state it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub operation: Operation,
    pub state: State,
}

/// Shortest sequence of steps from the empty state to a state holding `goal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub capacities: Capacities,
    pub goal: u32,
    pub steps: Vec<Step>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// State after the last step (the empty state for an empty solution).
    pub fn final_state(&self) -> State {
        self.steps
            .last()
            .map(|step| step.state)
            .unwrap_or(State::EMPTY)
    }
}
