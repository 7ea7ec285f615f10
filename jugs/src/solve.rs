//! Solve pipeline: boundary checks, oracle, search, classification.
//!
//! Each call builds its own graph; nothing is cached or shared between calls.

use tracing::{debug, info};

use crate::core::classifier::classify;
use crate::core::explorer::build_graph;
use crate::core::extract::extract_states;
use crate::core::oracle::{gcd, is_solvable};
use crate::core::path::{TieBreak, shortest_path};
use crate::core::types::{Capacities, Solution, State, Step};
use crate::error::SolveError;

/// Knobs for [`solve_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    pub tie_break: TieBreak,
}

/// Result of a well-formed solve request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A shortest solution was found.
    Solved(Solution),
    /// The goal is not a multiple of `gcd` (or exceeds both jugs).
    Unsolvable { gcd: u32 },
}

impl SolveOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            SolveOutcome::Unsolvable { .. } => None,
        }
    }
}

/// Reject zero capacities and goals outside `[1, max(capA, capB)]`.
pub fn check_request(caps: Capacities, goal: u32) -> Result<(), SolveError> {
    if caps.a == 0 || caps.b == 0 {
        return Err(SolveError::InvalidCapacity {
            a: caps.a,
            b: caps.b,
        });
    }
    if goal == 0 || goal > caps.max() {
        return Err(SolveError::GoalOutOfRange {
            goal,
            max: caps.max(),
        });
    }
    Ok(())
}

/// Solve with default options.
pub fn solve(caps: Capacities, goal: u32) -> Result<SolveOutcome, SolveError> {
    solve_with(caps, goal, &SolveOptions::default())
}

/// Find one shortest sequence of operations that leaves `goal` in either jug.
pub fn solve_with(
    caps: Capacities,
    goal: u32,
    options: &SolveOptions,
) -> Result<SolveOutcome, SolveError> {
    check_request(caps, goal)?;

    if !is_solvable(caps, goal) {
        let divisor = gcd(caps.a, caps.b);
        info!(%caps, goal, gcd = divisor, "goal is not measurable");
        return Ok(SolveOutcome::Unsolvable { gcd: divisor });
    }

    let graph = build_graph(caps);
    debug!(
        %caps,
        states = graph.len(),
        edges = graph.edge_count(),
        "reachability graph built"
    );

    let path = shortest_path(&graph, goal, options.tie_break)
        .ok_or(SolveError::MissingPath { goal })?;
    debug!(
        target = ?path.last(),
        tie_break = %options.tie_break,
        "goal state selected"
    );

    let steps = classify(caps, &path)?;
    info!(%caps, goal, steps = steps.len(), "solved");
    Ok(SolveOutcome::Solved(Solution {
        capacities: caps,
        goal,
        steps,
    }))
}

/// States to display for `steps`, starting with the empty state.
pub fn visualize_states(steps: &[Step]) -> Vec<State> {
    extract_states(steps)
}
