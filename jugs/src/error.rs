//! Errors surfaced by [`crate::solve`].

use thiserror::Error;

use crate::core::classifier::Inconsistency;

/// Why a solve request could not produce an answer.
///
/// An unsolvable goal is not an error; see [`crate::solve::SolveOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Either capacity is zero.
    #[error("capacities must be positive (got A={a}L, B={b}L)")]
    InvalidCapacity { a: u32, b: u32 },

    /// Goal outside `[1, max(capA, capB)]`.
    #[error("goal {goal}L must be between 1L and {max}L")]
    GoalOutOfRange { goal: u32, max: u32 },

    /// A path transition matched no operation.
    #[error("graph inconsistency: {0}")]
    GraphInconsistency(#[from] Inconsistency),

    /// The oracle accepted the goal but the search found no state holding it.
    #[error("graph inconsistency: goal {goal}L passed the solvability check but no path reaches it")]
    MissingPath { goal: u32 },
}

impl SolveError {
    /// True for errors that indicate a defect in the solver itself.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            SolveError::GraphInconsistency(_) | SolveError::MissingPath { .. }
        )
    }
}
