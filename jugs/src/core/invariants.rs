//! Semantic checks on a solution that the type system cannot express.

use crate::core::classifier::classify_transition;
use crate::core::explorer::is_transition;
use crate::core::types::{Solution, State};

/// Check a solution against its own capacities and goal:
/// - Capacities are positive
/// - At least one step
/// - Every state fits inside the jugs
/// - Every step is one legal transition from the previous state
/// - Every step's operation is the classification of that transition
/// - The final state holds the goal
///
/// Returns every violation found; an empty list means the solution is valid.
pub fn validate_solution(solution: &Solution) -> Vec<String> {
    let mut errors = Vec::new();
    let caps = solution.capacities;

    if caps.a == 0 || caps.b == 0 {
        errors.push(format!("capacities must be positive ({caps})"));
        return errors;
    }

    if solution.steps.is_empty() {
        errors.push("solution has no steps".to_string());
        return errors;
    }

    let mut previous = State::EMPTY;
    for (index, step) in solution.steps.iter().enumerate() {
        let number = index + 1;
        if !caps.contains(step.state) {
            errors.push(format!(
                "step {number}: state {} exceeds capacities {caps}",
                step.state
            ));
        } else if !is_transition(caps, previous, step.state) {
            errors.push(format!(
                "step {number}: {} -> {} is not a single legal transition",
                previous, step.state
            ));
        } else {
            let expected = classify_transition(caps, previous, step.state);
            if expected != Some(step.operation) {
                errors.push(format!(
                    "step {number}: operation {:?} does not match transition {} -> {} ({:?})",
                    step.operation, previous, step.state, expected
                ));
            }
        }
        previous = step.state;
    }

    if !previous.holds(solution.goal) {
        errors.push(format!(
            "final state {} does not hold goal {}L",
            previous, solution.goal
        ));
    }

    errors
}
