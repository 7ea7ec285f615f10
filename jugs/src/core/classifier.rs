//! Deterministic classification of path transitions into operations.

use thiserror::Error;

use crate::core::types::{Capacities, Operation, State, Step};

/// A transition that matches none of the known operation shapes.
///
/// Paths built from the reachability graph never produce one; seeing it means
/// the graph and the classifier disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("transition {from} -> {to} matches no known operation")]
pub struct Inconsistency {
    pub from: State,
    pub to: State,
}

/// Classify a single transition. First matching rule wins:
///
/// 1. A becomes full (and was not) -> `FillA`
/// 2. B becomes full (and was not) -> `FillB`
/// 3. A becomes empty (and was not) -> `EmptyA`
/// 4. B becomes empty (and was not) -> `EmptyB`
/// 5. A drops while B rises -> `PourAToB` by B's gain
/// 6. B drops while A rises -> `PourBToA` by A's gain
///
/// The order is significant: a pour that fills or empties a jug is reported
/// by the earlier rule.
pub fn classify_transition(caps: Capacities, from: State, to: State) -> Option<Operation> {
    let (a1, b1) = (from.a, from.b);
    let (a2, b2) = (to.a, to.b);

    if a2 == caps.a && a1 != caps.a {
        Some(Operation::FillA)
    } else if b2 == caps.b && b1 != caps.b {
        Some(Operation::FillB)
    } else if a2 == 0 && a1 != 0 {
        Some(Operation::EmptyA)
    } else if b2 == 0 && b1 != 0 {
        Some(Operation::EmptyB)
    } else if a2 < a1 && b2 > b1 {
        Some(Operation::PourAToB { amount: b2 - b1 })
    } else if b2 < b1 && a2 > a1 {
        Some(Operation::PourBToA { amount: a2 - a1 })
    } else {
        None
    }
}

/// Classify every consecutive pair of `path` into a [`Step`].
///
/// Fails on the first transition that matches no rule.
pub fn classify(caps: Capacities, path: &[State]) -> Result<Vec<Step>, Inconsistency> {
    path.windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            classify_transition(caps, from, to)
                .map(|operation| Step {
                    operation,
                    state: to,
                })
                .ok_or(Inconsistency { from, to })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPS: Capacities = Capacities { a: 3, b: 5 };

    fn op(from: (u32, u32), to: (u32, u32)) -> Option<Operation> {
        classify_transition(CAPS, from.into(), to.into())
    }

    #[test]
    fn classifies_each_basic_operation() {
        assert_eq!(op((0, 2), (3, 2)), Some(Operation::FillA));
        assert_eq!(op((1, 0), (1, 5)), Some(Operation::FillB));
        assert_eq!(op((2, 4), (0, 4)), Some(Operation::EmptyA));
        assert_eq!(op((2, 4), (2, 0)), Some(Operation::EmptyB));
        assert_eq!(op((2, 1), (1, 2)), Some(Operation::PourAToB { amount: 1 }));
        assert_eq!(op((1, 3), (2, 2)), Some(Operation::PourBToA { amount: 1 }));
    }

    #[test]
    fn pour_that_fills_a_jug_reports_the_fill() {
        assert_eq!(op((3, 4), (2, 5)), Some(Operation::FillB));
        assert_eq!(op((0, 5), (3, 2)), Some(Operation::FillA));
    }

    #[test]
    fn pour_that_empties_a_jug_reports_the_empty() {
        assert_eq!(op((2, 0), (0, 2)), Some(Operation::EmptyA));
        assert_eq!(op((0, 2), (2, 0)), Some(Operation::EmptyB));
    }

    #[test]
    fn classify_carries_resulting_states() {
        let path = [State::EMPTY, State::new(0, 5), State::new(3, 2)];
        let steps = classify(CAPS, &path).expect("classify");
        assert_eq!(
            steps,
            vec![
                Step {
                    operation: Operation::FillB,
                    state: State::new(0, 5),
                },
                Step {
                    operation: Operation::FillA,
                    state: State::new(3, 2),
                },
            ]
        );
    }

    #[test]
    fn classify_surfaces_unknown_transitions() {
        let path = [State::EMPTY, State::new(0, 5), State::new(0, 5)];
        let err = classify(CAPS, &path).expect_err("self-loop is not an operation");
        assert_eq!(
            err,
            Inconsistency {
                from: State::new(0, 5),
                to: State::new(0, 5),
            }
        );
    }

    #[test]
    fn single_state_path_has_no_steps() {
        let steps = classify(CAPS, &[State::EMPTY]).expect("classify");
        assert!(steps.is_empty());
    }
}
