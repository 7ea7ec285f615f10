//! Two-jug measurement solver.
//!
//! Decides whether a target volume can be measured with two jugs of fixed
//! integer capacities (fill, empty, pour until one side is full or empty) and,
//! if so, finds one shortest sequence of operations. The crate keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (oracle, state-space search, path
//!   selection, classification, state extraction). No I/O.
//! - **[`io`]**: Side-effecting helpers (config file, step-log files).
//!
//! Orchestration modules ([`solve`], [`render`]) combine core logic into the
//! operations the CLI exposes.
//!
//! ```
//! use jugs::core::types::{Capacities, State};
//! use jugs::solve::{SolveOutcome, solve, visualize_states};
//!
//! let outcome = solve(Capacities::new(3, 5), 4).unwrap();
//! let SolveOutcome::Solved(solution) = outcome else { unreachable!() };
//! assert_eq!(solution.len(), 6);
//! let states = visualize_states(&solution.steps);
//! assert_eq!(states[0], State::EMPTY);
//! assert!(states[6].holds(4));
//! ```

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
