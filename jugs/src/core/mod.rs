//! Deterministic, pure solver logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.
//!
//! The pipeline runs leaves first: [`oracle`] gates [`explorer`], whose graph
//! feeds [`path`], whose states feed [`classifier`]; [`extract`] recovers the
//! state sequence from the classified steps.

pub mod classifier;
pub mod explorer;
pub mod extract;
pub mod invariants;
pub mod oracle;
pub mod path;
pub mod types;
