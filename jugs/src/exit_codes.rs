//! Stable exit codes for jugs CLI commands.

/// Command succeeded; for `check` and `solve`, the goal is measurable.
pub const OK: i32 = 0;
/// Invalid input, config, or step-log file, or any other error.
pub const INVALID: i32 = 1;
/// The goal cannot be measured with the given jugs.
pub const UNSOLVABLE: i32 = 2;
/// The solver produced a path it could not classify (internal defect).
pub const INCONSISTENT: i32 = 3;
