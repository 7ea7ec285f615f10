//! I/O helpers for jugs commands.

pub mod config;
pub mod step_log;
