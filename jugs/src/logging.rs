//! Tracing setup for the `jugs` binary.
//!
//! Events go to stderr, never mixed into the report on stdout:
//! - `info`: one line per solve (`solved` or `goal is not measurable`) and
//!   each saved solution file
//! - `debug`: graph size, the chosen goal state and tie-break, config loads,
//!   step-log reads and writes
//! - `warn`: text-log lines with no parseable state during `replay --text`

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` picks the filter; unset means
/// `warn`, so a plain run only reports skipped log lines.
///
/// # Example
/// ```bash
/// RUST_LOG=jugs=debug cargo run -- solve 3 5 4
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
