//! Re-derive the state sequence from classified steps or rendered log lines.

use crate::core::types::{State, Step};

/// `[EMPTY, s1, s2, ...]` where `si` is the state after step `i`.
pub fn extract_states(steps: &[Step]) -> Vec<State> {
    std::iter::once(State::EMPTY)
        .chain(steps.iter().map(|step| step.state))
        .collect()
}

/// States recovered from a textual step log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStates {
    pub states: Vec<State>,
    /// Zero-based indices of lines that could not be parsed.
    pub malformed: Vec<usize>,
}

/// Parse the last `(aL, bL)` group of a rendered log line. The `L` suffix is
/// optional.
pub fn parse_log_state(line: &str) -> Option<State> {
    use std::sync::LazyLock;
    static STATE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
        regex::Regex::new(r"\(\s*(\d+)\s*L?\s*,\s*(\d+)\s*L?\s*\)").unwrap()
    });

    let caps = STATE_RE.captures_iter(line).last()?;
    let a = caps.get(1)?.as_str().parse().ok()?;
    let b = caps.get(2)?.as_str().parse().ok()?;
    Some(State::new(a, b))
}

/// Like [`extract_states`], but from log lines.
///
/// A line without a parseable state repeats the previous state so the
/// sequence keeps one entry per line; its index is reported in `malformed`.
pub fn extract_states_from_log<S: AsRef<str>>(lines: &[S]) -> LogStates {
    let mut states = Vec::with_capacity(lines.len() + 1);
    let mut malformed = Vec::new();
    let mut previous = State::EMPTY;
    states.push(previous);

    for (index, line) in lines.iter().enumerate() {
        match parse_log_state(line.as_ref()) {
            Some(state) => previous = state,
            None => malformed.push(index),
        }
        states.push(previous);
    }

    LogStates { states, malformed }
}
