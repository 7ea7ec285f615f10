//! Step-log files: JSON solutions (schema + invariant checked) and plain
//! text logs with one rendered step per line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use crate::core::invariants::validate_solution;
use crate::core::types::Solution;

const STEP_LOG_SCHEMA: &str = include_str!("../../../schemas/step_log/v1.schema.json");

/// Write a solution as pretty-printed JSON with trailing newline.
pub fn write_solution(path: &Path, solution: &Solution) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(solution).context("serialize step log")?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write step log {}", path.display()))?;
    debug!(path = %path.display(), steps = solution.len(), "step log written");
    Ok(())
}

/// Load and validate a JSON step log (schema + solution invariants).
pub fn load_solution(path: &Path) -> Result<Solution> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read step log {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse step log {}", path.display()))?;
    validate_schema(&value)?;
    let solution: Solution = serde_json::from_value(value)
        .with_context(|| format!("deserialize step log {}", path.display()))?;
    validate_solution_invariants(&solution)?;
    debug!(path = %path.display(), steps = solution.len(), "step log loaded");
    Ok(solution)
}

/// Write rendered log lines, one per line.
pub fn write_log_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut buf = lines.join("\n");
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write log {}", path.display()))
}

/// Read a text log, skipping blank lines.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read log {}", path.display()))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn validate_schema(value: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(STEP_LOG_SCHEMA).context("parse step log schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(value) {
        let messages = compiled
            .iter_errors(value)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "step log schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_solution_invariants(solution: &Solution) -> Result<()> {
    let errors = validate_solution(solution);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("step log invariants failed: {}", errors.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Capacities;
    use crate::solve::{SolveOutcome, solve};

    fn solution(a: u32, b: u32, goal: u32) -> Solution {
        match solve(Capacities::new(a, b), goal).expect("solve") {
            SolveOutcome::Solved(solution) => solution,
            other => panic!("expected solution, got {other:?}"),
        }
    }

    #[test]
    fn write_then_load_solution() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("steps.json");
        let solution = solution(3, 5, 4);
        write_solution(&path, &solution).expect("write");
        assert_eq!(load_solution(&path).expect("load"), solution);
    }

    #[test]
    fn schema_rejects_unknown_operation() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("steps.json");
        fs::write(
            &path,
            r#"{"capacities":{"a":3,"b":5},"goal":4,"steps":[{"operation":{"kind":"spill"},"state":{"a":0,"b":0}}]}"#,
        )
        .expect("write");
        let err = load_solution(&path).expect_err("schema");
        assert!(format!("{err:#}").contains("schema validation failed"));
    }

    #[test]
    fn invariants_reject_illegal_transition() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("steps.json");
        fs::write(
            &path,
            r#"{"capacities":{"a":2,"b":6},"goal":4,"steps":[{"operation":{"kind":"fill_a"},"state":{"a":2,"b":4}}]}"#,
        )
        .expect("write");
        let err = load_solution(&path).expect_err("invariants");
        assert!(format!("{err:#}").contains("not a single legal transition"));
    }

    #[test]
    fn invariants_reject_mislabeled_operations() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("steps.json");
        fs::write(
            &path,
            r#"{"capacities":{"a":2,"b":6},"goal":4,"steps":[{"operation":{"kind":"empty_a"},"state":{"a":0,"b":6}},{"operation":{"kind":"pour_a_to_b","amount":99},"state":{"a":2,"b":4}}]}"#,
        )
        .expect("write");
        let err = load_solution(&path).expect_err("mislabeled");
        let message = format!("{err:#}");
        assert!(message.contains("step 1: operation EmptyA does not match"), "{message}");
        assert!(message.contains("step 2: operation PourAToB"), "{message}");
    }

    #[test]
    fn text_log_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("steps.txt");
        let lines = vec![
            "Fill B completely → (0L, 5L)".to_string(),
            "Fill A completely → (3L, 2L)".to_string(),
        ];
        write_log_lines(&path, &lines).expect("write");
        assert_eq!(read_log_lines(&path).expect("read"), lines);
    }

    #[test]
    fn text_log_skips_blank_lines() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("steps.txt");
        fs::write(&path, "\n  Fill B completely → (0L, 5L)  \n\n").expect("write");
        let lines = read_log_lines(&path).expect("read");
        assert_eq!(lines, vec!["Fill B completely → (0L, 5L)".to_string()]);
    }
}
