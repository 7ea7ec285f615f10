//! CLI tests for `jugs check`, `jugs solve` and `jugs replay`.
//!
//! Spawns the jugs binary in a temp dir (so no stray `jugs.toml` is picked
//! up) and verifies exit codes and stdout.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use jugs::exit_codes;

fn jugs(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jugs"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run jugs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn check_solvable_exits_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = jugs(temp.path(), &["check", "3", "5", "4"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).starts_with("solvable"));
}

#[test]
fn check_unsolvable_exits_with_unsolvable_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = jugs(temp.path(), &["check", "2", "4", "3"]);
    assert_eq!(output.status.code(), Some(exit_codes::UNSOLVABLE));
    assert!(stdout(&output).contains("gcd=2L"));
}

#[test]
fn goal_out_of_range_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = jugs(temp.path(), &["solve", "3", "5", "6"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn capacity_above_config_limit_is_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("jugs.toml"), "max_capacity = 4\n").expect("write config");
    let output = jugs(temp.path(), &["solve", "3", "5", "4"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn solve_prints_numbered_steps() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = jugs(temp.path(), &["solve", "2", "6", "4", "--bars"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.contains("Shortest path: 2 steps"));
    assert!(text.contains("Step 1: Fill B completely → (0L, 6L)"));
    assert!(text.contains("Initial state"));
}

#[test]
fn solve_json_reports_states() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = jugs(temp.path(), &["solve", "3", "5", "4", "--format", "json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(report["solvable"], true);
    assert_eq!(report["steps"].as_array().map(Vec::len), Some(6));
    assert_eq!(report["states"].as_array().map(Vec::len), Some(7));
}

#[test]
fn config_language_applies_unless_overridden() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("jugs.toml"), "language = \"ja\"\n").expect("write config");

    let output = jugs(temp.path(), &["solve", "2", "6", "4"]);
    assert!(stdout(&output).contains("Bを満タンにする"));

    let output = jugs(temp.path(), &["solve", "2", "6", "4", "--lang", "en"]);
    assert!(stdout(&output).contains("Fill B completely"));
}

#[test]
fn saved_step_log_replays() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = jugs(temp.path(), &["solve", "2", "6", "4", "--out", "steps.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let output = jugs(temp.path(), &["replay", "steps.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.contains("0: (0L, 0L)"));
    assert!(text.contains("2: (2L, 4L)  Fill A completely"));
}

#[test]
fn replay_rejects_log_above_capacity_limit() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = jugs(temp.path(), &["solve", "2", "6", "4", "--out", "steps.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    fs::write(temp.path().join("jugs.toml"), "max_capacity = 5\n").expect("write config");

    let output = jugs(temp.path(), &["replay", "steps.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("exceed max_capacity 5L"));
}

#[test]
fn replay_rejects_mislabeled_step_log() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("steps.json"),
        r#"{"capacities":{"a":2,"b":6},"goal":4,"steps":[{"operation":{"kind":"fill_b"},"state":{"a":0,"b":6}},{"operation":{"kind":"pour_b_to_a","amount":2},"state":{"a":2,"b":4}}]}"#,
    )
    .expect("write log");
    let output = jugs(temp.path(), &["replay", "steps.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stdout(&output).is_empty());
}

#[test]
fn text_log_replay_tolerates_garbled_lines() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("steps.txt"),
        "Fill B completely → (0L, 6L)\ngarbled\nFill A completely → (2L, 4L)\n",
    )
    .expect("write log");
    let output = jugs(temp.path(), &["replay", "--text", "steps.txt"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&output),
        "0: (0L, 0L)\n1: (0L, 6L)\n2: (0L, 6L)\n3: (2L, 4L)\n"
    );
}

#[test]
fn init_config_refuses_to_overwrite() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = jugs(temp.path(), &["init-config"]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    assert!(temp.path().join("jugs.toml").exists());

    let second = jugs(temp.path(), &["init-config"]);
    assert_eq!(second.status.code(), Some(exit_codes::INVALID));

    let forced = jugs(temp.path(), &["init-config", "--force"]);
    assert_eq!(forced.status.code(), Some(exit_codes::OK));
}

#[test]
fn graph_prints_counts_and_distances() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = jugs(temp.path(), &["graph", "2", "4"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.starts_with("states=6 edges=24\n"));
    assert!(text.contains("(0L, 0L)  distance=0  -> (2L, 0L), (0L, 4L), (0L, 0L)"));
}
