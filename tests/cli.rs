//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn run_todo_store(args: &[&str], envs: &[(&str, &Path)]) -> Output {
    let bin = env!("CARGO_BIN_EXE_todo-store");
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = Command::new(bin);
    cmd.args(args)
        .current_dir(dir.path())
        .env_remove("TODO_STORE_RECORD")
        .env_remove("TODO_STORE_ID_STRATEGY")
        .env_remove("RUST_LOG");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run todo-store binary")
}

fn json_lines(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line should be JSON"))
        .collect()
}

#[test]
fn demo_prints_one_outcome_per_step() {
    let output = run_todo_store(&["demo"], &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let lines = json_lines(&output);
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0]["ok"]["id"], "1");
    assert_eq!(lines[1]["ok"]["completed"], true);
    assert_eq!(lines[5]["error"]["kind"], "todo_not_found");
    assert_eq!(lines[7]["ok"], serde_json::json!([]));
}

#[test]
fn run_executes_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("ops.yaml");
    std::fs::write(
        &script,
        "operations:\n  - op: add\n    title: first\n  - op: add\n    title: second\n    order: 2\n  - op: list\n",
    )
    .unwrap();

    let output = run_todo_store(&["run", script.to_str().unwrap()], &[]);
    assert!(output.status.success());

    let lines = json_lines(&output);
    let listed = lines[2]["ok"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["title"], "first");
    assert!(listed[0].get("order").is_none());
    assert_eq!(listed[1]["order"], 2);
}

#[test]
fn run_with_missing_script_fails() {
    let output = run_todo_store(&["run", "/nonexistent/ops.yaml"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read script"));
}

#[test]
fn config_reflects_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("alt.yaml");
    std::fs::write(&config, "id_strategy: uuid\nlog_filter: info\n").unwrap();

    let output = run_todo_store(&["config", "--config", config.to_str().unwrap()], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("id_strategy: uuid"));
    assert!(stdout.contains("log_filter: info"));
}

#[test]
fn uuid_strategy_from_env() {
    let bin = env!("CARGO_BIN_EXE_todo-store");
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(bin)
        .arg("demo")
        .current_dir(dir.path())
        .env_remove("TODO_STORE_RECORD")
        .env("TODO_STORE_ID_STRATEGY", "uuid")
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = json_lines(&output);
    assert_eq!(lines[0]["ok"]["id"].as_str().unwrap().len(), 36);
    // The demo addresses id "1", which a UUID store never issues.
    assert_eq!(lines[1]["error"]["kind"], "todo_not_found");
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_todo_store(&["nonsense"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn record_env_writes_cassettes() {
    let dir = tempfile::tempdir().unwrap();
    let cassettes = dir.path().join("cassettes");

    let output = run_todo_store(&["demo"], &[("TODO_STORE_RECORD", &cassettes)]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Recording saved to"));
    assert!(cassettes.join("id_gen.cassette.yaml").exists());
    assert!(cassettes.join("todos.cassette.yaml").exists());
}

#[test]
fn record_env_conflicts_with_replay() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_todo_store(
        &["run", "ops.yaml", "--replay", "todos.cassette.yaml"],
        &[("TODO_STORE_RECORD", dir.path())],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot be combined"));
}

fn write_script(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn replay_reproduces_recorded_run() {
    let dir = tempfile::tempdir().unwrap();
    let cassettes = dir.path().join("cassettes");
    let script = write_script(
        dir.path(),
        "ops.yaml",
        "operations:\n  - op: add\n    title: Reticulate splines\n    order: 0\n  - op: update\n    id: \"1\"\n    completed: true\n  - op: get\n    id: dummyID\n  - op: list\n",
    );
    let script = script.to_str().unwrap();

    let recorded = run_todo_store(&["run", script], &[("TODO_STORE_RECORD", &cassettes)]);
    assert!(recorded.status.success(), "stderr: {}", String::from_utf8_lossy(&recorded.stderr));

    let cassette = cassettes.join("todos.cassette.yaml");
    let replayed = run_todo_store(&["run", script, "--replay", cassette.to_str().unwrap()], &[]);
    assert!(replayed.status.success(), "stderr: {}", String::from_utf8_lossy(&replayed.stderr));

    let lines = json_lines(&replayed);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines, json_lines(&recorded));
    assert_eq!(lines[2]["error"]["kind"], "todo_not_found");
}

#[test]
fn replay_past_end_of_cassette_reports_internal_errors() {
    let dir = tempfile::tempdir().unwrap();
    let cassettes = dir.path().join("cassettes");
    let short = write_script(dir.path(), "short.yaml", "operations:\n  - op: add\n    title: only\n");
    let long = write_script(
        dir.path(),
        "long.yaml",
        "operations:\n  - op: add\n    title: only\n  - op: list\n",
    );

    let recorded =
        run_todo_store(&["run", short.to_str().unwrap()], &[("TODO_STORE_RECORD", &cassettes)]);
    assert!(recorded.status.success());

    let cassette = cassettes.join("todos.cassette.yaml");
    let replayed = run_todo_store(
        &["run", long.to_str().unwrap(), "--replay", cassette.to_str().unwrap()],
        &[],
    );
    let stderr = String::from_utf8_lossy(&replayed.stderr);
    assert!(replayed.status.success(), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"));

    let lines = json_lines(&replayed);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["ok"]["title"], "only");
    assert_eq!(lines[1]["op"], "list");
    assert_eq!(lines[1]["error"]["kind"], "internal");
    assert!(lines[1]["error"]["message"].as_str().unwrap().contains("Cassette exhausted"));
}
