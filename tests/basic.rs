use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_schema_command() {
    let mut cmd = Command::cargo_bin("gemini-bamboo").unwrap();
    cmd.arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("$schema"))
        .stdout(predicate::str::contains("RunnerEvent"));
}

#[test]
fn test_replay_prints_info_and_summary() -> Result<()> {
    let dir = tempdir()?;
    let report_path = dir.path().join("report.json");
    let log_path = dir.path().join("events.jsonl");

    let events = [
        json!({ "event": "begin" }),
        json!({ "event": "info", "message": "hello" }),
        json!({
            "event": "capture",
            "equal": true,
            "state": { "name": "t1" },
            "suite": { "name": "A", "path": ["A"] },
            "browserId": "chrome"
        }),
        json!({ "event": "end" }),
    ];
    let lines: Vec<String> = events.iter().map(|e| e.to_string()).collect();
    fs::write(&log_path, lines.join("\n"))?;

    let mut cmd = Command::cargo_bin("gemini-bamboo").unwrap();
    cmd.arg("replay")
        .arg("--events")
        .arg(&log_path)
        .arg("--report")
        .arg(&report_path)
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello\n"))
        .stdout(predicate::str::contains(
            "Total: 1 Passed: 1 Failed: 0 Skipped: 0",
        ));

    assert!(report_path.exists());
    Ok(())
}

#[test]
fn test_replay_missing_log_fails() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("gemini-bamboo").unwrap();
    cmd.arg("replay")
        .arg("--events")
        .arg(dir.path().join("nope.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load event log"));
}

#[test]
fn test_replay_malformed_line_fails_with_line_number() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("events.jsonl");
    fs::write(&log_path, "{\"event\":\"begin\"}\nnot json\n").unwrap();

    let mut cmd = Command::cargo_bin("gemini-bamboo").unwrap();
    cmd.arg("replay")
        .arg("--events")
        .arg(&log_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
