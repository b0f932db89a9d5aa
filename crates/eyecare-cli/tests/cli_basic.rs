//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary and verify its JSON-lines output.

mod common;

use common::{fast_config, json_lines, run_cli, run_cli_success, types};

#[test]
fn test_simulate_first_break() {
    let cfg = fast_config();
    let path = cfg.path().to_str().unwrap();
    let out = run_cli_success(&["simulate", "--config", path, "--ticks", "6"]);
    let lines = json_lines(&out);

    assert_eq!(
        types(&lines),
        vec!["tick", "tick", "tick", "tick", "tick", "break_started", "status"]
    );
    assert_eq!(lines[4]["remaining_seconds"], 0);
    assert_eq!(lines[5]["phase"], "short_break");
    assert_eq!(lines[5]["remaining_seconds"], 2);
    assert_eq!(lines[5]["break_count"], 1);
    assert_eq!(lines[6]["clock"], "00:02");
}

#[test]
fn test_simulate_fourth_break_is_long() {
    let cfg = fast_config();
    let path = cfg.path().to_str().unwrap();
    // Each short cycle is 6 work ticks + 3 break ticks.
    let out = run_cli_success(&["simulate", "--config", path, "--ticks", "33"]);
    let lines = json_lines(&out);

    let breaks: Vec<_> = lines
        .iter()
        .filter(|l| l["type"] == "break_started")
        .map(|l| l["phase"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(breaks, vec!["short_break", "short_break", "short_break", "long_break"]);

    let last = lines.last().unwrap();
    assert_eq!(last["phase"], "long_break");
    assert_eq!(last["remaining_seconds"], 10);
    assert_eq!(last["break_count"], 4);
}

#[test]
fn test_simulate_skip_break() {
    let cfg = fast_config();
    let path = cfg.path().to_str().unwrap();
    let out = run_cli_success(&[
        "simulate", "--config", path, "--ticks", "7", "--skip-at", "6",
    ]);
    let lines = json_lines(&out);
    let kinds = types(&lines);

    assert_eq!(&kinds[5..], &["break_started", "work_started", "tick", "status"]);
    let last = lines.last().unwrap();
    assert_eq!(last["phase"], "working");
    assert_eq!(last["remaining_seconds"], 4);
}

#[test]
fn test_set_override_applies() {
    let cfg = fast_config();
    let path = cfg.path().to_str().unwrap();
    let out = run_cli_success(&[
        "status",
        "--config",
        path,
        "--set",
        "scheduler.work_duration_seconds=90",
    ]);
    let lines = json_lines(&out);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["phase"], "working");
    assert_eq!(lines[0]["clock"], "01:30");
    assert_eq!(lines[0]["running"], true);
    assert_eq!(lines[0]["break_count"], 0);
}

#[test]
fn test_invalid_override_fails() {
    let cfg = fast_config();
    let path = cfg.path().to_str().unwrap();
    let (_, stderr, code) = run_cli(
        &[
            "config",
            "validate",
            "--config",
            path,
            "--set",
            "scheduler.work_duration_seconds=0",
        ],
        None,
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"), "stderr was: {stderr}");
    assert!(stderr.contains("work_duration_seconds"), "stderr was: {stderr}");
}

#[test]
fn test_config_get_and_validate() {
    let cfg = fast_config();
    let path = cfg.path().to_str().unwrap();
    let out = run_cli_success(&["config", "get", "scheduler.long_break_seconds", "--config", path]);
    assert_eq!(out.trim(), "10");

    let out = run_cli_success(&["config", "validate", "--config", path]);
    assert_eq!(out.trim(), "ok");

    let (_, _, code) = run_cli(&["config", "get", "scheduler.nope", "--config", path], None);
    assert_eq!(code, 1);
}

#[test]
fn test_run_stops_after_max_ticks() {
    let cfg = fast_config();
    let path = cfg.path().to_str().unwrap();
    let (stdout, stderr, code) = run_cli(&["run", "--config", path, "--max-ticks", "3"], None);
    assert_eq!(code, 0, "stderr: {stderr}");

    let lines = json_lines(&stdout);
    let kinds = types(&lines);
    assert_eq!(kinds, vec!["status", "tick", "tick", "tick", "status"]);
    assert_eq!(lines.last().unwrap()["remaining_seconds"], 2);
}

#[test]
fn test_run_accepts_stdin_commands() {
    let cfg = fast_config();
    let path = cfg.path().to_str().unwrap();
    let (stdout, stderr, code) = run_cli(
        &["run", "--config", path, "--max-ticks", "1000"],
        Some("pause\npause\nstatus\nquit\n"),
    );
    assert_eq!(code, 0, "stderr: {stderr}");

    let lines = json_lines(&stdout);
    let kinds = types(&lines);
    assert_eq!(kinds.iter().filter(|k| *k == "paused").count(), 1);
    assert_eq!(kinds.last().map(String::as_str), Some("status"));

    let final_status = lines.last().unwrap();
    assert_eq!(final_status["running"], false);
}
