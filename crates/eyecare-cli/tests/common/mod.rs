//! Common utilities for CLI E2E tests.

use std::io::Write;
use std::process::{Command, Stdio};

/// Config file with short durations so a whole cycle fits in a few ticks.
pub fn fast_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    writeln!(
        file,
        "[scheduler]\nwork_duration_seconds = 5\nshort_break_seconds = 2\nlong_break_seconds = 10\nbreaks_per_long_break = 4\n\n[host]\ntick_interval_ms = 10"
    )
    .expect("write temp config");
    file
}

/// Invoke the CLI binary and return (stdout, stderr, exit code).
pub fn run_cli(args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_eyecare-cli"))
        .args(args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    {
        let mut pipe = child.stdin.take().expect("stdin pipe");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("write stdin");
        }
    }

    let output = child.wait_with_output().expect("wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Invoke a CLI command and expect success.
pub fn run_cli_success(args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(args, None);
    assert_eq!(code, 0, "CLI command failed: {:?}\n{}", args, stderr);
    stdout
}

/// Parse JSON-lines output.
pub fn json_lines(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("Failed to parse JSON output"))
        .collect()
}

/// The `type` tag of every line.
pub fn types(lines: &[serde_json::Value]) -> Vec<String> {
    lines
        .iter()
        .map(|v| v["type"].as_str().unwrap_or_default().to_string())
        .collect()
}
