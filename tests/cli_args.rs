//! Tests for the `modeler-launch` binary.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

fn launch_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_modeler-launch"));
    cmd.env("MODELER_LAUNCH_CONFIG", config_dir.join("config.toml"))
        .env_remove("MODELER_LAUNCH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_shows_options() {
    let dir = TempDir::new().unwrap();
    let output = launch_cmd(dir.path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--cwd"));
    assert!(stdout.contains("--flag"));
    assert!(stdout.contains("--json"));
}

#[test]
fn test_json_plan() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.bpmn"), "").unwrap();
    fs::write(dir.path().join("config.toml"), "flags = [\"--tray\"]\n").unwrap();

    let output = launch_cmd(dir.path())
        .arg("--cwd")
        .arg(dir.path())
        .arg("--json")
        .args(["--", "a.bpmn", "missing.bpmn", "--no-tray"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(
        plan["files"],
        serde_json::json!([dir.path().join("a.bpmn")])
    );
    assert_eq!(plan["effective_flags"], serde_json::json!(["--no-tray"]));
    assert_eq!(plan["skipped"][0]["token"], "missing.bpmn");
}

#[test]
fn test_text_plan_with_extra_flag() {
    let dir = TempDir::new().unwrap();

    let output = launch_cmd(dir.path())
        .arg("--cwd")
        .arg(dir.path())
        .args(["--flag", "--dev", "--", "--no-dev"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "files:\nflags:\n  --dev\n");
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "flags = [\"oops\"]\n").unwrap();

    let output = launch_cmd(dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: loading configuration"));
    assert!(stderr.contains("invalid flag 'oops'"));
}

#[test]
fn test_log_file_receives_diagnostics() {
    let dir = TempDir::new().unwrap();

    let output = launch_cmd(dir.path())
        .env("MODELER_LAUNCH_LOG", dir.path().join("launch.log"))
        .env("RUST_LOG", "info")
        .arg("--cwd")
        .arg(dir.path())
        .args(["--", "missing.bpmn"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let log = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .find(|e| e.file_name().to_string_lossy().starts_with("launch.log."))
        .expect("log file not created");
    let content = fs::read_to_string(log.path()).unwrap();
    assert!(content.contains("parsing launch arguments"));
    assert!(content.contains("skipping unreadable path"));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("parsing launch arguments"));
}
