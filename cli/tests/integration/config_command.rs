//! Integration tests for `medic config`.
//!
//! Every test points `MEDIC_CONFIG` at a temp path so it never reads or
//! writes `~/.medic/config.yaml`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn medic(config: &str) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("medic"));
    cmd.env("NO_COLOR", "1").env("MEDIC_CONFIG", config);
    cmd
}

/// Returns a `TempDir` and the path string for a config file inside it.
fn temp_config_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("config.yaml")
        .to_string_lossy()
        .into_owned();
    (dir, path)
}

#[test]
fn test_config_help_shows_show_and_set_subcommands() {
    let (_dir, path) = temp_config_path();
    medic(&path)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("set"));
}

#[test]
fn test_config_show_without_file_prints_defaults() {
    let (_dir, path) = temp_config_path();
    medic(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("network.probe_address"))
        .stdout(predicate::str::contains("8.8.8.8:53"));
}

#[test]
fn test_config_show_json_is_valid() {
    let (_dir, path) = temp_config_path();
    let assert = medic(&path)
        .args(["--json", "config", "show"])
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(value["network"]["probe_address"], "8.8.8.8:53");
    assert_eq!(value["commands"]["timeout_secs"], 5);
}

#[test]
fn test_config_set_persists_value() {
    let (_dir, path) = temp_config_path();
    medic(&path)
        .args(["config", "set", "network.timeout_secs", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("network.timeout_secs"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("timeout_secs: 4"), "got: {content}");

    medic(&path)
        .args(["--json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""timeout_secs": 4"#));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let (_dir, path) = temp_config_path();
    medic(&path)
        .args(["config", "set", "network.proxy", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("network.proxy"));
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_config_set_out_of_range_timeout_fails() {
    let (_dir, path) = temp_config_path();
    medic(&path)
        .args(["config", "set", "network.timeout_secs", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("network.timeout_secs"));
}

#[test]
fn test_config_set_json_error_is_structured() {
    let (_dir, path) = temp_config_path();
    let assert = medic(&path)
        .args(["--json", "config", "set", "bogus", "1"])
        .assert()
        .failure();
    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "ERROR");
}
