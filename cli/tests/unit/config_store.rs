//! Tests for the configuration use-cases against a YAML file in a tempdir.

#![allow(clippy::expect_used)]

use std::time::Duration;

use medic_cli::application::ports::ConfigStore;
use medic_cli::application::services::config_service::{
    load_config, load_probe_settings, set_value,
};
use medic_cli::domain::config::MedicConfig;
use medic_cli::infra::config::YamlConfigStore;

fn store(dir: &tempfile::TempDir) -> YamlConfigStore {
    YamlConfigStore::at(dir.path().join("config.yaml"))
}

#[test]
fn test_load_config_without_file_is_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = load_config(&store(&dir)).expect("load");
    assert_eq!(config, MedicConfig::default());
}

#[test]
fn test_set_value_persists_and_reloads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store(&dir);

    let updated = set_value(&store, "network.timeout_secs", "4").expect("set");
    assert_eq!(updated.network.timeout_secs, 4);

    let reloaded = load_config(&store).expect("reload");
    assert_eq!(reloaded, updated);
    let settings = load_probe_settings(&store);
    assert_eq!(settings.network_timeout, Duration::from_secs(4));
}

#[test]
fn test_set_value_rejects_unknown_key_without_writing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store(&dir);

    let err = set_value(&store, "network.proxy", "x").expect_err("unknown key");
    assert!(err.to_string().contains("network.proxy"), "got: {err}");
    assert!(!store.path().expect("path").exists());
}

#[test]
fn test_set_value_rejects_out_of_range_timeout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = set_value(&store(&dir), "commands.timeout_secs", "30").expect_err("too long");
    assert!(err.to_string().contains("30"), "got: {err}");
}

#[test]
fn test_set_value_rejects_address_without_port() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(set_value(&store(&dir), "network.probe_address", "8.8.8.8").is_err());
}

#[test]
fn test_probe_settings_clamp_hand_edited_timeouts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store(&dir);
    std::fs::write(
        store.path().expect("path"),
        "network:\n  timeout_secs: 60\ncommands:\n  timeout_secs: 0\n",
    )
    .expect("write");

    let settings = load_probe_settings(&store);

    assert_eq!(settings.network_timeout, Duration::from_secs(5));
    assert_eq!(settings.command_timeout, Duration::from_secs(1));
    assert_eq!(settings.probe_address, "8.8.8.8:53");
}

#[test]
fn test_unreadable_config_falls_back_to_default_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store(&dir);
    std::fs::write(store.path().expect("path"), "network: [unclosed").expect("write");

    assert!(load_config(&store).is_err());
    assert_eq!(
        load_probe_settings(&store),
        MedicConfig::default().probe_settings()
    );
}
