//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{MedicConfig, ProbeSettings};

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn load_config(store: &impl ConfigStore) -> Result<MedicConfig> {
    store.load()
}

/// Effective probe settings. A broken config file falls back to defaults
/// with a warning so that diagnosis still runs.
pub fn load_probe_settings(store: &impl ConfigStore) -> ProbeSettings {
    match store.load() {
        Ok(config) => config.probe_settings(),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
            ProbeSettings::default()
        }
    }
}

/// Validate and persist one `key = value` change.
///
/// # Errors
///
/// Returns an error if the key or value is invalid or the file cannot be written.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<MedicConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
