//! Probe settings stored in `~/.medic/config.yaml`.
//!
//! Pure functions only. No I/O, no async, no filesystem access.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "network.probe_address",
    "network.timeout_secs",
    "commands.timeout_secs",
];

pub const DEFAULT_PROBE_ADDRESS: &str = "8.8.8.8:53";
pub const DEFAULT_NETWORK_TIMEOUT_SECS: u64 = 3;
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 5;
/// Upper bound for every probe timeout.
pub const MAX_TIMEOUT_SECS: u64 = 5;
const MIN_TIMEOUT_SECS: u64 = 1;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MedicConfig {
    pub network: NetworkConfig,
    pub commands: CommandsConfig,
}

/// Reachability probe settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    /// `host:port` the reachability probe connects to.
    pub probe_address: String,
    /// Connect timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            probe_address: DEFAULT_PROBE_ADDRESS.to_string(),
            timeout_secs: DEFAULT_NETWORK_TIMEOUT_SECS,
        }
    }
}

/// External status-command settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CommandsConfig {
    pub timeout_secs: u64,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
        }
    }
}

/// Effective probe settings after clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub probe_address: String,
    pub network_timeout: Duration,
    pub command_timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        MedicConfig::default().probe_settings()
    }
}

impl MedicConfig {
    /// Resolve the settings the probes use. Timeouts are clamped to `1..=5` seconds.
    #[must_use]
    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            probe_address: self.network.probe_address.trim().to_string(),
            network_timeout: clamp_timeout(self.network.timeout_secs),
            command_timeout: clamp_timeout(self.commands.timeout_secs),
        }
    }

    /// Apply a validated `key = value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "network.probe_address" => self.network.probe_address = value.trim().to_string(),
            "network.timeout_secs" => self.network.timeout_secs = parse_secs(key, value)?,
            "commands.timeout_secs" => self.commands.timeout_secs = parse_secs(key, value)?,
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

fn clamp_timeout(secs: u64) -> Duration {
    Duration::from_secs(secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS))
}

fn parse_secs(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| (MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(secs))
        .ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            valid: format!("whole seconds from {MIN_TIMEOUT_SECS} to {MAX_TIMEOUT_SECS}"),
        })
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    match key {
        "network.probe_address" => {
            let valid = value
                .trim()
                .rsplit_once(':')
                .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
            if !valid {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                    valid: "host:port, e.g. 8.8.8.8:53".to_string(),
                }
                .into());
            }
        }
        "network.timeout_secs" | "commands.timeout_secs" => {
            parse_secs(key, value)?;
        }
        _ => {}
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
