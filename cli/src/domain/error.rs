//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use medic_common::{FixStatus, OsFamily};
use thiserror::Error;

// ── Probe errors ──────────────────────────────────────────────────────────────

/// A sub-probe could not produce a measurement.
///
/// The capability probe logs these and records the field as unknown; they
/// never escape `detect_issues`.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{probe} probe unavailable: {reason}")]
    Unavailable { probe: &'static str, reason: String },
}

impl ProbeError {
    pub fn unavailable(probe: &'static str, reason: impl ToString) -> Self {
        Self::Unavailable {
            probe,
            reason: reason.to_string(),
        }
    }
}

// ── Remediation errors ────────────────────────────────────────────────────────

/// A remediation did not succeed. Each maps to a non-success [`FixStatus`].
#[derive(Debug, Error)]
pub enum RemediationError {
    #[error("{0}")]
    Failed(String),

    #[error("{action} is not supported on {os}")]
    UnsupportedPlatform { action: String, os: OsFamily },

    #[error("Unknown fix action: {0}")]
    UnknownFixId(String),
}

impl RemediationError {
    #[must_use]
    pub fn status(&self) -> FixStatus {
        match self {
            RemediationError::Failed(_) => FixStatus::Failed,
            RemediationError::UnsupportedPlatform { .. } => FixStatus::UnsupportedPlatform,
            RemediationError::UnknownFixId(_) => FixStatus::UnknownFixId,
        }
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
