//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::config::MedicConfig;
use crate::domain::error::RemediationError;
use crate::domain::health::FirewallState;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Capacity and free space of one volume, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeUsage {
    pub total_bytes: u64,
    pub available_bytes: u64,
}

impl VolumeUsage {
    /// Percent used, or `None` for a zero-sized volume.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn used_percent(self) -> Option<f64> {
        if self.total_bytes == 0 {
            return None;
        }
        let used = self.total_bytes.saturating_sub(self.available_bytes);
        Some(used as f64 / self.total_bytes as f64 * 100.0)
    }
}

/// Physical memory figures, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
}

impl MemoryUsage {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn used_percent(self) -> Option<f64> {
        (self.total_bytes > 0).then(|| self.used_bytes as f64 / self.total_bytes as f64 * 100.0)
    }
}

/// CPU count and global utilisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuUsage {
    pub count: usize,
    pub percent: f64,
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
    /// Start a program and return without waiting for it. The child outlives
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn launch(&self, program: &str, args: &[&str]) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Probe Ports ───────────────────────────────────────────────────────────────

/// Abstracts network connectivity checks so application services can be tested
/// without real network access.
#[allow(async_fn_in_trait)]
pub trait NetworkProbe {
    /// Try a TCP connection to `address` (`host:port`).
    ///
    /// Returns `Ok(false)` on refusal, timeout, or resolution failure; `Err`
    /// only when the probe itself could not run.
    async fn check_tcp_connectivity(&self, address: &str, timeout: Duration) -> Result<bool>;
}

/// Abstracts host resource measurement.
#[allow(async_fn_in_trait)]
pub trait ResourceProbe {
    /// Usage of the volume holding the current user's home directory.
    async fn home_volume(&self) -> Result<VolumeUsage>;
    /// System-wide physical memory.
    async fn memory(&self) -> Result<MemoryUsage>;
    /// CPU count and utilisation sampled over a short interval.
    async fn cpu(&self) -> Result<CpuUsage>;
    /// Network interface name to MAC address.
    async fn interfaces(&self) -> Result<BTreeMap<String, String>>;
    /// Seconds since boot.
    fn uptime_secs(&self) -> u64;
}

/// Firewall inspection and remediation for one OS family.
#[allow(async_fn_in_trait)]
pub trait FirewallControl {
    /// Current firewall state. `Unknown` on platforms without a backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the status command fails or its output cannot be read.
    async fn probe_firewall(&self) -> Result<FirewallState>;

    /// Turn the firewall on.
    ///
    /// # Errors
    ///
    /// Returns [`RemediationError::UnsupportedPlatform`] when there is no
    /// backend, [`RemediationError::Failed`] when the enable command fails.
    async fn enable_firewall(&self) -> std::result::Result<(), RemediationError>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts config persistence (load/save).
pub trait ConfigStore {
    /// Load config, returning defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<MedicConfig>;
    /// Persist config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &MedicConfig) -> Result<()>;
    /// Location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
