//! Health snapshot types and the pure issue classifier.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use medic_common::{Category, FixAction, Issue, OsFamily, Severity};
use serde::Serialize;

// ── Thresholds ────────────────────────────────────────────────────────────────

/// Disk usage above this percentage is a high-severity issue.
pub const DISK_CRITICAL_PERCENT: f64 = 90.0;
/// Disk usage above this percentage (and not critical) is a medium issue.
pub const DISK_WARNING_PERCENT: f64 = 80.0;
/// Memory usage above this percentage is a high-severity issue.
pub const MEMORY_CRITICAL_PERCENT: f64 = 90.0;

// ── Types ─────────────────────────────────────────────────────────────────────

/// Firewall state as reported by the platform status command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FirewallState {
    Enabled,
    Disabled,
    /// The status could not be measured on this host.
    Unknown,
}

impl FirewallState {
    /// `Some(true)` / `Some(false)` when measured, `None` when unknown.
    #[must_use]
    pub fn as_option(self) -> Option<bool> {
        match self {
            FirewallState::Enabled => Some(true),
            FirewallState::Disabled => Some(false),
            FirewallState::Unknown => None,
        }
    }
}

/// Everything one probe pass measured. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilitySnapshot {
    /// OS family the measurements were taken on.
    pub os_family: OsFamily,
    /// Percent used of the volume holding the home directory; `None` if unavailable.
    pub disk_used_percent: Option<f64>,
    /// Percent of physical memory in use; `None` if unavailable.
    pub memory_used_percent: Option<f64>,
    /// Whether the reachability probe connected within its timeout.
    pub internet_reachable: bool,
    /// Firewall state.
    pub firewall: FirewallState,
}

// ── Classifier ────────────────────────────────────────────────────────────────

/// Turn a snapshot into issues, ordered disk, memory, network, security.
///
/// Comparisons are strict: a value exactly on a threshold falls on the
/// healthier side. Unknown measurements never produce issues.
#[must_use]
pub fn classify(snapshot: &CapabilitySnapshot) -> Vec<Issue> {
    let mut issues = Vec::new();
    issues.extend(classify_disk(snapshot.disk_used_percent));
    issues.extend(classify_memory(snapshot.memory_used_percent));
    issues.extend(classify_network(snapshot.internet_reachable));
    issues.extend(classify_firewall(snapshot.firewall));
    issues
}

fn classify_disk(percent: Option<f64>) -> Option<Issue> {
    let percent = percent?;
    if percent > DISK_CRITICAL_PERCENT {
        Some(Issue::new(
            Severity::High,
            Category::Disk,
            format!("Disk space critically low ({percent:.1}% used)"),
            Some(FixAction::CleanupDisk),
        ))
    } else if percent > DISK_WARNING_PERCENT {
        Some(Issue::new(
            Severity::Medium,
            Category::Disk,
            format!("Disk space running low ({percent:.1}% used)"),
            Some(FixAction::CleanupDisk),
        ))
    } else {
        None
    }
}

fn classify_memory(percent: Option<f64>) -> Option<Issue> {
    let percent = percent?;
    (percent > MEMORY_CRITICAL_PERCENT).then(|| {
        Issue::new(
            Severity::High,
            Category::Memory,
            format!("Memory usage critically high ({percent:.1}%)"),
            Some(FixAction::FreeMemory),
        )
    })
}

fn classify_network(reachable: bool) -> Option<Issue> {
    (!reachable).then(|| {
        Issue::new(
            Severity::High,
            Category::Network,
            "No internet connectivity detected",
            Some(FixAction::CheckNetwork),
        )
    })
}

fn classify_firewall(state: FirewallState) -> Option<Issue> {
    (state == FirewallState::Disabled).then(|| {
        Issue::new(
            Severity::Medium,
            Category::Security,
            "Firewall is disabled",
            Some(FixAction::EnableFirewall),
        )
    })
}

// ── Unit tests ────────────────────────────────────────────────────────────────
