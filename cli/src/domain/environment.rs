//! Environment report types and the development-readiness summary derived
//! from them.
//!
//! Pure functions only. No I/O, no async.

use std::collections::BTreeMap;

use medic_common::PlatformInfo;
use serde::{Deserialize, Serialize};

/// Tools probed for the development section, in report order.
pub const DEV_TOOLS: &[&str] = &["git", "python", "node", "docker", "java"];
/// Tools without which the host is reported as missing essentials.
pub const ESSENTIAL_TOOLS: &[&str] = &["python", "git"];

// ── Environment report ────────────────────────────────────────────────────────

/// Full result of `check`.
///
/// Sections switched off by the request are `None` and omitted from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentReport {
    pub system: SystemSection,
    pub resources: ResourceSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<SoftwareSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecuritySection>,
    pub development: BTreeMap<String, ToolStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSection {
    #[serde(flatten)]
    pub platform: PlatformInfo,
    pub uptime_days: f64,
}

/// Resource figures. Zero means the figure was unavailable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceSection {
    pub cpu_count: usize,
    pub cpu_percent: f64,
    pub memory_total_gb: f64,
    pub memory_available_gb: f64,
    pub memory_percent: f64,
    pub disk_total_gb: f64,
    pub disk_free_gb: f64,
    pub disk_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoftwareSection {
    pub installed: Vec<String>,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SoftwareSection {
    /// Sorted, de-duplicated package list.
    #[must_use]
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        let mut installed: Vec<String> = names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        installed.sort();
        installed.dedup();
        Self {
            count: installed.len(),
            installed,
            error: None,
        }
    }

    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            installed: Vec::new(),
            count: 0,
            error: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkSection {
    /// Interface name to MAC address.
    pub interfaces: BTreeMap<String, String>,
    pub internet_reachable: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecuritySection {
    /// `None` when the firewall state could not be measured.
    pub firewall_enabled: Option<bool>,
}

/// One development tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolStatus {
    pub installed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Only probed for docker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daemon_running: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ToolStatus {
    #[must_use]
    pub fn missing() -> Self {
        Self::default()
    }

    /// Installed tool; `output` is the first non-empty line of the version
    /// command (java prints to stderr, so callers pass whichever stream had text).
    #[must_use]
    pub fn installed(output: &str) -> Self {
        Self {
            installed: true,
            version: first_line(output),
            daemon_running: None,
            note: None,
        }
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(ToString::to_string)
}

// ── Development info ──────────────────────────────────────────────────────────

/// Coarse usage band for memory and disk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UsageStatus {
    Excellent,
    Good,
    Warning,
    Critical,
}

#[must_use]
pub fn memory_status(percent: f64) -> UsageStatus {
    if percent < 50.0 {
        UsageStatus::Excellent
    } else if percent < 75.0 {
        UsageStatus::Good
    } else if percent < 90.0 {
        UsageStatus::Warning
    } else {
        UsageStatus::Critical
    }
}

#[must_use]
pub fn disk_status(percent: f64) -> UsageStatus {
    if percent < 50.0 {
        UsageStatus::Excellent
    } else if percent < 80.0 {
        UsageStatus::Good
    } else if percent < 90.0 {
        UsageStatus::Warning
    } else {
        UsageStatus::Critical
    }
}

/// Result of `mcp.get_dev_info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevInfo {
    pub system: PlatformInfo,
    pub specs: Specs,
    pub development_tools: BTreeMap<String, ToolStatus>,
    pub readiness: Readiness,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specs {
    pub cpu: CpuSpec,
    pub memory: UsageSpec,
    pub disk: UsageSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuSpec {
    pub cores: usize,
    pub usage_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSpec {
    pub total_gb: f64,
    /// Available memory, or free disk space.
    pub available_gb: f64,
    pub used_percent: f64,
    pub status: UsageStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Readiness {
    pub development_ready: bool,
    pub missing_tools: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Summarise an environment report for developers.
#[must_use]
pub fn dev_info(report: &EnvironmentReport) -> DevInfo {
    let r = &report.resources;
    DevInfo {
        system: report.system.platform.clone(),
        specs: Specs {
            cpu: CpuSpec {
                cores: r.cpu_count,
                usage_percent: r.cpu_percent,
            },
            memory: UsageSpec {
                total_gb: round2(r.memory_total_gb),
                available_gb: round2(r.memory_available_gb),
                used_percent: r.memory_percent,
                status: memory_status(r.memory_percent),
            },
            disk: UsageSpec {
                total_gb: round2(r.disk_total_gb),
                available_gb: round2(r.disk_free_gb),
                used_percent: r.disk_percent,
                status: disk_status(r.disk_percent),
            },
        },
        development_tools: report.development.clone(),
        readiness: readiness(&report.development, r),
    }
}

/// Readiness verdict: ready when python is installed.
#[must_use]
pub fn readiness(tools: &BTreeMap<String, ToolStatus>, resources: &ResourceSection) -> Readiness {
    let installed = |name: &str| tools.get(name).is_some_and(|t| t.installed);

    let missing_tools = ESSENTIAL_TOOLS
        .iter()
        .filter(|t| !installed(t))
        .map(ToString::to_string)
        .collect();

    let mut recommendations = Vec::new();
    if !installed("git") {
        recommendations.push("Install Git for version control".to_string());
    }
    match tools.get("docker") {
        Some(docker) if docker.installed => {
            if docker.daemon_running == Some(false) {
                recommendations.push("Start the Docker daemon".to_string());
            }
        }
        _ => recommendations.push("Install Docker for containerization".to_string()),
    }
    if resources.memory_percent > 85.0 {
        recommendations
            .push("Memory usage is high, consider closing unnecessary applications".to_string());
    }
    if resources.disk_percent > 80.0 {
        recommendations.push("Disk space is running low, consider cleanup".to_string());
    }

    Readiness {
        development_ready: installed("python"),
        missing_tools,
        recommendations,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
