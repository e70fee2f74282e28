use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How urgently an issue needs attention. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Report grouping order, most urgent first.
    pub const DESCENDING: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Area of the host an issue belongs to.
///
/// Unrecognised names survive a round-trip through `Other` so that callers
/// filtering on categories this build does not know about still work.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Disk,
    Memory,
    Network,
    Security,
    Other(String),
}

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Disk => "disk",
            Category::Memory => "memory",
            Category::Network => "network",
            Category::Security => "security",
            Category::Other(name) => name,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "disk" => Category::Disk,
            "memory" => Category::Memory,
            "network" => Category::Network,
            "security" => Category::Security,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remediation identifiers understood by the fix dispatcher.
///
/// `Unknown` carries ids received from callers that no remediation is
/// registered for; dispatching one reports `unknown_fix_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FixAction {
    CleanupDisk,
    FreeMemory,
    CheckNetwork,
    EnableFirewall,
    Unknown(String),
}

impl FixAction {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            FixAction::CleanupDisk => "cleanup_disk",
            FixAction::FreeMemory => "free_memory",
            FixAction::CheckNetwork => "check_network",
            FixAction::EnableFirewall => "enable_firewall",
            FixAction::Unknown(id) => id,
        }
    }
}

impl From<&str> for FixAction {
    fn from(value: &str) -> Self {
        match value {
            "cleanup_disk" => FixAction::CleanupDisk,
            "free_memory" => FixAction::FreeMemory,
            "check_network" => FixAction::CheckNetwork,
            "enable_firewall" => FixAction::EnableFirewall,
            other => FixAction::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FixAction {
    fn from(value: String) -> Self {
        FixAction::from(value.as_str())
    }
}

impl From<FixAction> for String {
    fn from(value: FixAction) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for FixAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifier for an issue: `category:fix_action`, or just the
/// category when there is no automated fix.
#[must_use]
pub fn issue_id(category: &Category, fix_action: Option<&FixAction>) -> String {
    match fix_action {
        Some(fix) => format!("{category}:{fix}"),
        None => category.to_string(),
    }
}

/// A detected deviation from a healthy threshold.
///
/// The description embeds the measurement taken at detection time; it is
/// never recomputed when the issue is later fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    id: String,
    severity: Severity,
    category: Category,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fix_action: Option<FixAction>,
}

impl Issue {
    #[must_use]
    pub fn new(
        severity: Severity,
        category: Category,
        description: impl Into<String>,
        fix_action: Option<FixAction>,
    ) -> Self {
        Self {
            id: issue_id(&category, fix_action.as_ref()),
            severity,
            category,
            description: description.into(),
            fix_action,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn fix_action(&self) -> Option<&FixAction> {
        self.fix_action.as_ref()
    }
}

/// Result of dispatching one remediation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FixStatus {
    /// Host state was changed, or was already in the desired state.
    Applied,
    /// An interactive tool was started and left running.
    Launched,
    /// Nothing automatable; guidance was logged.
    Guidance,
    UnsupportedPlatform,
    Failed,
    UnknownFixId,
}

impl FixStatus {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(
            self,
            FixStatus::Applied | FixStatus::Launched | FixStatus::Guidance
        )
    }
}

/// Per-issue outcome reported by the fix dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixOutcome {
    pub issue_id: String,
    pub fix_action: FixAction,
    pub status: FixStatus,
    pub message: String,
}

/// Operating system family the process runs on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OsFamily {
    Windows,
    Linux,
    MacOs,
    Other(String),
}

impl OsFamily {
    /// The family this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        OsFamily::from(std::env::consts::OS)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            OsFamily::Windows => "windows",
            OsFamily::Linux => "linux",
            OsFamily::MacOs => "macos",
            OsFamily::Other(name) => name,
        }
    }
}

impl From<&str> for OsFamily {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "windows" => OsFamily::Windows,
            "linux" => OsFamily::Linux,
            "macos" | "darwin" => OsFamily::MacOs,
            other => OsFamily::Other(other.to_string()),
        }
    }
}

impl From<String> for OsFamily {
    fn from(value: String) -> Self {
        OsFamily::from(value.as_str())
    }
}

impl From<OsFamily> for String {
    fn from(value: OsFamily) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static facts about the host, detected once per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub os_family: OsFamily,
    /// Long OS version, e.g. `"Linux 24.04 Ubuntu"`.
    pub version: String,
    /// Kernel release.
    pub release: String,
    pub architecture: String,
    pub hostname: String,
}

impl PlatformInfo {
    /// Facts for the given family with every other field `"unknown"`.
    #[must_use]
    pub fn unknown(os_family: OsFamily) -> Self {
        Self {
            os_family,
            version: "unknown".to_string(),
            release: "unknown".to_string(),
            architecture: std::env::consts::ARCH.to_string(),
            hostname: "unknown".to_string(),
        }
    }
}
