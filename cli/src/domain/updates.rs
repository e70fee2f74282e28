//! Update-check result types and package-manager output parsing.
//!
//! Pure functions only. No I/O, no async.

use serde::{Deserialize, Serialize};

/// `dnf check-update` exit status meaning "updates are available".
pub const DNF_UPDATES_AVAILABLE_EXIT: i32 = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    UpToDate,
    UpdatesAvailable,
    Unknown,
}

/// Result of a check-only update query. Nothing is ever installed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateReport {
    /// Package manager that answered, e.g. `apt`, `dnf`, `windows-update`.
    pub manager: Option<String>,
    pub status: UpdateStatus,
    pub packages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UpdateReport {
    #[must_use]
    pub fn from_packages(manager: &str, packages: Vec<String>) -> Self {
        let status = if packages.is_empty() {
            UpdateStatus::UpToDate
        } else {
            UpdateStatus::UpdatesAvailable
        };
        Self {
            manager: Some(manager.to_string()),
            status,
            packages,
            message: None,
        }
    }

    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            manager: None,
            status: UpdateStatus::Unknown,
            packages: Vec::new(),
            message: Some(message.into()),
        }
    }
}

/// Package names from `apt list --upgradable`.
///
/// Lines look like `curl/jammy-updates 7.81.0-1ubuntu1.16 amd64 [upgradable from: ...]`;
/// the `Listing...` header and warnings carry no `/` before the first space.
#[must_use]
pub fn parse_apt_upgradable(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.starts_with("Listing") && !l.starts_with("WARNING"))
        .filter_map(|l| l.split_whitespace().next())
        .filter_map(|first| first.split_once('/').map(|(name, _)| name.to_string()))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Package names from `dnf check-update` (exit status 100).
///
/// Package lines have three columns: `name.arch version repo`. Anything else
/// (metadata banners, blank lines, the "Obsoleting Packages" block header) is skipped.
#[must_use]
pub fn parse_dnf_check_update(stdout: &str) -> Vec<String> {
    let mut packages = Vec::new();
    for line in stdout.lines() {
        if line.trim_start().starts_with("Obsoleting") {
            break;
        }
        let cols: Vec<&str> = line.split_whitespace().collect();
        if cols.len() == 3 && cols[0].contains('.') && !line.starts_with(' ') {
            let name = cols[0].rsplit_once('.').map_or(cols[0], |(n, _)| n);
            packages.push(name.to_string());
        }
    }
    packages
}

/// Update titles from the Windows Update PowerShell query, one per line.
#[must_use]
pub fn parse_windows_updates(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(ToString::to_string)
        .collect()
}
