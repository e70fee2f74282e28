//! Application service: check-only OS/package update query.

use std::time::Duration;

use medic_common::OsFamily;

use crate::application::ports::CommandRunner;
use crate::domain::updates::{
    DNF_UPDATES_AVAILABLE_EXIT, UpdateReport, parse_apt_upgradable, parse_dnf_check_update,
    parse_windows_updates,
};

/// Package metadata refreshes can take a while.
pub const UPDATE_TIMEOUT: Duration = Duration::from_secs(120);

const WINDOWS_UPDATE_QUERY: &str = "$s = New-Object -ComObject Microsoft.Update.Session; \
$r = $s.CreateUpdateSearcher().Search('IsInstalled=0'); \
foreach ($u in $r.Updates) { Write-Output $u.Title }";

/// Ask the platform package manager which updates are pending. Never installs.
pub async fn check_updates(os_family: &OsFamily, runner: &impl CommandRunner) -> UpdateReport {
    tracing::info!("checking for updates");
    let report = match os_family {
        OsFamily::Linux => linux_updates(runner).await,
        OsFamily::Windows => windows_updates(runner).await,
        other => UpdateReport::unknown(format!("Update check not supported on {other}")),
    };
    tracing::info!(status = ?report.status, packages = report.packages.len(), "update check finished");
    report
}

async fn linux_updates(runner: &impl CommandRunner) -> UpdateReport {
    match runner
        .run_with_timeout("apt", &["list", "--upgradable"], UPDATE_TIMEOUT)
        .await
    {
        Ok(output) if output.status.success() => {
            let packages = parse_apt_upgradable(&String::from_utf8_lossy(&output.stdout));
            return UpdateReport::from_packages("apt", packages);
        }
        Ok(output) => tracing::debug!(status = ?output.status, "apt list failed"),
        Err(e) => tracing::debug!(error = %e, "apt unavailable"),
    }

    match runner
        .run_with_timeout("dnf", &["check-update", "--quiet"], UPDATE_TIMEOUT)
        .await
    {
        Ok(output) => match output.status.code() {
            Some(0) => UpdateReport::from_packages("dnf", Vec::new()),
            Some(DNF_UPDATES_AVAILABLE_EXIT) => UpdateReport::from_packages(
                "dnf",
                parse_dnf_check_update(&String::from_utf8_lossy(&output.stdout)),
            ),
            _ => {
                tracing::warn!(status = ?output.status, "dnf check-update failed");
                UpdateReport::unknown("Could not determine update status")
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "no supported package manager found");
            UpdateReport::unknown("Could not determine update status")
        }
    }
}

async fn windows_updates(runner: &impl CommandRunner) -> UpdateReport {
    match runner
        .run_with_timeout(
            "powershell",
            &["-NoProfile", "-Command", WINDOWS_UPDATE_QUERY],
            UPDATE_TIMEOUT,
        )
        .await
    {
        Ok(output) if output.status.success() => UpdateReport::from_packages(
            "windows-update",
            parse_windows_updates(&String::from_utf8_lossy(&output.stdout)),
        ),
        Ok(output) => {
            tracing::warn!(status = ?output.status, "Windows Update query failed");
            UpdateReport::unknown("Windows Update query failed")
        }
        Err(e) => {
            tracing::warn!(error = %e, "Windows Update query unavailable");
            UpdateReport::unknown("Windows Update query unavailable")
        }
    }
}
