//! Application service: fix dispatcher.
//!
//! Maps each issue's fix action to a remediation routine and reports one
//! [`FixOutcome`] per issue. A failing remediation never aborts the batch.

use medic_common::{FixAction, FixOutcome, FixStatus, Issue, OsFamily};

use crate::application::ports::{CommandRunner, FirewallControl};
use crate::domain::error::RemediationError;
use crate::domain::health::FirewallState;

const DISK_GUIDANCE: &[&str] = &[
    "Remove unused packages and clear package manager caches",
    "Empty the trash and delete old downloads",
    "Use a disk usage analyzer to find large files",
];

const MEMORY_GUIDANCE: &[&str] = &[
    "Close unnecessary applications",
    "Restart the system if needed",
    "Check for memory leaks in running processes",
];

const NETWORK_GUIDANCE: &[&str] = &[
    "Check physical connections",
    "Restart network adapter",
    "Check DNS settings",
    "Contact ISP if problem persists",
];

/// Dispatch remediations for `issues`, in order.
///
/// Issues without a fix action are skipped. Remediations are idempotent:
/// running the same batch twice leaves the host in the same state.
pub async fn fix(
    issues: &[Issue],
    os_family: &OsFamily,
    runner: &impl CommandRunner,
    firewall: &impl FirewallControl,
) -> Vec<FixOutcome> {
    let mut outcomes = Vec::new();
    for issue in issues {
        let Some(action) = issue.fix_action() else {
            tracing::debug!(issue = issue.id(), "no fix action, skipping");
            continue;
        };
        tracing::info!(issue = issue.id(), action = %action, "applying fix");

        let (status, message) = match dispatch(action, os_family, runner, firewall).await {
            Ok(done) => done,
            Err(e) => {
                match &e {
                    RemediationError::Failed(_) => {
                        tracing::error!(issue = issue.id(), error = %e, "remediation failed");
                    }
                    _ => tracing::warn!(issue = issue.id(), error = %e, "remediation skipped"),
                }
                (e.status(), e.to_string())
            }
        };

        outcomes.push(FixOutcome {
            issue_id: issue.id().to_string(),
            fix_action: action.clone(),
            status,
            message,
        });
    }
    outcomes
}

async fn dispatch(
    action: &FixAction,
    os_family: &OsFamily,
    runner: &impl CommandRunner,
    firewall: &impl FirewallControl,
) -> Result<(FixStatus, String), RemediationError> {
    match action {
        FixAction::CleanupDisk => cleanup_disk(os_family, runner),
        FixAction::FreeMemory => Ok(guidance("Memory cleanup suggestions", MEMORY_GUIDANCE)),
        FixAction::CheckNetwork => Ok(guidance("Network troubleshooting", NETWORK_GUIDANCE)),
        FixAction::EnableFirewall => enable_firewall(firewall).await,
        FixAction::Unknown(id) => Err(RemediationError::UnknownFixId(id.clone())),
    }
}

fn cleanup_disk(
    os_family: &OsFamily,
    runner: &impl CommandRunner,
) -> Result<(FixStatus, String), RemediationError> {
    if *os_family != OsFamily::Windows {
        return Ok(guidance("Manual disk cleanup recommended", DISK_GUIDANCE));
    }
    runner
        .launch("cleanmgr", &["/d", "C:"])
        .map_err(|e| RemediationError::Failed(format!("Failed to start disk cleanup: {e}")))?;
    tracing::info!("disk cleanup started");
    Ok((FixStatus::Launched, "Disk cleanup started".to_string()))
}

async fn enable_firewall(
    firewall: &impl FirewallControl,
) -> Result<(FixStatus, String), RemediationError> {
    // Re-probe so a second run is a no-op.
    match firewall.probe_firewall().await {
        Ok(FirewallState::Enabled) => {
            tracing::info!("firewall already enabled");
            return Ok((FixStatus::Applied, "Firewall already enabled".to_string()));
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "firewall re-probe failed, enabling anyway"),
    }
    firewall.enable_firewall().await?;
    tracing::info!("firewall enabled");
    Ok((FixStatus::Applied, "Firewall enabled".to_string()))
}

fn guidance(title: &str, steps: &[&str]) -> (FixStatus, String) {
    tracing::info!("{title}:");
    for step in steps {
        tracing::info!("  - {step}");
    }
    (FixStatus::Guidance, format!("{title}: {}", steps.join("; ")))
}
