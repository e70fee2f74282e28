//! `FirewallControl` implementations, one per OS family.

use std::process::Output;

use anyhow::Result;
use medic_common::OsFamily;

use crate::application::ports::{CommandRunner, FirewallControl};
use crate::domain::error::{ProbeError, RemediationError};
use crate::domain::health::FirewallState;

const NETSH_ENABLE: &[&str] = &["advfirewall", "set", "allprofiles", "state", "on"];
const UFW_ENABLE: &[&str] = &["--force", "enable"];

/// Firewall backend selected once from the detected OS family.
pub enum PlatformFirewall<R> {
    /// Windows Defender Firewall via `netsh advfirewall`.
    Netsh(R),
    /// Uncomplicated Firewall via `ufw`.
    Ufw(R),
    /// No backend for this OS family.
    Unsupported(OsFamily),
}

impl<R: CommandRunner> PlatformFirewall<R> {
    #[must_use]
    pub fn for_os(os_family: &OsFamily, runner: R) -> Self {
        match os_family {
            OsFamily::Windows => Self::Netsh(runner),
            OsFamily::Linux => Self::Ufw(runner),
            other => Self::Unsupported(other.clone()),
        }
    }
}

impl<R: CommandRunner> FirewallControl for PlatformFirewall<R> {
    async fn probe_firewall(&self) -> Result<FirewallState> {
        match self {
            Self::Netsh(runner) => {
                let output = runner
                    .run("netsh", &["advfirewall", "show", "allprofiles", "state"])
                    .await?;
                let stdout = checked_stdout("netsh", &output)?;
                Ok(parse_netsh_state(&stdout)?)
            }
            Self::Ufw(runner) => {
                let output = runner.run("ufw", &["status"]).await?;
                let stdout = checked_stdout("ufw", &output)?;
                Ok(parse_ufw_status(&stdout)?)
            }
            Self::Unsupported(os) => {
                tracing::debug!(os = %os, "no firewall backend");
                Ok(FirewallState::Unknown)
            }
        }
    }

    async fn enable_firewall(&self) -> Result<(), RemediationError> {
        let (runner, program, args) = match self {
            Self::Netsh(runner) => (runner, "netsh", NETSH_ENABLE),
            Self::Ufw(runner) => (runner, "ufw", UFW_ENABLE),
            Self::Unsupported(os) => {
                return Err(RemediationError::UnsupportedPlatform {
                    action: "enable_firewall".to_string(),
                    os: os.clone(),
                });
            }
        };
        let output = runner
            .run(program, args)
            .await
            .map_err(|e| RemediationError::Failed(format!("Failed to enable firewall: {e:#}")))?;
        if output.status.success() {
            Ok(())
        } else {
            Err(RemediationError::Failed(format!(
                "Failed to enable firewall: {program} exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

fn checked_stdout(program: &'static str, output: &Output) -> Result<String, ProbeError> {
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(ProbeError::unavailable(
            program,
            format!(
                "exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        ))
    }
}

/// Parse `netsh advfirewall show allprofiles state`.
///
/// Any profile `OFF` means disabled; every profile `ON` means enabled.
pub fn parse_netsh_state(stdout: &str) -> Result<FirewallState, ProbeError> {
    let states: Vec<String> = stdout
        .lines()
        .filter_map(|line| {
            let mut cols = line.split_whitespace();
            match (cols.next(), cols.next()) {
                (Some(key), Some(value)) if key.eq_ignore_ascii_case("state") => {
                    Some(value.to_ascii_uppercase())
                }
                _ => None,
            }
        })
        .collect();
    if states.is_empty() {
        return Err(ProbeError::unavailable("firewall", "no profile state in netsh output"));
    }
    if states.iter().any(|s| s == "OFF") {
        Ok(FirewallState::Disabled)
    } else {
        Ok(FirewallState::Enabled)
    }
}

/// Parse `ufw status`. Only the `Status:` line counts; rule lines are ignored.
pub fn parse_ufw_status(stdout: &str) -> Result<FirewallState, ProbeError> {
    let status = stdout.lines().find_map(|line| {
        line.trim()
            .strip_prefix("Status:")
            .map(|rest| rest.trim().to_ascii_lowercase())
    });
    match status.as_deref() {
        Some("active") => Ok(FirewallState::Enabled),
        Some("inactive") => Ok(FirewallState::Disabled),
        Some(other) => Err(ProbeError::unavailable(
            "firewall",
            format!("unrecognised ufw status '{other}'"),
        )),
        None => Err(ProbeError::unavailable("firewall", "no status line in ufw output")),
    }
}
