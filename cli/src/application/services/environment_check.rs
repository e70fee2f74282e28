//! Application service: environment check.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Every section degrades to defaults when its probe fails.

use std::collections::BTreeMap;
use std::time::Duration;

use medic_common::{CheckRequest, OsFamily, PlatformInfo};

use crate::application::ports::{
    CommandRunner, FirewallControl, NetworkProbe, ProgressReporter, ResourceProbe,
};
use crate::domain::config::ProbeSettings;
use crate::domain::environment::{
    DEV_TOOLS, EnvironmentReport, NetworkSection, ResourceSection, SecuritySection,
    SoftwareSection, SystemSection, ToolStatus,
};

/// Package listings can be slow on hosts with thousands of packages.
pub const SOFTWARE_TIMEOUT: Duration = Duration::from_secs(30);
pub const TOOL_TIMEOUT: Duration = Duration::from_secs(5);

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;
const SECS_PER_DAY: f64 = 86_400.0;

const WINDOWS_SOFTWARE_QUERY: &str = "Get-ItemProperty HKLM:\\Software\\Microsoft\\Windows\\CurrentVersion\\Uninstall\\*, \
HKLM:\\Software\\WOW6432Node\\Microsoft\\Windows\\CurrentVersion\\Uninstall\\* \
| Where-Object { $_.DisplayName } | ForEach-Object { $_.DisplayName }";

/// Ports the environment check reads from.
pub struct EnvironmentProbes<'a, C, R, N, F> {
    pub runner: &'a C,
    pub resources: &'a R,
    pub network: &'a N,
    pub firewall: &'a F,
}

/// Run the environment check workflow.
pub async fn check_environment<C, R, N, F>(
    platform: &PlatformInfo,
    settings: &ProbeSettings,
    request: &CheckRequest,
    probes: &EnvironmentProbes<'_, C, R, N, F>,
    reporter: &impl ProgressReporter,
) -> EnvironmentReport
where
    C: CommandRunner,
    R: ResourceProbe,
    N: NetworkProbe,
    F: FirewallControl,
{
    tracing::info!("starting environment check");

    reporter.step("checking system...");
    #[allow(clippy::cast_precision_loss)]
    let system = SystemSection {
        platform: platform.clone(),
        uptime_days: probes.resources.uptime_secs() as f64 / SECS_PER_DAY,
    };

    reporter.step("checking resources...");
    let resources = check_resources(probes.resources).await;

    let software = if request.include_software {
        reporter.step("checking installed software...");
        Some(check_software(&platform.os_family, probes.runner).await)
    } else {
        None
    };

    let network = if request.include_network {
        reporter.step("checking network...");
        Some(check_network(probes.resources, probes.network, settings).await)
    } else {
        None
    };

    let security = if request.include_security {
        reporter.step("checking security...");
        Some(check_security(probes.firewall).await)
    } else {
        None
    };

    reporter.step("checking development tools...");
    let development = check_development_tools(probes.runner).await;

    reporter.success("environment check complete");
    tracing::info!("environment check completed");
    if request.verbose {
        tracing::info!(
            cpu_percent = resources.cpu_percent,
            memory_percent = resources.memory_percent,
            disk_percent = resources.disk_percent,
            packages = software.as_ref().map(|s| s.count),
            tools_installed = development.values().filter(|t| t.installed).count(),
            "environment summary",
        );
    }

    EnvironmentReport {
        system,
        resources,
        software,
        network,
        security,
        development,
    }
}

// ── Internal probes ───────────────────────────────────────────────────────────

#[allow(clippy::cast_precision_loss)]
async fn check_resources(resources: &impl ResourceProbe) -> ResourceSection {
    let mut section = ResourceSection::default();

    match resources.cpu().await {
        Ok(cpu) => {
            section.cpu_count = cpu.count;
            section.cpu_percent = cpu.percent;
        }
        Err(e) => tracing::warn!(error = %e, "cpu probe unavailable"),
    }

    match resources.memory().await {
        Ok(memory) => {
            section.memory_total_gb = memory.total_bytes as f64 / BYTES_PER_GB;
            section.memory_available_gb = memory.available_bytes as f64 / BYTES_PER_GB;
            section.memory_percent = memory.used_percent().unwrap_or_default();
        }
        Err(e) => tracing::warn!(error = %e, "memory probe unavailable"),
    }

    match resources.home_volume().await {
        Ok(volume) => {
            section.disk_total_gb = volume.total_bytes as f64 / BYTES_PER_GB;
            section.disk_free_gb = volume.available_bytes as f64 / BYTES_PER_GB;
            section.disk_percent = volume.used_percent().unwrap_or_default();
        }
        Err(e) => tracing::warn!(error = %e, "disk probe unavailable"),
    }

    section
}

async fn check_software(os_family: &OsFamily, runner: &impl CommandRunner) -> SoftwareSection {
    match os_family {
        OsFamily::Linux => linux_software(runner).await,
        OsFamily::Windows => {
            match run_lines(runner, "powershell", &["-NoProfile", "-Command", WINDOWS_SOFTWARE_QUERY])
                .await
            {
                Some(names) => SoftwareSection::from_names(names),
                None => SoftwareSection::unavailable("Could not query installed software"),
            }
        }
        other => SoftwareSection::unavailable(format!("Software inventory not supported on {other}")),
    }
}

async fn linux_software(runner: &impl CommandRunner) -> SoftwareSection {
    let mut names = Vec::new();
    let mut answered = false;
    if let Some(lines) = run_lines(runner, "dpkg-query", &["-W", "-f=${Package}\\n"]).await {
        names.extend(lines);
        answered = true;
    }
    if let Some(lines) = run_lines(runner, "rpm", &["-qa", "--qf", "%{NAME}\\n"]).await {
        names.extend(lines);
        answered = true;
    }
    if answered {
        SoftwareSection::from_names(names)
    } else {
        SoftwareSection::unavailable("Neither dpkg nor rpm is available")
    }
}

/// Stdout lines of a successful command, `None` if it failed or is missing.
async fn run_lines(runner: &impl CommandRunner, program: &str, args: &[&str]) -> Option<Vec<String>> {
    match runner.run_with_timeout(program, args, SOFTWARE_TIMEOUT).await {
        Ok(output) if output.status.success() => Some(
            String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(ToString::to_string)
                .collect(),
        ),
        Ok(output) => {
            tracing::debug!(program, status = ?output.status, "software listing failed");
            None
        }
        Err(e) => {
            tracing::debug!(program, error = %e, "software listing unavailable");
            None
        }
    }
}

async fn check_network(
    resources: &impl ResourceProbe,
    network: &impl NetworkProbe,
    settings: &ProbeSettings,
) -> NetworkSection {
    let interfaces = resources.interfaces().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "interface listing unavailable");
        BTreeMap::new()
    });
    let internet_reachable = network
        .check_tcp_connectivity(&settings.probe_address, settings.network_timeout)
        .await
        .unwrap_or(false);
    NetworkSection {
        interfaces,
        internet_reachable,
    }
}

async fn check_security(firewall: &impl FirewallControl) -> SecuritySection {
    let firewall_enabled = match firewall.probe_firewall().await {
        Ok(state) => state.as_option(),
        Err(e) => {
            tracing::warn!(error = %e, "firewall probe unavailable");
            None
        }
    };
    SecuritySection { firewall_enabled }
}

async fn check_development_tools(runner: &impl CommandRunner) -> BTreeMap<String, ToolStatus> {
    let mut tools = BTreeMap::new();
    for &tool in DEV_TOOLS {
        let mut status = probe_tool(runner, tool).await;
        if tool == "docker" && status.installed {
            let running = matches!(
                runner.run_with_timeout("docker", &["info"], TOOL_TIMEOUT).await,
                Ok(output) if output.status.success()
            );
            status.daemon_running = Some(running);
            if !running {
                status.note = Some("Docker installed but daemon not running".to_string());
            }
        }
        tools.insert(tool.to_string(), status);
    }
    tools
}

/// Version commands tried in order; the first that succeeds wins.
fn version_commands(tool: &str) -> &'static [(&'static str, &'static [&'static str])] {
    match tool {
        "git" => &[("git", &["--version"])],
        "python" => &[("python3", &["--version"]), ("python", &["--version"])],
        "node" => &[("node", &["--version"])],
        "docker" => &[("docker", &["--version"])],
        "java" => &[("java", &["-version"])],
        _ => &[],
    }
}

async fn probe_tool(runner: &impl CommandRunner, tool: &str) -> ToolStatus {
    for (program, args) in version_commands(tool) {
        let output = match runner.run_with_timeout(program, args, TOOL_TIMEOUT).await {
            Ok(output) if output.status.success() => output,
            _ => continue,
        };
        let stdout = String::from_utf8_lossy(&output.stdout);
        let text = if stdout.trim().is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            stdout.into_owned()
        };
        return ToolStatus::installed(&text);
    }
    ToolStatus::missing()
}
