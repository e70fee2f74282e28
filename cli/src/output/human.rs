//! Human-readable terminal renderer.

use std::fmt::Write as _;
use std::path::Path;

use medic_common::{FixResponse, FixStatus, Issue};
use owo_colors::OwoColorize as _;

use crate::domain::config::MedicConfig;
use crate::domain::environment::{EnvironmentReport, ToolStatus};
use crate::domain::report::{NO_ISSUES_MESSAGE, render_report_with};
use crate::domain::updates::{UpdateReport, UpdateStatus};
use crate::infra::config::CONFIG_ENV;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("medic {version}");
    }

    /// Render the issue report.
    ///
    /// Printed even when `quiet` is set: the report is the command's result.
    pub fn render_issues(&self, issues: &[Issue]) {
        print!("{}", render_report_with(issues, &self.ctx.styles));
    }

    /// Render the per-issue outcomes of a fix run.
    pub fn render_fix(&self, response: &FixResponse) {
        if response.issues.is_empty() {
            self.ctx.success(NO_ISSUES_MESSAGE);
            return;
        }
        if response.outcomes.is_empty() {
            self.ctx
                .info(&format!("{} issues detected, none fixed", response.issues.len()));
            return;
        }

        for outcome in &response.outcomes {
            let line = format!(
                "{}: {} ({})",
                outcome.fix_action,
                outcome.message,
                fix_status_display(outcome.status)
            );
            if outcome.status.is_success() {
                self.ctx.success(&line);
            } else {
                self.ctx.error(&line);
            }
        }

        if !self.ctx.quiet {
            println!();
            let succeeded = response
                .outcomes
                .iter()
                .filter(|o| o.status.is_success())
                .count();
            println!(
                "  {succeeded} of {} fixes succeeded for {} issues",
                response.outcomes.len(),
                response.issues_fixed
            );
        }
    }

    /// Render an environment report.
    pub fn render_environment(&self, report: &EnvironmentReport) {
        let platform = &report.system.platform;
        let res = &report.resources;

        println!();
        println!("  {}", "System".style(self.ctx.styles.header));
        println!("  {:<20} {}", "OS:", platform.os_family);
        println!("  {:<20} {}", "Version:", platform.version);
        println!("  {:<20} {}", "Kernel:", platform.release);
        println!("  {:<20} {}", "Architecture:", platform.architecture);
        println!("  {:<20} {}", "Hostname:", platform.hostname);
        println!("  {:<20} {:.1} days", "Uptime:", report.system.uptime_days);

        println!();
        println!("  {}", "Resources".style(self.ctx.styles.header));
        println!(
            "  {:<20} {} cores, {:.1}% used",
            "CPU:", res.cpu_count, res.cpu_percent
        );
        println!(
            "  {:<20} {:.2} GB free of {:.2} GB ({:.1}% used)",
            "Memory:", res.memory_available_gb, res.memory_total_gb, res.memory_percent
        );
        println!(
            "  {:<20} {:.2} GB free of {:.2} GB ({:.1}% used)",
            "Disk:", res.disk_free_gb, res.disk_total_gb, res.disk_percent
        );

        if let Some(software) = &report.software {
            println!();
            println!("  {}", "Software".style(self.ctx.styles.header));
            match &software.error {
                Some(err) => self.ctx.warn(err),
                None => println!("  {:<20} {}", "Installed:", software.count),
            }
        }

        if let Some(network) = &report.network {
            println!();
            println!("  {}", "Network".style(self.ctx.styles.header));
            for (name, mac) in &network.interfaces {
                println!("  {:<20} {mac}", format!("{name}:"));
            }
            self.print_check(network.internet_reachable, "Internet connectivity");
        }

        if let Some(security) = &report.security {
            println!();
            println!("  {}", "Security".style(self.ctx.styles.header));
            match security.firewall_enabled {
                Some(enabled) => self.print_check(enabled, "Firewall enabled"),
                None => println!(
                    "    {} firewall state unknown",
                    "?".style(self.ctx.styles.warning)
                ),
            }
        }

        println!();
        println!("  {}", "Development".style(self.ctx.styles.header));
        for (name, tool) in &report.development {
            self.print_check(tool.installed, &format_tool_line(name, tool));
        }
        println!();
    }

    /// Render a check-only update report.
    pub fn render_updates(&self, report: &UpdateReport) {
        let manager = report.manager.as_deref().unwrap_or("unknown");
        match report.status {
            UpdateStatus::UpToDate => self.ctx.success(&format!("System up to date ({manager})")),
            UpdateStatus::UpdatesAvailable => {
                self.ctx.warn(&format!(
                    "{} updates available ({manager})",
                    report.packages.len()
                ));
                if !self.ctx.quiet {
                    for package in &report.packages {
                        println!("    {package}");
                    }
                }
            }
            UpdateStatus::Unknown => self.ctx.warn(
                report
                    .message
                    .as_deref()
                    .unwrap_or("Update status unknown"),
            ),
        }
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &MedicConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!(
            "  {:<24} {}",
            "network.probe_address:", config.network.probe_address
        );
        println!(
            "  {:<24} {}",
            "network.timeout_secs:", config.network.timeout_secs
        );
        println!(
            "  {:<24} {}",
            "commands.timeout_secs:", config.commands.timeout_secs
        );
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<18} {}",
            format!("{CONFIG_ENV}:"),
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "NO_COLOR:",
            std::env::var("NO_COLOR").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!();
    }

    fn print_check(&self, ok: bool, msg: &str) {
        if ok {
            println!("    {} {msg}", "\u{2713}".style(self.ctx.styles.success));
        } else {
            println!("    {} {msg}", "\u{2717}".style(self.ctx.styles.error));
        }
    }
}

#[must_use]
pub fn fix_status_display(status: FixStatus) -> &'static str {
    match status {
        FixStatus::Applied => "applied",
        FixStatus::Launched => "launched",
        FixStatus::Guidance => "guidance",
        FixStatus::UnsupportedPlatform => "unsupported platform",
        FixStatus::Failed => "failed",
        FixStatus::UnknownFixId => "unknown fix",
    }
}

#[must_use]
pub fn format_tool_line(name: &str, tool: &ToolStatus) -> String {
    if !tool.installed {
        return format!("{name} not installed");
    }
    let mut line = match &tool.version {
        Some(version) => format!("{name}: {version}"),
        None => name.to_string(),
    };
    if let Some(note) = &tool.note {
        let _ = write!(line, " ({note})");
    }
    line
}
