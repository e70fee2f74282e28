//! The `Assistant` context object.
//!
//! Owns the platform facts detected at startup, the effective probe
//! settings, and the injected ports. Every transport (CLI, REST, JSON-RPC)
//! calls the same methods here and only translates request shapes.

use medic_common::{
    CheckRequest, DiagnoseRequest, DiagnoseResponse, FixRequest, FixResponse, Issue, PlatformInfo,
};

use crate::application::ports::{
    CommandRunner, FirewallControl, NetworkProbe, ProgressReporter, ResourceProbe,
};
use crate::application::services::environment_check::{self, EnvironmentProbes};
use crate::application::services::{capability_probe, remediation, update_check};
use crate::domain::config::ProbeSettings;
use crate::domain::environment::{self, DevInfo, EnvironmentReport};
use crate::domain::health::{CapabilitySnapshot, classify};
use crate::domain::issues::{filter_by_category, filter_by_id};
use crate::domain::updates::UpdateReport;

/// Reporter that discards progress events. Used where no terminal is attached.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

pub struct Assistant<C, R, N, F> {
    platform: PlatformInfo,
    settings: ProbeSettings,
    runner: C,
    resources: R,
    network: N,
    firewall: F,
}

impl<C, R, N, F> Assistant<C, R, N, F>
where
    C: CommandRunner,
    R: ResourceProbe,
    N: NetworkProbe,
    F: FirewallControl,
{
    #[must_use]
    pub fn new(
        platform: PlatformInfo,
        settings: ProbeSettings,
        runner: C,
        resources: R,
        network: N,
        firewall: F,
    ) -> Self {
        Self {
            platform,
            settings,
            runner,
            resources,
            network,
            firewall,
        }
    }

    #[must_use]
    pub fn platform(&self) -> &PlatformInfo {
        &self.platform
    }

    #[must_use]
    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    /// Measure the live system.
    pub async fn snapshot(&self) -> CapabilitySnapshot {
        capability_probe::measure(
            &self.platform.os_family,
            &self.settings,
            &self.resources,
            &self.network,
            &self.firewall,
        )
        .await
    }

    /// Probe and classify. Never fails; unknown measurements yield no issues.
    pub async fn detect_issues(&self) -> Vec<Issue> {
        let issues = classify(&self.snapshot().await);
        tracing::info!(count = issues.len(), "issue detection finished");
        issues
    }

    /// Run remediations for `issues` and summarise the outcomes.
    pub async fn fix_issues(&self, issues: Vec<Issue>) -> FixResponse {
        let outcomes = remediation::fix(
            &issues,
            &self.platform.os_family,
            &self.runner,
            &self.firewall,
        )
        .await;
        FixResponse::new(issues, outcomes)
    }

    /// Detect, then keep only the requested categories.
    pub async fn diagnose(&self, request: &DiagnoseRequest) -> DiagnoseResponse {
        let issues = self.detect_issues().await;
        DiagnoseResponse::new(filter_by_category(issues, request.categories.as_deref()))
    }

    /// Detect, keep the requested ids, and fix them unless `auto_fix` is off.
    pub async fn fix(&self, request: &FixRequest) -> FixResponse {
        let issues = filter_by_id(self.detect_issues().await, request.issue_ids.as_deref());
        if request.auto_fix {
            self.fix_issues(issues).await
        } else {
            FixResponse::new(issues, Vec::new())
        }
    }

    pub async fn check_environment(
        &self,
        request: &CheckRequest,
        reporter: &impl ProgressReporter,
    ) -> EnvironmentReport {
        let probes = EnvironmentProbes {
            runner: &self.runner,
            resources: &self.resources,
            network: &self.network,
            firewall: &self.firewall,
        };
        environment_check::check_environment(
            &self.platform,
            &self.settings,
            request,
            &probes,
            reporter,
        )
        .await
    }

    /// Development-focused summary of a full environment check.
    pub async fn dev_info(&self) -> DevInfo {
        let request = CheckRequest {
            include_software: false,
            include_network: false,
            include_security: false,
            ..CheckRequest::default()
        };
        let report = self.check_environment(&request, &SilentReporter).await;
        environment::dev_info(&report)
    }

    pub async fn check_updates(&self) -> UpdateReport {
        update_check::check_updates(&self.platform.os_family, &self.runner).await
    }
}
