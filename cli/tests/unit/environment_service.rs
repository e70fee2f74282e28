//! Tests for the environment check workflow.

#![allow(clippy::expect_used)]

use medic_cli::application::SilentReporter;
use medic_cli::application::services::environment_check::{EnvironmentProbes, check_environment};
use medic_cli::domain::health::FirewallState;
use medic_common::{CheckRequest, OsFamily};

use crate::helpers::{err_output, ok_output, platform, settings};
use crate::mocks::{MockFirewall, MockNetwork, MockResources, MockRunner};

async fn run(
    os: OsFamily,
    request: &CheckRequest,
    runner: &MockRunner,
    resources: &MockResources,
) -> medic_cli::domain::environment::EnvironmentReport {
    let firewall = MockFirewall::new(FirewallState::Enabled);
    let probes = EnvironmentProbes {
        runner,
        resources,
        network: &MockNetwork::Reachable,
        firewall: &firewall,
    };
    check_environment(&platform(os), &settings(), request, &probes, &SilentReporter).await
}

#[tokio::test]
async fn test_resources_are_converted_and_sections_included() {
    let runner = MockRunner::new();
    let resources = MockResources::percent(50, 25);

    let report = run(OsFamily::Linux, &CheckRequest::default(), &runner, &resources).await;

    assert_eq!(report.resources.cpu_count, 8);
    assert!((report.resources.disk_percent - 50.0).abs() < f64::EPSILON);
    assert!((report.resources.memory_percent - 25.0).abs() < f64::EPSILON);
    assert!((report.system.uptime_days - 2.0).abs() < f64::EPSILON);
    let network = report.network.expect("network section");
    assert!(network.internet_reachable);
    assert_eq!(network.interfaces.len(), 1);
    assert_eq!(report.security.expect("security").firewall_enabled, Some(true));
}

#[tokio::test]
async fn test_optional_sections_can_be_skipped() {
    let runner = MockRunner::new();
    let resources = MockResources::percent(10, 10);
    let request = CheckRequest {
        verbose: false,
        include_software: false,
        include_network: false,
        include_security: false,
    };

    let report = run(OsFamily::Linux, &request, &runner, &resources).await;

    assert!(report.software.is_none());
    assert!(report.network.is_none());
    assert!(report.security.is_none());
    assert!(!runner.calls().iter().any(|c| c.starts_with("dpkg-query")));
}

#[tokio::test]
async fn test_failed_resource_probes_degrade_to_zero() {
    let runner = MockRunner::new();
    let resources = MockResources::unavailable();

    let report = run(OsFamily::Linux, &CheckRequest::default(), &runner, &resources).await;

    assert_eq!(report.resources.cpu_count, 0);
    assert!(report.resources.disk_total_gb.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_linux_software_merges_dpkg_and_rpm() {
    let runner = MockRunner::new()
        .with("dpkg-query", ok_output(b"curl\ngit\n"))
        .with("rpm", ok_output(b"git\nzlib\n"));
    let resources = MockResources::percent(10, 10);

    let report = run(OsFamily::Linux, &CheckRequest::default(), &runner, &resources).await;

    let software = report.software.expect("software section");
    assert_eq!(software.installed, vec!["curl", "git", "zlib"]);
    assert_eq!(software.count, 3);
    assert!(software.error.is_none());
}

#[tokio::test]
async fn test_software_unavailable_without_package_manager() {
    let runner = MockRunner::new();
    let resources = MockResources::percent(10, 10);

    let report = run(OsFamily::Linux, &CheckRequest::default(), &runner, &resources).await;

    let software = report.software.expect("software section");
    assert!(software.installed.is_empty());
    assert!(software.error.is_some());
}

#[tokio::test]
async fn test_software_unsupported_on_macos() {
    let runner = MockRunner::new();
    let resources = MockResources::percent(10, 10);

    let report = run(OsFamily::MacOs, &CheckRequest::default(), &runner, &resources).await;

    let software = report.software.expect("software section");
    assert!(software.error.expect("error note").contains("macos"));
}

#[tokio::test]
async fn test_dev_tools_versions_and_python_fallback() {
    let runner = MockRunner::new()
        .with("git --version", ok_output(b"git version 2.43.0\n"))
        .with("python3 --version", err_output(127, b""))
        .with("python --version", ok_output(b"Python 3.12.3\n"))
        .with(
            "java -version",
            err_output(0, b"openjdk version \"21.0.2\" 2024-01-16\n"),
        );
    let resources = MockResources::percent(10, 10);

    let report = run(OsFamily::Linux, &CheckRequest::default(), &runner, &resources).await;

    let dev = &report.development;
    assert_eq!(dev["git"].version.as_deref(), Some("git version 2.43.0"));
    assert_eq!(dev["python"].version.as_deref(), Some("Python 3.12.3"));
    assert_eq!(
        dev["java"].version.as_deref(),
        Some("openjdk version \"21.0.2\" 2024-01-16")
    );
    assert!(!dev["node"].installed);
    assert!(!dev["docker"].installed);
}

#[tokio::test]
async fn test_docker_daemon_not_running_is_noted() {
    let runner = MockRunner::new()
        .with("docker --version", ok_output(b"Docker version 27.0.3\n"))
        .with("docker info", err_output(1, b"Cannot connect to the Docker daemon"));
    let resources = MockResources::percent(10, 10);

    let report = run(OsFamily::Linux, &CheckRequest::default(), &runner, &resources).await;

    let docker = &report.development["docker"];
    assert!(docker.installed);
    assert_eq!(docker.daemon_running, Some(false));
    assert!(docker.note.is_some());
}
