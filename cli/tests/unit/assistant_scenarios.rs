//! End-to-end scenarios through `Assistant` with every port mocked.

#![allow(clippy::expect_used)]

use medic_cli::application::Assistant;
use medic_cli::domain::health::FirewallState;
use medic_cli::domain::report::{NO_ISSUES_MESSAGE, render_report};
use medic_common::{
    Category, DiagnoseRequest, FixAction, FixRequest, FixStatus, OsFamily, Severity,
};

use crate::helpers::{platform, settings};
use crate::mocks::{MockFirewall, MockNetwork, MockResources, MockRunner};

type TestAssistant = Assistant<MockRunner, MockResources, MockNetwork, MockFirewall>;

fn assistant(
    resources: MockResources,
    network: MockNetwork,
    firewall: FirewallState,
) -> TestAssistant {
    Assistant::new(
        platform(OsFamily::Linux),
        settings(),
        MockRunner::new(),
        resources,
        network,
        MockFirewall::new(firewall),
    )
}

/// Disk at 95%, memory at 40%, network reachable, firewall off.
fn full_disk_host() -> TestAssistant {
    assistant(
        MockResources::percent(95, 40),
        MockNetwork::Reachable,
        FirewallState::Disabled,
    )
}

fn healthy_host() -> TestAssistant {
    assistant(
        MockResources::percent(10, 20),
        MockNetwork::Reachable,
        FirewallState::Enabled,
    )
}

#[tokio::test]
async fn test_full_disk_and_firewall_off_yields_two_issues_in_order() {
    let issues = full_disk_host().detect_issues().await;

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].category(), &Category::Disk);
    assert_eq!(issues[0].severity(), Severity::High);
    assert_eq!(issues[0].fix_action(), Some(&FixAction::CleanupDisk));
    assert!(issues[0].description().contains("95.0%"));
    assert_eq!(issues[1].category(), &Category::Security);
    assert_eq!(issues[1].severity(), Severity::Medium);
    assert_eq!(issues[1].fix_action(), Some(&FixAction::EnableFirewall));
}

#[tokio::test]
async fn test_healthy_host_yields_no_issues() {
    let issues = healthy_host().detect_issues().await;

    assert!(issues.is_empty());
    assert!(render_report(&issues).contains(NO_ISSUES_MESSAGE));
}

#[tokio::test]
async fn test_unknown_measurements_yield_no_issues() {
    let host = assistant(
        MockResources::unavailable(),
        MockNetwork::Reachable,
        FirewallState::Unknown,
    );
    assert!(host.detect_issues().await.is_empty());
}

#[tokio::test]
async fn test_diagnose_filters_by_category() {
    let request = DiagnoseRequest {
        categories: Some(vec!["security".to_string()]),
    };
    let response = full_disk_host().diagnose(&request).await;

    assert_eq!(response.count, 1);
    assert_eq!(response.issues[0].category(), &Category::Security);
}

#[tokio::test]
async fn test_diagnose_empty_filter_keeps_everything() {
    let request = DiagnoseRequest {
        categories: Some(Vec::new()),
    };
    let response = full_disk_host().diagnose(&request).await;
    assert_eq!(response.count, 2);
}

#[tokio::test]
async fn test_fix_all_reports_success_per_issue() {
    let response = full_disk_host().fix(&FixRequest::default()).await;

    assert_eq!(response.status, "success");
    assert_eq!(response.outcomes.len(), 2);
    assert_eq!(response.issues_fixed, 2);
    assert_eq!(response.outcomes[0].status, FixStatus::Guidance);
    assert_eq!(response.outcomes[1].status, FixStatus::Applied);
}

#[tokio::test]
async fn test_fix_selected_ids_only() {
    let request = FixRequest {
        issue_ids: Some(vec!["security:enable_firewall".to_string()]),
        auto_fix: true,
    };
    let response = full_disk_host().fix(&request).await;

    assert_eq!(response.issues.len(), 1);
    assert_eq!(response.outcomes.len(), 1);
    assert_eq!(response.outcomes[0].fix_action, FixAction::EnableFirewall);
}

#[tokio::test]
async fn test_fix_without_auto_fix_counts_selected_but_runs_nothing() {
    let request = FixRequest {
        issue_ids: None,
        auto_fix: false,
    };
    let host = full_disk_host();
    let response = host.fix(&request).await;

    assert_eq!(response.issues.len(), 2);
    assert!(response.outcomes.is_empty());
    assert_eq!(response.issues_fixed, 2);
}

#[tokio::test]
async fn test_fix_then_rediagnose_clears_firewall_issue() {
    let host = full_disk_host();
    host.fix(&FixRequest::default()).await;

    let issues = host.detect_issues().await;
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].category(), &Category::Disk);
}

#[tokio::test]
async fn test_dev_info_flags_missing_tools() {
    let info = healthy_host().dev_info().await;

    assert!(!info.readiness.development_ready);
    assert!(info.readiness.missing_tools.contains(&"python".to_string()));
    assert!(info.readiness.missing_tools.contains(&"git".to_string()));
    assert_eq!(info.specs.cpu.cores, 8);
}
