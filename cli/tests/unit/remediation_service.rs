//! Tests for the fix dispatcher.

#![allow(clippy::expect_used)]

use medic_cli::application::services::remediation::fix;
use medic_cli::domain::error::RemediationError;
use medic_cli::domain::health::FirewallState;
use medic_common::{Category, FixAction, FixStatus, Issue, OsFamily, Severity};

use crate::mocks::{MockFirewall, MockRunner};

fn issue(category: Category, action: FixAction) -> Issue {
    Issue::new(Severity::High, category, "test issue", Some(action))
}

fn firewall_issue() -> Issue {
    Issue::new(
        Severity::Medium,
        Category::Security,
        "Firewall is disabled",
        Some(FixAction::EnableFirewall),
    )
}

#[tokio::test]
async fn test_enable_firewall_is_idempotent() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Disabled);
    let issues = [firewall_issue()];

    let first = fix(&issues, &OsFamily::Linux, &runner, &firewall).await;
    let second = fix(&issues, &OsFamily::Linux, &runner, &firewall).await;

    assert_eq!(first[0].status, FixStatus::Applied);
    assert_eq!(second[0].status, FixStatus::Applied);
    assert_eq!(second[0].message, "Firewall already enabled");
    assert_eq!(firewall.enable_calls(), 1, "second run must not re-enable");
    assert_eq!(firewall.state(), FirewallState::Enabled);
}

#[tokio::test]
async fn test_unknown_fix_id_does_not_stop_batch() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Disabled);
    let issues = [
        issue(Category::Other("thermal".into()), FixAction::Unknown("reboot".into())),
        firewall_issue(),
    ];

    let outcomes = fix(&issues, &OsFamily::Linux, &runner, &firewall).await;

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].status, FixStatus::UnknownFixId);
    assert!(outcomes[0].message.contains("reboot"));
    assert_eq!(outcomes[1].status, FixStatus::Applied);
    assert_eq!(firewall.state(), FirewallState::Enabled);
}

#[tokio::test]
async fn test_failed_remediation_continues_with_next_issue() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Disabled)
        .failing_enable(|| RemediationError::Failed("ufw exited with 1".into()));
    let issues = [
        firewall_issue(),
        issue(Category::Network, FixAction::CheckNetwork),
    ];

    let outcomes = fix(&issues, &OsFamily::Linux, &runner, &firewall).await;

    assert_eq!(outcomes[0].status, FixStatus::Failed);
    assert_eq!(outcomes[1].status, FixStatus::Guidance);
}

#[tokio::test]
async fn test_enable_firewall_unsupported_platform() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Unknown).failing_enable(|| {
        RemediationError::UnsupportedPlatform {
            action: "enable_firewall".into(),
            os: OsFamily::MacOs,
        }
    });

    let outcomes = fix(&[firewall_issue()], &OsFamily::MacOs, &runner, &firewall).await;

    assert_eq!(outcomes[0].status, FixStatus::UnsupportedPlatform);
}

#[tokio::test]
async fn test_enable_firewall_proceeds_when_reprobe_fails() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Disabled).failing_probe();

    let outcomes = fix(&[firewall_issue()], &OsFamily::Linux, &runner, &firewall).await;

    assert_eq!(outcomes[0].status, FixStatus::Applied);
    assert_eq!(firewall.enable_calls(), 1);
}

#[tokio::test]
async fn test_cleanup_disk_launches_cleanmgr_on_windows() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Enabled);
    let issues = [issue(Category::Disk, FixAction::CleanupDisk)];

    let outcomes = fix(&issues, &OsFamily::Windows, &runner, &firewall).await;

    assert_eq!(outcomes[0].status, FixStatus::Launched);
    assert_eq!(runner.launches(), vec!["cleanmgr /d C:".to_string()]);
}

#[tokio::test]
async fn test_cleanup_disk_launch_failure_is_reported() {
    let runner = MockRunner::new().failing_launch();
    let firewall = MockFirewall::new(FirewallState::Enabled);
    let issues = [issue(Category::Disk, FixAction::CleanupDisk)];

    let outcomes = fix(&issues, &OsFamily::Windows, &runner, &firewall).await;

    assert_eq!(outcomes[0].status, FixStatus::Failed);
}

#[tokio::test]
async fn test_cleanup_disk_is_guidance_elsewhere() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Enabled);
    let issues = [issue(Category::Disk, FixAction::CleanupDisk)];

    let outcomes = fix(&issues, &OsFamily::Linux, &runner, &firewall).await;

    assert_eq!(outcomes[0].status, FixStatus::Guidance);
    assert!(runner.launches().is_empty());
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_memory_and_network_are_guidance_only() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Enabled);
    let issues = [
        issue(Category::Memory, FixAction::FreeMemory),
        issue(Category::Network, FixAction::CheckNetwork),
    ];

    let outcomes = fix(&issues, &OsFamily::Linux, &runner, &firewall).await;

    assert!(outcomes.iter().all(|o| o.status == FixStatus::Guidance));
    assert!(outcomes[0].message.starts_with("Memory cleanup suggestions"));
    assert!(outcomes[1].message.contains("Check DNS settings"));
}

#[tokio::test]
async fn test_issue_without_fix_action_is_skipped() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Enabled);
    let issues = [Issue::new(
        Severity::Low,
        Category::Other("thermal".into()),
        "warm",
        None,
    )];

    let outcomes = fix(&issues, &OsFamily::Linux, &runner, &firewall).await;

    assert!(outcomes.is_empty());
}

#[tokio::test]
async fn test_outcome_carries_issue_id_and_action() {
    let runner = MockRunner::new();
    let firewall = MockFirewall::new(FirewallState::Disabled);

    let outcomes = fix(&[firewall_issue()], &OsFamily::Linux, &runner, &firewall).await;

    assert_eq!(outcomes[0].issue_id, "security:enable_firewall");
    assert_eq!(outcomes[0].fix_action, FixAction::EnableFirewall);
}
