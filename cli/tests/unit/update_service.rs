//! Tests for the check-only update query.

use medic_cli::application::services::update_check::check_updates;
use medic_cli::domain::updates::UpdateStatus;
use medic_common::OsFamily;

use crate::helpers::{code_output, err_output, ok_output};
use crate::mocks::MockRunner;

const APT_LIST: &[u8] = b"Listing... Done
curl/jammy-updates 7.81.0-1ubuntu1.16 amd64 [upgradable from: 7.81.0-1ubuntu1.15]
openssl/jammy-security 3.0.2-0ubuntu1.15 amd64 [upgradable from: 3.0.2-0ubuntu1.14]
";

#[tokio::test]
async fn test_apt_lists_upgradable_packages() {
    let runner = MockRunner::new().with("apt", ok_output(APT_LIST));

    let report = check_updates(&OsFamily::Linux, &runner).await;

    assert_eq!(report.manager.as_deref(), Some("apt"));
    assert_eq!(report.status, UpdateStatus::UpdatesAvailable);
    assert_eq!(report.packages, vec!["curl", "openssl"]);
    assert!(
        !runner.calls().iter().any(|c| c.starts_with("dnf")),
        "dnf must not run when apt answered"
    );
}

#[tokio::test]
async fn test_dnf_fallback_exit_100_means_updates() {
    let runner = MockRunner::new().with(
        "dnf",
        code_output(100, b"\nkernel.x86_64    6.8.9-300.fc40    updates\n"),
    );

    let report = check_updates(&OsFamily::Linux, &runner).await;

    assert_eq!(report.manager.as_deref(), Some("dnf"));
    assert_eq!(report.status, UpdateStatus::UpdatesAvailable);
    assert_eq!(report.packages, vec!["kernel"]);
}

#[tokio::test]
async fn test_dnf_exit_zero_is_up_to_date() {
    let runner = MockRunner::new()
        .with("apt", err_output(1, b""))
        .with("dnf", ok_output(b""));

    let report = check_updates(&OsFamily::Linux, &runner).await;

    assert_eq!(report.status, UpdateStatus::UpToDate);
    assert!(report.packages.is_empty());
}

#[tokio::test]
async fn test_no_package_manager_is_unknown() {
    let runner = MockRunner::new();

    let report = check_updates(&OsFamily::Linux, &runner).await;

    assert_eq!(report.status, UpdateStatus::Unknown);
    assert!(report.manager.is_none());
}

#[tokio::test]
async fn test_windows_update_titles() {
    let runner = MockRunner::new().with(
        "powershell",
        ok_output(b"2024-06 Cumulative Update for Windows 11\r\nDefender definitions\r\n"),
    );

    let report = check_updates(&OsFamily::Windows, &runner).await;

    assert_eq!(report.manager.as_deref(), Some("windows-update"));
    assert_eq!(report.packages.len(), 2);
}

#[tokio::test]
async fn test_unsupported_os_runs_nothing() {
    let runner = MockRunner::new();

    let report = check_updates(&OsFamily::MacOs, &runner).await;

    assert_eq!(report.status, UpdateStatus::Unknown);
    assert!(runner.calls().is_empty());
}
