//! Tests for the capability probe: each sub-probe degrades on its own.

use medic_cli::application::services::capability_probe::measure;
use medic_cli::domain::health::FirewallState;
use medic_common::OsFamily;

use crate::helpers::settings;
use crate::mocks::{MockFirewall, MockNetwork, MockResources};

#[tokio::test]
async fn test_measure_reports_all_readings() {
    let snapshot = measure(
        &OsFamily::Linux,
        &settings(),
        &MockResources::percent(95, 40),
        &MockNetwork::Reachable,
        &MockFirewall::new(FirewallState::Disabled),
    )
    .await;

    assert_eq!(snapshot.os_family, OsFamily::Linux);
    assert_eq!(snapshot.disk_used_percent, Some(95.0));
    assert_eq!(snapshot.memory_used_percent, Some(40.0));
    assert!(snapshot.internet_reachable);
    assert_eq!(snapshot.firewall, FirewallState::Disabled);
}

#[tokio::test]
async fn test_measure_degrades_failed_resource_probes_to_unknown() {
    let snapshot = measure(
        &OsFamily::Linux,
        &settings(),
        &MockResources::unavailable(),
        &MockNetwork::Reachable,
        &MockFirewall::new(FirewallState::Enabled),
    )
    .await;

    assert!(snapshot.disk_used_percent.is_none());
    assert!(snapshot.memory_used_percent.is_none());
    assert!(snapshot.internet_reachable);
}

#[tokio::test]
async fn test_measure_treats_broken_network_probe_as_unreachable() {
    let snapshot = measure(
        &OsFamily::Linux,
        &settings(),
        &MockResources::percent(10, 10),
        &MockNetwork::Broken,
        &MockFirewall::new(FirewallState::Enabled),
    )
    .await;

    assert!(!snapshot.internet_reachable);
}

#[tokio::test]
async fn test_measure_treats_failed_firewall_probe_as_unknown() {
    let snapshot = measure(
        &OsFamily::Linux,
        &settings(),
        &MockResources::percent(10, 10),
        &MockNetwork::Reachable,
        &MockFirewall::new(FirewallState::Disabled).failing_probe(),
    )
    .await;

    assert_eq!(snapshot.firewall, FirewallState::Unknown);
}
