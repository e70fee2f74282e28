//! Application service: capability probe.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use medic_common::OsFamily;

use crate::application::ports::{FirewallControl, NetworkProbe, ResourceProbe};
use crate::domain::config::ProbeSettings;
use crate::domain::health::{CapabilitySnapshot, FirewallState};

/// Take one snapshot of the live system.
///
/// Never fails as a whole: each sub-probe that cannot complete is logged
/// and recorded as unknown (disk, memory, firewall) or unreachable (network).
pub async fn measure(
    os_family: &OsFamily,
    settings: &ProbeSettings,
    resources: &impl ResourceProbe,
    network: &impl NetworkProbe,
    firewall: &impl FirewallControl,
) -> CapabilitySnapshot {
    let (disk_used_percent, memory_used_percent, internet_reachable, firewall) = tokio::join!(
        probe_disk(resources),
        probe_memory(resources),
        probe_network(network, settings),
        probe_firewall(firewall),
    );

    CapabilitySnapshot {
        os_family: os_family.clone(),
        disk_used_percent,
        memory_used_percent,
        internet_reachable,
        firewall,
    }
}

async fn probe_disk(resources: &impl ResourceProbe) -> Option<f64> {
    match resources.home_volume().await {
        Ok(volume) => {
            let percent = volume.used_percent();
            if percent.is_none() {
                tracing::warn!("disk probe unavailable: home volume reports zero capacity");
            }
            percent
        }
        Err(e) => {
            tracing::warn!(error = %e, "disk probe unavailable");
            None
        }
    }
}

async fn probe_memory(resources: &impl ResourceProbe) -> Option<f64> {
    match resources.memory().await {
        Ok(memory) => {
            let percent = memory.used_percent();
            if percent.is_none() {
                tracing::warn!("memory probe unavailable: zero total memory reported");
            }
            percent
        }
        Err(e) => {
            tracing::warn!(error = %e, "memory probe unavailable");
            None
        }
    }
}

async fn probe_network(network: &impl NetworkProbe, settings: &ProbeSettings) -> bool {
    match network
        .check_tcp_connectivity(&settings.probe_address, settings.network_timeout)
        .await
    {
        Ok(reachable) => {
            tracing::debug!(address = %settings.probe_address, reachable, "network probe");
            reachable
        }
        Err(e) => {
            tracing::warn!(error = %e, "network probe unavailable, treating as unreachable");
            false
        }
    }
}

async fn probe_firewall(firewall: &impl FirewallControl) -> FirewallState {
    match firewall.probe_firewall().await {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!(error = %e, "firewall probe unavailable");
            FirewallState::Unknown
        }
    }
}
