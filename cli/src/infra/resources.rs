//! `ResourceProbe` backed by `sysinfo`.
//!
//! sysinfo refreshes are blocking, so each measurement runs on the blocking pool.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sysinfo::{Disks, MINIMUM_CPU_UPDATE_INTERVAL, Networks, System};

use crate::application::ports::{CpuUsage, MemoryUsage, ResourceProbe, VolumeUsage};

#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoResourceProbe;

impl ResourceProbe for SysinfoResourceProbe {
    async fn home_volume(&self) -> Result<VolumeUsage> {
        let home = dirs::home_dir().context("cannot determine home directory")?;
        blocking(move || {
            let disks = Disks::new_with_refreshed_list();
            let mounts: Vec<(PathBuf, VolumeUsage)> = disks
                .list()
                .iter()
                .map(|disk| {
                    (
                        disk.mount_point().to_path_buf(),
                        VolumeUsage {
                            total_bytes: disk.total_space(),
                            available_bytes: disk.available_space(),
                        },
                    )
                })
                .collect();
            volume_for_path(&mounts, &home)
                .with_context(|| format!("no mounted volume contains {}", home.display()))
        })
        .await
    }

    async fn memory(&self) -> Result<MemoryUsage> {
        blocking(|| {
            let mut sys = System::new();
            sys.refresh_memory();
            Ok(MemoryUsage {
                total_bytes: sys.total_memory(),
                used_bytes: sys.used_memory(),
                available_bytes: sys.available_memory(),
            })
        })
        .await
    }

    async fn cpu(&self) -> Result<CpuUsage> {
        blocking(|| {
            let mut sys = System::new();
            // Usage is a delta between two refreshes.
            sys.refresh_cpu();
            std::thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
            sys.refresh_cpu();
            Ok(CpuUsage {
                count: sys.cpus().len(),
                percent: f64::from(sys.global_cpu_info().cpu_usage()),
            })
        })
        .await
    }

    async fn interfaces(&self) -> Result<BTreeMap<String, String>> {
        blocking(|| {
            let networks = Networks::new_with_refreshed_list();
            Ok(networks
                .list()
                .iter()
                .map(|(name, data)| (name.clone(), data.mac_address().to_string()))
                .collect())
        })
        .await
    }

    fn uptime_secs(&self) -> u64 {
        System::uptime()
    }
}

async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| anyhow::anyhow!("spawn_blocking panicked: {e}"))?
}

/// The volume whose mount point is the longest prefix of `path`.
#[must_use]
pub fn volume_for_path(mounts: &[(PathBuf, VolumeUsage)], path: &Path) -> Option<VolumeUsage> {
    mounts
        .iter()
        .filter(|(mount, _)| path.starts_with(mount))
        .max_by_key(|(mount, _)| mount.components().count())
        .map(|(_, usage)| *usage)
}
