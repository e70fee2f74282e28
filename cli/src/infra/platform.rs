//! Platform detection.

use medic_common::{OsFamily, PlatformInfo};
use sysinfo::System;

const UNKNOWN: &str = "unknown";

/// Detect static host facts. Called once at startup; missing values become `"unknown"`.
#[must_use]
pub fn detect_platform() -> PlatformInfo {
    let info = PlatformInfo {
        os_family: OsFamily::current(),
        version: System::long_os_version().unwrap_or_else(|| UNKNOWN.to_string()),
        release: System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string()),
        architecture: std::env::consts::ARCH.to_string(),
        hostname: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
    };
    tracing::debug!(os = %info.os_family, version = %info.version, "platform detected");
    info
}
