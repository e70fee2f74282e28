//! Shared test helpers: output constructors and canned snapshots.

#![allow(dead_code)]

use std::process::{ExitStatus, Output};

use medic_cli::domain::config::ProbeSettings;
use medic_common::{OsFamily, PlatformInfo};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn code_output(code: i32, stdout: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Platform facts ───────────────────────────────────────────────────────────

pub fn platform(os_family: OsFamily) -> PlatformInfo {
    PlatformInfo {
        os_family,
        version: "Linux 24.04 Ubuntu".to_string(),
        release: "6.8.0".to_string(),
        architecture: "x86_64".to_string(),
        hostname: "test-host".to_string(),
    }
}

pub fn settings() -> ProbeSettings {
    ProbeSettings::default()
}
