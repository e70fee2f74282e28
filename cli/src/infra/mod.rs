//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, resource
//! measurement, network probing, firewall control, and config persistence.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod firewall;
pub mod network;
pub mod platform;
pub mod resources;

use medic_common::PlatformInfo;

use crate::application::Assistant;
use crate::domain::config::ProbeSettings;

use command_runner::TokioCommandRunner;
use firewall::PlatformFirewall;
use network::TokioNetworkProbe;
use resources::SysinfoResourceProbe;

/// The assistant wired to the live host.
pub type SystemAssistant = Assistant<
    TokioCommandRunner,
    SysinfoResourceProbe,
    TokioNetworkProbe,
    PlatformFirewall<TokioCommandRunner>,
>;

/// Build a [`SystemAssistant`] for `platform`. The firewall backend is picked
/// here, once, from the OS family.
#[must_use]
pub fn system_assistant(platform: PlatformInfo, settings: ProbeSettings) -> SystemAssistant {
    let runner = TokioCommandRunner::new(settings.command_timeout);
    let firewall = PlatformFirewall::for_os(&platform.os_family, runner);
    Assistant::new(
        platform,
        settings,
        runner,
        SysinfoResourceProbe,
        TokioNetworkProbe,
        firewall,
    )
}
