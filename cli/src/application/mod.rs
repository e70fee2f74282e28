//! Application layer: port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod assistant;
pub mod ports;
pub mod services;

pub use assistant::{Assistant, SilentReporter};
pub use ports::{
    CommandRunner, ConfigStore, FirewallControl, NetworkProbe, ProgressReporter, ResourceProbe,
};
