//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod environment;
pub mod error;
pub mod health;
pub mod issues;
pub mod report;
pub mod updates;

pub use config::{MedicConfig, ProbeSettings};
pub use error::{ConfigError, ProbeError, RemediationError};
pub use health::{CapabilitySnapshot, FirewallState, classify};
pub use issues::{filter_by_category, filter_by_id};
pub use report::render_report;
