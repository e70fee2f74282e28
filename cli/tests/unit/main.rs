//! Unit tests for the medic CLI.
//!
//! These tests use mocked ports and run fast without touching the host.

mod architecture;
mod assistant_scenarios;
mod capability_probe_service;
mod config_store;
mod environment_service;
mod helpers;
mod remediation_service;
mod update_service;
