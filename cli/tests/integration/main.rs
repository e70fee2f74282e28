//! Integration tests for the medic CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! They only run commands that never probe or change the host.

mod config_command;
