//! Command implementations

pub mod check;
pub mod config;
pub mod diagnose;
pub mod fix;
pub mod update;
pub mod version;

use clap::Args;

/// Arguments for the check command.
#[derive(Args, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Include installed software (slow)
    #[arg(long)]
    pub software: bool,

    /// Skip network interfaces and connectivity
    #[arg(long)]
    pub no_network: bool,

    /// Skip firewall state
    #[arg(long)]
    pub no_security: bool,
}

/// Arguments for the diagnose command.
#[derive(Args, Default)]
pub struct DiagnoseArgs {
    /// Only report issues in this category (repeatable)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,
}

/// Arguments for the fix command.
#[derive(Args, Default)]
pub struct FixArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}
