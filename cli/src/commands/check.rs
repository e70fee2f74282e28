//! `medic check`: full environment report.

use std::process::ExitCode;

use anyhow::Result;
use medic_common::CheckRequest;

use crate::app::AppContext;
use crate::application::SilentReporter;
use crate::commands::CheckArgs;
use crate::output::TerminalReporter;

/// Run the check command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run(app: &AppContext, args: &CheckArgs) -> Result<ExitCode> {
    let request = CheckRequest {
        verbose: false,
        include_software: args.software,
        include_network: !args.no_network,
        include_security: !args.no_security,
    };
    let assistant = app.assistant();

    let report = if app.is_json() {
        assistant.check_environment(&request, &SilentReporter).await
    } else {
        let reporter = TerminalReporter::new(&app.output);
        assistant.check_environment(&request, &reporter).await
    };

    app.renderer().render_environment(&report)?;
    Ok(ExitCode::SUCCESS)
}
