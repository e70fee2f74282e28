//! `medic diagnose`: detect issues and print the report.

use std::process::ExitCode;

use anyhow::Result;
use medic_common::DiagnoseRequest;

use crate::app::AppContext;
use crate::commands::DiagnoseArgs;
use crate::output::progress::with_spinner;

/// Run the diagnose command. Finding issues is not a failure.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run(app: &AppContext, args: DiagnoseArgs) -> Result<ExitCode> {
    let request = DiagnoseRequest {
        categories: (!args.categories.is_empty()).then_some(args.categories),
    };
    let assistant = app.assistant();

    let response = with_spinner(
        app.show_spinner(),
        "Checking system...",
        "System checked",
        assistant.diagnose(&request),
    )
    .await;

    app.renderer().render_issues(&response.issues)?;
    Ok(ExitCode::SUCCESS)
}
