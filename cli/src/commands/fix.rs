//! `medic fix`: detect issues, confirm, then remediate them all.

use std::process::ExitCode;

use anyhow::Result;
use medic_common::FixResponse;

use crate::app::AppContext;
use crate::commands::FixArgs;
use crate::output::progress::with_spinner;

/// Run the fix command.
///
/// Exits with failure when any remediation did not succeed.
///
/// # Errors
///
/// Returns an error if the confirmation prompt fails or JSON serialization fails.
pub async fn run(app: &AppContext, args: &FixArgs) -> Result<ExitCode> {
    let assistant = app.assistant();

    let issues = with_spinner(
        app.show_spinner(),
        "Checking system...",
        "System checked",
        assistant.detect_issues(),
    )
    .await;

    if issues.is_empty() {
        app.renderer()
            .render_fix(&FixResponse::new(issues, Vec::new()))?;
        return Ok(ExitCode::SUCCESS);
    }

    if !app.is_json() {
        app.renderer().render_issues(&issues)?;
        let skip_prompt = args.yes || app.non_interactive;
        if !skip_prompt && !app.confirm(&format!("Fix {} issues?", issues.len()), true)? {
            app.output.info("Cancelled.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    let response = assistant.fix_issues(issues).await;
    app.renderer().render_fix(&response)?;

    if response.outcomes.iter().all(|o| o.status.is_success()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
