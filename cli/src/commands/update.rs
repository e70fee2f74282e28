//! `medic update` — list pending OS package updates. Never installs anything.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::output::progress::with_spinner;

/// Run the update command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let assistant = app.assistant();
    let report = with_spinner(
        app.show_spinner(),
        "Checking for updates...",
        "Update check finished",
        assistant.check_updates(),
    )
    .await;
    app.renderer().render_updates(&report)?;
    Ok(ExitCode::SUCCESS)
}
