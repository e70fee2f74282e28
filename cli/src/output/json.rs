//! JSON output helpers.
//!
//! `--json` output uses the same response shapes as the REST and JSON-RPC
//! surfaces, so scripts can consume any of them interchangeably.

use anyhow::{Context, Result};
use medic_common::{DiagnoseResponse, Issue};
use serde::Serialize;

/// Renders values as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", to_pretty(value)?);
        Ok(())
    }

    /// Print issues as `{ "issues": [...], "count": n }`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_issues(&self, issues: &[Issue]) -> Result<()> {
        self.render(&DiagnoseResponse::new(issues.to_vec()))
    }
}

/// Serialize `value` as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
