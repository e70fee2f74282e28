//! Plain-text issue report.

use std::fmt::Write as _;

use medic_common::{Issue, Severity};

pub const REPORT_HEADER: &str = "System Issue Report";
pub const NO_ISSUES_MESSAGE: &str = "No issues detected!";

/// Issues grouped under one severity, in detection order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SeverityGroup<'a> {
    severity: Severity,
    issues: Vec<&'a Issue>,
}

/// Decorates the emphasized parts of the report. Every method defaults to
/// returning the text unchanged.
pub trait ReportStyle {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn severity_label(&self, _severity: Severity, label: &str) -> String {
        label.to_string()
    }

    fn no_issues(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Undecorated text, used by the API surfaces and tests.
pub struct PlainStyle;

impl ReportStyle for PlainStyle {}

/// Group issues by severity, most urgent first. Empty groups are omitted.
fn summarize(issues: &[Issue]) -> Vec<SeverityGroup<'_>> {
    Severity::DESCENDING
        .iter()
        .map(|&severity| SeverityGroup {
            severity,
            issues: issues.iter().filter(|i| i.severity() == severity).collect(),
        })
        .filter(|group| !group.issues.is_empty())
        .collect()
}

/// Render the human report.
///
/// ```text
/// System Issue Report
/// ===================
///
/// HIGH (1 issue)
///   - [disk] Disk space critically low (95.0% used)  (fix: cleanup_disk)
/// ```
#[must_use]
pub fn render_report(issues: &[Issue]) -> String {
    render_report_with(issues, &PlainStyle)
}

/// [`render_report`] with the header, severity labels and the empty-batch
/// message passed through `style`.
#[must_use]
pub fn render_report_with(issues: &[Issue], style: &impl ReportStyle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", style.header(REPORT_HEADER));
    let _ = writeln!(out, "{}", "=".repeat(REPORT_HEADER.len()));
    let _ = writeln!(out);

    if issues.is_empty() {
        let _ = writeln!(out, "{}", style.no_issues(NO_ISSUES_MESSAGE));
        return out;
    }

    for group in summarize(issues) {
        let count = group.issues.len();
        let noun = if count == 1 { "issue" } else { "issues" };
        let label = group.severity.as_str().to_ascii_uppercase();
        let _ = writeln!(
            out,
            "{} ({count} {noun})",
            style.severity_label(group.severity, &label)
        );
        for issue in group.issues {
            let _ = writeln!(out, "  - {}", issue_line(issue));
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "Total: {}", issues.len());
    out
}

fn issue_line(issue: &Issue) -> String {
    match issue.fix_action() {
        Some(action) => format!(
            "[{}] {}  (fix: {action})",
            issue.category(),
            issue.description()
        ),
        None => format!("[{}] {}", issue.category(), issue.description()),
    }
}
