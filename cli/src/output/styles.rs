//! Output styles using owo-colors stylesheet pattern

use medic_common::Severity;
use owo_colors::{OwoColorize as _, Style};

use crate::domain::report::ReportStyle;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Success messages (green)
    pub success: Style,
    /// Warning messages (yellow)
    pub warning: Style,
    /// Error messages (red)
    pub error: Style,
    /// Info messages (blue)
    pub info: Style,
    /// Dimmed/secondary text
    pub dim: Style,
    /// Bold text
    pub bold: Style,
    /// Headers/section titles
    pub header: Style,
    /// High-severity label
    pub high: Style,
    /// Medium-severity label
    pub medium: Style,
    /// Low-severity label
    pub low: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.bold = Style::new().bold();
        self.header = Style::new().bold().cyan();
        self.high = Style::new().bold().red();
        self.medium = Style::new().yellow();
        self.low = Style::new().cyan();
    }

    /// Label style for a severity.
    #[must_use]
    pub fn severity(&self, severity: Severity) -> Style {
        match severity {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

impl ReportStyle for Styles {
    fn header(&self, text: &str) -> String {
        text.style(self.header).to_string()
    }

    fn severity_label(&self, severity: Severity, label: &str) -> String {
        label.style(self.severity(severity)).to_string()
    }

    fn no_issues(&self, text: &str) -> String {
        text.style(self.success).to_string()
    }
}
