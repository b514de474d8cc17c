//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use credsetup::report::Advisory;
//! use credsetup::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_section("🔧 Git configuration...");
//! ui.show_advisory(&Advisory::found("Git config found"));
//!
//! assert!(ui.has_line("✅ Git config found"));
//! assert_eq!(ui.sections().len(), 1);
//! ```

use crate::report::sections::rule;
use crate::report::Advisory;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Besides the per-kind captures, every rendered line is kept in order in
/// [`MockUI::lines`] so tests can assert on the exact transcript.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    lines: Vec<String>,
    messages: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    advisories: Vec<Advisory>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every line that would have been printed to stdout, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured banner titles.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured section titles.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Get all captured advisories.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Check if an exact line was printed.
    pub fn has_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Check if any printed line contains `needle`.
    pub fn output_contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle)) || self.has_error(needle)
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    fn record(&mut self, line: String) {
        if self.mode.shows_status() {
            self.lines.push(line);
        }
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.record(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.record(title.to_string());
        self.record(rule());
    }

    fn show_rule(&mut self) {
        self.record(rule());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
        self.record(title.to_string());
    }

    fn show_advisory(&mut self, advisory: &Advisory) {
        self.advisories.push(advisory.clone());
        for line in advisory.lines() {
            self.record(line);
        }
    }
}
