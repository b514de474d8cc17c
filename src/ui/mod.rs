//! Console user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to the real terminal
//! - [`MockUI`] capturing output in tests
//!
//! # Example
//!
//! ```
//! use credsetup::ui::{create_ui, OutputMode};
//!
//! // Quiet mode keeps doctest output clean
//! let mut ui = create_ui(OutputMode::Quiet, false);
//! ui.show_header("My Project");
//! ui.message("Setup complete!");
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SetupTheme};

use crate::report::Advisory;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display an error message. Errors are shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show the banner title followed by the rule.
    fn show_header(&mut self, title: &str);

    /// Show the rule on its own.
    fn show_rule(&mut self);

    /// Show a section title.
    fn show_section(&mut self, title: &str);

    /// Show an advisory with its detail lines.
    fn show_advisory(&mut self, advisory: &Advisory);
}
