//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::report::sections::rule;
use crate::report::Advisory;

use super::{should_use_colors, OutputMode, SetupTheme, UserInterface};

/// Terminal UI writing the report to stdout and errors to stderr.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: SetupTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI with an explicit theme.
    pub fn new(mode: OutputMode, theme: SetupTheme) -> Self {
        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", text).ok();
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        let header = self.theme.format_header(title);
        let rule = self.theme.format_rule(&rule());
        self.line(&header);
        self.line(&rule);
    }

    fn show_rule(&mut self) {
        let rule = self.theme.format_rule(&rule());
        self.line(&rule);
    }

    fn show_section(&mut self, title: &str) {
        let header = self.theme.format_header(title);
        self.line(&header);
    }

    fn show_advisory(&mut self, advisory: &Advisory) {
        for line in self.theme.format_advisory(advisory) {
            self.line(&line);
        }
    }
}

/// Create the UI for a run.
///
/// Colors are used only when `color` is requested and the environment allows
/// it (`NO_COLOR` unset, stdout is a TTY).
pub fn create_ui(mode: OutputMode, color: bool) -> Box<dyn UserInterface> {
    let theme = if color && should_use_colors() {
        SetupTheme::new()
    } else {
        SetupTheme::plain()
    };
    Box::new(TerminalUI::new(mode, theme))
}
