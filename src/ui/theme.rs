//! Visual theme and styling.

use console::Style;

use crate::report::{Advisory, AdvisoryKind};

/// Terminal styles for the report.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Style for found advisories (green).
    pub found: Style,
    /// Style for missing advisories (red).
    pub missing: Style,
    /// Style for hint advisories (magenta).
    pub hint: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for the banner and section titles (bold).
    pub header: Style,
    /// Style for detail lines and rules (dim).
    pub dim: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            found: Style::new().green(),
            missing: Style::new().red(),
            hint: Style::new().magenta(),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            found: Style::new(),
            missing: Style::new(),
            hint: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }

    fn kind_style(&self, kind: AdvisoryKind) -> &Style {
        match kind {
            AdvisoryKind::Found => &self.found,
            AdvisoryKind::Missing => &self.missing,
            AdvisoryKind::Hint => &self.hint,
        }
    }

    /// Format every line of an advisory; the headline takes the kind's color.
    pub fn format_advisory(&self, advisory: &Advisory) -> Vec<String> {
        let mut lines = advisory.lines().into_iter();
        let mut out = Vec::new();
        if let Some(headline) = lines.next() {
            out.push(format!(
                "{}",
                self.kind_style(advisory.kind).apply_to(headline)
            ));
        }
        out.extend(lines.map(|l| format!("{}", self.dim.apply_to(l))));
        out
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a banner or section title.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format the `=` rule.
    pub fn format_rule(&self, rule: &str) -> String {
        format!("{}", self.dim.apply_to(rule))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_advisory_matches_raw_lines() {
        let theme = SetupTheme::plain();
        let advisory = Advisory::missing("SSH key not found")
            .with_detail("You'll need to use HTTPS with Personal Access Token");
        assert_eq!(theme.format_advisory(&advisory), advisory.lines());
    }

    #[test]
    fn theme_formats_error() {
        let theme = SetupTheme::plain();
        let msg = theme.format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn plain_header_is_unchanged() {
        let theme = SetupTheme::plain();
        assert_eq!(theme.format_header("🔧 Git configuration..."), "🔧 Git configuration...");
    }

    #[test]
    fn colored_advisory_keeps_text() {
        let theme = SetupTheme::new();
        let lines = theme.format_advisory(&Advisory::found("Git config found"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Git config found"));
    }

    #[test]
    fn default_impl_matches_new() {
        let advisory = Advisory::hint("x");
        assert_eq!(
            SetupTheme::default().format_advisory(&advisory),
            SetupTheme::new().format_advisory(&advisory)
        );
    }
}
