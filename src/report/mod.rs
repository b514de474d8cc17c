//! Console report: advisory lines grouped into sections.
//!
//! - [`advisory`] - A single advisory line and its icon
//! - [`sections`] - Builders turning probe outcomes into sections

pub mod advisory;
pub mod sections;

pub use advisory::{Advisory, AdvisoryKind};
pub use sections::{ReportOptions, Section};

use crate::ui::UserInterface;

/// Render a section: its title followed by every advisory.
pub fn render_section(ui: &mut dyn UserInterface, section: &Section) {
    ui.show_section(section.title);
    for advisory in &section.advisories {
        ui.show_advisory(advisory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn render_section_shows_title_then_advisories() {
        let mut section = Section::new("🔧 Git configuration...");
        section.push(Advisory::found("Git config found"));

        let mut ui = MockUI::new();
        render_section(&mut ui, &section);

        assert_eq!(ui.sections(), &["🔧 Git configuration...".to_string()]);
        assert_eq!(ui.advisories().len(), 1);
        assert!(ui.has_line("✅ Git config found"));
    }
}
