//! Advisory lines.

/// How an advisory line is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    /// The credential or file is in place.
    Found,
    /// Something expected is missing and a fallback applies.
    Missing,
    /// Optional improvement or next action.
    Hint,
}

impl AdvisoryKind {
    /// Leading icon for the line.
    pub fn icon(&self) -> &'static str {
        match self {
            AdvisoryKind::Found => "✅",
            AdvisoryKind::Missing => "❌",
            AdvisoryKind::Hint => "💡",
        }
    }
}

/// Indent applied to detail lines under an advisory.
pub const DETAIL_INDENT: &str = "   ";

/// A static console message about one probe outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub text: String,
    /// Follow-up lines printed indented under the main line.
    pub details: Vec<String>,
}

impl Advisory {
    fn new(kind: AdvisoryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            details: Vec::new(),
        }
    }

    pub fn found(text: impl Into<String>) -> Self {
        Self::new(AdvisoryKind::Found, text)
    }

    pub fn missing(text: impl Into<String>) -> Self {
        Self::new(AdvisoryKind::Missing, text)
    }

    pub fn hint(text: impl Into<String>) -> Self {
        Self::new(AdvisoryKind::Hint, text)
    }

    /// Append a detail line.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// The headline with its icon, e.g. `✅ Git config found`.
    pub fn headline(&self) -> String {
        format!("{} {}", self.kind.icon(), self.text)
    }

    /// Every printed line, headline first.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.headline())
            .chain(self.details.iter().map(|d| format!("{DETAIL_INDENT}{d}")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_carries_icon() {
        assert_eq!(Advisory::found("ok").headline(), "✅ ok");
        assert_eq!(Advisory::missing("gone").headline(), "❌ gone");
        assert_eq!(Advisory::hint("try").headline(), "💡 try");
    }

    #[test]
    fn details_are_indented_in_order() {
        let advisory = Advisory::hint("Set up Git config:")
            .with_detail("first")
            .with_detail("second");
        assert_eq!(
            advisory.lines(),
            vec![
                "💡 Set up Git config:".to_string(),
                "   first".to_string(),
                "   second".to_string(),
            ]
        );
    }

    #[test]
    fn advisory_without_details_is_one_line() {
        assert_eq!(Advisory::found("x").lines().len(), 1);
    }
}
