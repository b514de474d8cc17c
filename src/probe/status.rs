//! Probe outcome types.
//!
//! Every probe answers a single yes/no question. The outcome deliberately
//! carries no payload so a credential value can never travel past the probe.

/// Whether a probed variable or file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The variable is set (non-empty) or the path exists.
    Present,
    /// The variable is unset/empty or the path does not exist.
    Absent,
}

impl ProbeStatus {
    /// Whether the subject was found.
    pub fn is_present(&self) -> bool {
        matches!(self, ProbeStatus::Present)
    }

    /// Short label used in debug logs.
    pub fn label(&self) -> &'static str {
        match self {
            ProbeStatus::Present => "present",
            ProbeStatus::Absent => "absent",
        }
    }
}

impl From<bool> for ProbeStatus {
    fn from(found: bool) -> Self {
        if found {
            ProbeStatus::Present
        } else {
            ProbeStatus::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_is_present() {
        assert!(ProbeStatus::Present.is_present());
        assert!(!ProbeStatus::Absent.is_present());
    }

    #[test]
    fn from_bool_maps_both_ways() {
        assert_eq!(ProbeStatus::from(true), ProbeStatus::Present);
        assert_eq!(ProbeStatus::from(false), ProbeStatus::Absent);
    }

    #[test]
    fn labels_are_distinct() {
        assert_ne!(ProbeStatus::Present.label(), ProbeStatus::Absent.label());
    }
}
