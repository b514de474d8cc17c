//! Credential probe over environment variables.
//!
//! The probe looks up a fixed table of API-token variables and records only
//! whether each one is set. Lookups go through an injectable function so
//! tests never have to touch the process environment.
//!
//! # Example
//!
//! ```
//! use credsetup::probe::env::{CredentialGroup, EnvProbe};
//!
//! let probe = EnvProbe::run_with_env(|key: &str| {
//!     if key == "OPENAI_API_KEY" {
//!         Ok("sk-example".to_string())
//!     } else {
//!         Err(std::env::VarError::NotPresent)
//!     }
//! });
//!
//! assert!(probe.status_of("OPENAI_API_KEY").is_present());
//! assert!(!probe.status_of("WANDB_API_KEY").is_present());
//! assert_eq!(probe.group(CredentialGroup::MlPlatform).count(), 3);
//! ```

use std::env::VarError;

use super::status::ProbeStatus;

/// Which part of the report a credential belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialGroup {
    /// GitHub API access.
    GitHub,
    /// Model hubs and experiment trackers.
    MlPlatform,
}

/// Definition of a credential variable to probe for.
#[derive(Debug)]
pub struct CredentialDef {
    /// Environment variable name.
    pub var: &'static str,
    /// What the credential unlocks.
    pub description: &'static str,
    pub group: CredentialGroup,
}

/// Variable holding the GitHub API token.
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Known credential definitions, in report order.
pub const CREDENTIALS: &[CredentialDef] = &[
    CredentialDef {
        var: GITHUB_TOKEN,
        description: "GitHub API access",
        group: CredentialGroup::GitHub,
    },
    CredentialDef {
        var: "HUGGINGFACE_TOKEN",
        description: "Hugging Face Hub access",
        group: CredentialGroup::MlPlatform,
    },
    CredentialDef {
        var: "OPENAI_API_KEY",
        description: "OpenAI API access",
        group: CredentialGroup::MlPlatform,
    },
    CredentialDef {
        var: "WANDB_API_KEY",
        description: "Weights & Biases tracking",
        group: CredentialGroup::MlPlatform,
    },
];

/// Outcome of probing a single credential.
#[derive(Debug, Clone, Copy)]
pub struct CredentialCheck {
    pub def: &'static CredentialDef,
    pub status: ProbeStatus,
}

/// Check whether a variable counts as set.
///
/// Empty values count as unset. A value that is not valid unicode is still
/// a value, so it counts as set.
pub fn is_set<F>(var: &str, env_fn: &F) -> bool
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match env_fn(var) {
        Ok(value) => !value.is_empty(),
        Err(VarError::NotUnicode(_)) => true,
        Err(VarError::NotPresent) => false,
    }
}

/// Result of probing the environment for every known credential.
#[derive(Debug, Clone)]
pub struct EnvProbe {
    checks: Vec<CredentialCheck>,
}

impl EnvProbe {
    /// Probe the real process environment.
    pub fn run() -> Self {
        Self::run_with_env(|key: &str| std::env::var(key))
    }

    /// Probe with a custom env var lookup function.
    pub fn run_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let checks = CREDENTIALS
            .iter()
            .map(|def| {
                let status = ProbeStatus::from(is_set(def.var, &env_fn));
                tracing::debug!("credential {} is {}", def.var, status.label());
                CredentialCheck { def, status }
            })
            .collect();

        Self { checks }
    }

    /// All checks, in table order.
    pub fn checks(&self) -> &[CredentialCheck] {
        &self.checks
    }

    /// Checks belonging to one report group, in table order.
    pub fn group(&self, group: CredentialGroup) -> impl Iterator<Item = &CredentialCheck> {
        self.checks.iter().filter(move |c| c.def.group == group)
    }

    /// Status of a named variable. Names outside the table are absent.
    pub fn status_of(&self, var: &str) -> ProbeStatus {
        self.checks
            .iter()
            .find(|c| c.def.var == var)
            .map(|c| c.status)
            .unwrap_or(ProbeStatus::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn table_has_four_entries_with_one_github_token() {
        assert_eq!(CREDENTIALS.len(), 4);
        let github: Vec<_> = CREDENTIALS
            .iter()
            .filter(|d| d.group == CredentialGroup::GitHub)
            .collect();
        assert_eq!(github.len(), 1);
        assert_eq!(github[0].var, GITHUB_TOKEN);
    }

    #[test]
    fn ml_platform_order_is_stable() {
        let probe = EnvProbe::run_with_env(env_from(&[]));
        let vars: Vec<_> = probe
            .group(CredentialGroup::MlPlatform)
            .map(|c| c.def.var)
            .collect();
        assert_eq!(
            vars,
            vec!["HUGGINGFACE_TOKEN", "OPENAI_API_KEY", "WANDB_API_KEY"]
        );
    }

    #[test]
    fn set_variable_is_present() {
        let probe = EnvProbe::run_with_env(env_from(&[("HUGGINGFACE_TOKEN", "hf_abc")]));
        assert!(probe.status_of("HUGGINGFACE_TOKEN").is_present());
        assert!(!probe.status_of("OPENAI_API_KEY").is_present());
        assert!(!probe.status_of(GITHUB_TOKEN).is_present());
    }

    #[test]
    fn empty_variable_is_absent() {
        let probe = EnvProbe::run_with_env(env_from(&[("WANDB_API_KEY", "")]));
        assert_eq!(probe.status_of("WANDB_API_KEY"), ProbeStatus::Absent);
    }

    #[test]
    fn non_unicode_variable_is_present() {
        let env_fn = |key: &str| {
            if key == GITHUB_TOKEN {
                Err(VarError::NotUnicode(OsString::from("raw")))
            } else {
                Err(VarError::NotPresent)
            }
        };
        assert!(is_set(GITHUB_TOKEN, &env_fn));
    }

    #[test]
    fn unknown_variable_is_absent() {
        let probe = EnvProbe::run_with_env(env_from(&[("SOMETHING_ELSE", "x")]));
        assert_eq!(probe.status_of("SOMETHING_ELSE"), ProbeStatus::Absent);
    }

    #[test]
    fn repeated_probes_agree() {
        let pairs = [("OPENAI_API_KEY", "sk-1"), (GITHUB_TOKEN, "ghp_1")];
        let first = EnvProbe::run_with_env(env_from(&pairs));
        let second = EnvProbe::run_with_env(env_from(&pairs));
        for (a, b) in first.checks().iter().zip(second.checks()) {
            assert_eq!(a.def.var, b.def.var);
            assert_eq!(a.status, b.status);
        }
    }
}
