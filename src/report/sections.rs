//! Report sections built from probe outcomes.
//!
//! Each builder maps one probe outcome to exactly one advisory. Builders
//! take outcomes, never values, so nothing here can echo a credential.

use std::path::Path;

use crate::probe::{CredentialGroup, EnvProbe, FileCheck, ProbeStatus};

use super::advisory::Advisory;

/// Banner shown at the top of a run.
pub const BANNER: &str = "🚀 Jupyter ML Project Credential Setup";
/// Width of the `=` rule under the banner and above the footer.
pub const RULE_WIDTH: usize = 40;
/// Where the project is served.
pub const PROJECT_URL: &str = "http://sites/jupyter";
/// Default owner in the clone hints.
pub const DEFAULT_GITHUB_OWNER: &str = "ematavfr";

pub const GITHUB_TITLE: &str = "📚 Setting up GitHub credentials...";
pub const ML_PLATFORM_TITLE: &str = "🤖 Setting up ML platform credentials...";
pub const SAMPLE_CONFIG_TITLE: &str = "⚙️ Creating sample configuration...";
pub const GIT_CONFIG_TITLE: &str = "🔧 Git configuration...";
pub const NEXT_STEPS_TITLE: &str = "🎯 Next Steps:";

/// Knobs that change wording but never which advisory is chosen.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Owner used in `git clone` hints.
    pub github_owner: String,
    /// Add the checked path under file advisories.
    pub show_paths: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            github_owner: DEFAULT_GITHUB_OWNER.to_string(),
            show_paths: false,
        }
    }
}

/// A titled group of advisories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub advisories: Vec<Advisory>,
}

impl Section {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            advisories: Vec::new(),
        }
    }

    pub fn push(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }
}

/// The `=` rule.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn with_path(advisory: Advisory, check: &FileCheck, options: &ReportOptions) -> Advisory {
    match (&check.path, options.show_paths) {
        (Some(path), true) => advisory.with_detail(format!("checked {}", path.display())),
        _ => advisory,
    }
}

/// SSH key and GitHub token.
pub fn github_section(ssh_key: &FileCheck, token: ProbeStatus, options: &ReportOptions) -> Section {
    let mut section = Section::new(GITHUB_TITLE);

    let ssh = match ssh_key.status {
        ProbeStatus::Present => Advisory::found("SSH key found - Git operations will use SSH")
            .with_detail(format!(
                "You can clone repos with: git clone git@github.com:{}/repo-name.git",
                options.github_owner
            )),
        ProbeStatus::Absent => Advisory::missing("SSH key not found")
            .with_detail("You'll need to use HTTPS with Personal Access Token"),
    };
    section.push(with_path(ssh, ssh_key, options));

    section.push(match token {
        ProbeStatus::Present => Advisory::found("GitHub token found in environment"),
        ProbeStatus::Absent => Advisory::hint("Consider setting GITHUB_TOKEN for API access"),
    });

    section
}

/// One line per ML-platform credential, in table order.
pub fn ml_platform_section(env: &EnvProbe) -> Section {
    let mut section = Section::new(ML_PLATFORM_TITLE);
    for check in env.group(CredentialGroup::MlPlatform) {
        let (var, description) = (check.def.var, check.def.description);
        section.push(match check.status {
            ProbeStatus::Present => Advisory::found(format!("{var} found - {description}")),
            ProbeStatus::Absent => Advisory::hint(format!("{var} not set - {description}")),
        });
    }
    section
}

/// Confirmation that the requirements file was written.
pub fn requirements_advisory(written: &Path, options: &ReportOptions) -> Advisory {
    let file_name = written
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| written.display().to_string());
    let advisory = Advisory::found(format!("Created {file_name}"));
    if options.show_paths {
        advisory.with_detail(format!("wrote {}", written.display()))
    } else {
        advisory
    }
}

/// Project `.env` file.
pub fn dotenv_advisory(dotenv: &FileCheck, options: &ReportOptions) -> Advisory {
    let advisory = match dotenv.status {
        ProbeStatus::Present => Advisory::found(".env file already exists"),
        ProbeStatus::Absent => {
            Advisory::hint("Copy .env.template to .env and fill in your credentials")
                .with_detail("cp .env.template .env")
        }
    };
    with_path(advisory, dotenv, options)
}

/// Global Git config.
pub fn git_config_section(git_config: &FileCheck, options: &ReportOptions) -> Section {
    let mut section = Section::new(GIT_CONFIG_TITLE);
    let advisory = match git_config.status {
        ProbeStatus::Present => Advisory::found("Git config found"),
        ProbeStatus::Absent => Advisory::hint("Set up Git config:")
            .with_detail("git config --global user.name 'Your Name'")
            .with_detail("git config --global user.email 'your.email@example.com'"),
    };
    section.push(with_path(advisory, git_config, options));
    section
}

/// Numbered follow-up steps for the footer.
pub fn next_steps(options: &ReportOptions) -> Vec<String> {
    [
        "Copy .env.template to .env and fill in your credentials".to_string(),
        "Install requirements: pip install -r requirements.txt".to_string(),
        format!(
            "Test Git access: git clone git@github.com:{}/your-repo.git",
            options.github_owner
        ),
        "Start building your ML pipeline!".to_string(),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, step)| format!("{}. {}", i + 1, step))
    .collect()
}

/// Closing hint pointing at the hosted project.
pub fn access_advisory() -> Advisory {
    Advisory::hint(format!("Access this project at: {PROJECT_URL}"))
}
