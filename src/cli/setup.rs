//! Setup command implementation.
//!
//! Runs every probe once, renders the report and writes `requirements.txt`.
//! The checks are independent; only the requirements write can fail.

use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::emit::write_requirements;
use crate::error::Result;
use crate::probe::env::GITHUB_TOKEN;
use crate::probe::{EnvProbe, FileProbe, FileTarget};
use crate::report::sections::{
    self, access_advisory, dotenv_advisory, git_config_section, github_section,
    ml_platform_section, next_steps, requirements_advisory, ReportOptions,
};
use crate::report::render_section;
use crate::ui::UserInterface;

use super::command::{Command, CommandResult};

type EnvLookup = Box<dyn Fn(&str) -> std::result::Result<String, VarError>>;

/// The setup command implementation.
pub struct SetupCommand {
    project_root: PathBuf,
    github_owner: String,
    files: FileProbe,
    env_fn: EnvLookup,
}

impl SetupCommand {
    /// Create a setup command over the real environment and home directory.
    pub fn new(project_root: &Path, github_owner: impl Into<String>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            github_owner: github_owner.into(),
            files: FileProbe::new(project_root),
            env_fn: Box::new(|key: &str| std::env::var(key)),
        }
    }

    /// Replace the env var lookup (for tests).
    pub fn with_env<F>(mut self, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError> + 'static,
    {
        self.env_fn = Box::new(env_fn);
        self
    }

    /// Replace the home directory (for tests).
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.files = FileProbe::with_home(home, &self.project_root);
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for SetupCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let options = ReportOptions {
            github_owner: self.github_owner.clone(),
            show_paths: ui.output_mode().shows_paths(),
        };
        let env = EnvProbe::run_with_env(|key: &str| (self.env_fn)(key));

        ui.show_header(sections::BANNER);

        render_section(
            ui,
            &github_section(
                &self.files.check(FileTarget::SshKey),
                env.status_of(GITHUB_TOKEN),
                &options,
            ),
        );

        ui.message("");
        render_section(ui, &ml_platform_section(&env));

        ui.message("");
        ui.show_section(sections::SAMPLE_CONFIG_TITLE);
        let written = write_requirements(&self.project_root)?;
        ui.show_advisory(&requirements_advisory(&written, &options));
        ui.show_advisory(&dotenv_advisory(
            &self.files.check(FileTarget::DotEnv),
            &options,
        ));

        ui.message("");
        render_section(
            ui,
            &git_config_section(&self.files.check(FileTarget::GitConfig), &options),
        );

        ui.message("");
        ui.show_rule();
        ui.show_section(sections::NEXT_STEPS_TITLE);
        for step in next_steps(&options) {
            ui.message(&step);
        }
        ui.message("");
        ui.show_advisory(&access_advisory());

        tracing::debug!("Setup check finished in {}", self.project_root.display());
        Ok(CommandResult::success())
    }
}
