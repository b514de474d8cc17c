//! Filesystem probe for well-known setup artifacts.
//!
//! Paths are only tested for existence; nothing is opened or read.

use std::path::{Path, PathBuf};

use super::status::ProbeStatus;

/// A file whose presence affects the setup advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileTarget {
    /// `~/.ssh/id_ed25519`
    SshKey,
    /// `~/.gitconfig`
    GitConfig,
    /// `.env` in the project directory.
    DotEnv,
}

impl FileTarget {
    /// Short name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            FileTarget::SshKey => "ssh key",
            FileTarget::GitConfig => "git config",
            FileTarget::DotEnv => ".env file",
        }
    }

    /// Resolve the concrete path for this target.
    ///
    /// Home-relative targets resolve to `None` when no home directory is known.
    pub fn locate(&self, home: Option<&Path>, project_root: &Path) -> Option<PathBuf> {
        match self {
            FileTarget::SshKey => home.map(|h| h.join(".ssh").join("id_ed25519")),
            FileTarget::GitConfig => home.map(|h| h.join(".gitconfig")),
            FileTarget::DotEnv => Some(project_root.join(".env")),
        }
    }
}

/// Outcome of probing a single file target.
#[derive(Debug, Clone)]
pub struct FileCheck {
    pub target: FileTarget,
    /// The path that was tested, if one could be resolved.
    pub path: Option<PathBuf>,
    pub status: ProbeStatus,
}

/// Existence checks rooted at a home directory and a project directory.
#[derive(Debug, Clone)]
pub struct FileProbe {
    home: Option<PathBuf>,
    project_root: PathBuf,
}

impl FileProbe {
    /// Create a probe using the current user's home directory.
    pub fn new(project_root: &Path) -> Self {
        let home = dirs::home_dir();
        if home.is_none() {
            tracing::warn!("Could not determine home directory; home files will read as absent");
        }
        Self::with_home(home, project_root)
    }

    /// Create a probe with an explicit home directory.
    pub fn with_home(home: Option<PathBuf>, project_root: &Path) -> Self {
        Self {
            home,
            project_root: project_root.to_path_buf(),
        }
    }

    /// Check one target.
    pub fn check(&self, target: FileTarget) -> FileCheck {
        let path = target.locate(self.home.as_deref(), &self.project_root);
        let status = ProbeStatus::from(path.as_deref().is_some_and(Path::exists));
        tracing::debug!("{} is {}", target.label(), status.label());
        FileCheck {
            target,
            path,
            status,
        }
    }
}
