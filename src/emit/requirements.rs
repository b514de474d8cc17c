//! The sample `requirements.txt` payload.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};

/// Name of the emitted file.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Dependency-spec lines, written verbatim and in order.
pub const REQUIREMENTS: &[&str] = &[
    "# Core ML libraries",
    "numpy>=1.21.0",
    "pandas>=1.3.0",
    "scikit-learn>=1.0.0",
    "matplotlib>=3.4.0",
    "seaborn>=0.11.0",
    "",
    "# Deep Learning",
    "torch>=1.11.0",
    "transformers>=4.15.0",
    "datasets>=2.0.0",
    "",
    "# MLOps",
    "mlflow>=1.24.0",
    "wandb>=0.12.0",
    "dvc>=2.8.0",
    "",
    "# GitHub Integration",
    "PyGithub>=1.55",
    "gitpython>=3.1.0",
    "",
    "# Utilities",
    "python-dotenv>=0.19.0",
    "tqdm>=4.62.0",
    "click>=8.0.0",
];

/// File content: lines joined by `\n`, no trailing newline.
pub fn requirements_content() -> String {
    REQUIREMENTS.join("\n")
}

/// Write `requirements.txt` into `dir`, replacing any existing file.
///
/// Returns the path that was written.
pub fn write_requirements(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(REQUIREMENTS_FILE);
    fs::write(&path, requirements_content()).map_err(|source| SetupError::RequirementsWrite {
        path: path.clone(),
        source,
    })?;
    tracing::debug!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn content_has_no_trailing_newline() {
        let content = requirements_content();
        assert!(content.starts_with("# Core ML libraries\n"));
        assert!(content.ends_with("click>=8.0.0"));
    }

    #[test]
    fn content_groups_are_separated_by_blank_lines() {
        let content = requirements_content();
        assert_eq!(content.matches("\n\n").count(), 4);
        assert!(content.contains("dvc>=2.8.0\n\n# GitHub Integration\nPyGithub>=1.55"));
    }

    #[test]
    fn writes_into_directory() {
        let temp = TempDir::new().unwrap();
        let path = write_requirements(temp.path()).unwrap();

        assert_eq!(path, temp.path().join(REQUIREMENTS_FILE));
        assert_eq!(fs::read_to_string(&path).unwrap(), requirements_content());
    }

    #[test]
    fn overwrites_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(REQUIREMENTS_FILE);
        let stale = "flask==0.1\n".repeat(200);
        fs::write(&path, stale).unwrap();

        write_requirements(temp.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), requirements_content());
    }

    #[test]
    fn repeated_writes_are_identical() {
        let temp = TempDir::new().unwrap();
        let path = write_requirements(temp.path()).unwrap();
        let first = fs::read(&path).unwrap();
        write_requirements(temp.path()).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unwritable_target_is_reported() {
        let temp = TempDir::new().unwrap();
        let not_a_dir = temp.path().join("plain-file");
        fs::write(&not_a_dir, "x").unwrap();

        let err = write_requirements(&not_a_dir).unwrap_err();
        match err {
            SetupError::RequirementsWrite { path, .. } => {
                assert_eq!(path, not_a_dir.join(REQUIREMENTS_FILE));
            }
            other => panic!("Expected RequirementsWrite, got {other:?}"),
        }
    }
}
