//! Error types for credsetup.
//!
//! Probes never fail: a missing file or an unset variable is an ordinary
//! outcome. The only real failure is writing `requirements.txt`, which
//! surfaces as [`SetupError::RequirementsWrite`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for credsetup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Writing the requirements file failed.
    #[error("Failed to write {path}: {source}")]
    RequirementsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for credsetup operations.
pub type Result<T> = std::result::Result<T, SetupError>;
