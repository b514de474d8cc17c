//! Static files written by a setup run.

pub mod requirements;

pub use requirements::{requirements_content, write_requirements, REQUIREMENTS_FILE};
