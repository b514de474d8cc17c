//! credsetup - Credential setup helper for ML projects.
//!
//! A single run checks which credentials and setup files are in place,
//! prints advice for each one, and writes a sample `requirements.txt`.
//! Credentials are only ever checked for presence; their values are never
//! read past the probe, printed or logged.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the setup command
//! - [`emit`] - The static `requirements.txt` payload
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Environment and filesystem presence checks
//! - [`report`] - Advisory lines and report sections
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use credsetup::probe::EnvProbe;
//! use credsetup::report::sections::ml_platform_section;
//!
//! let env = EnvProbe::run_with_env(|key: &str| match key {
//!     "WANDB_API_KEY" => Ok("wb-token".to_string()),
//!     _ => Err(std::env::VarError::NotPresent),
//! });
//! let section = ml_platform_section(&env);
//! assert_eq!(
//!     section.advisories[2].headline(),
//!     "✅ WANDB_API_KEY found - Weights & Biases tracking"
//! );
//! ```

pub mod cli;
pub mod emit;
pub mod error;
pub mod probe;
pub mod report;
pub mod ui;

pub use error::{Result, SetupError};
