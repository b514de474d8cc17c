//! Presence probes for credentials and setup files.
//!
//! # Modules
//!
//! - [`env`] - Credential variables in the process environment
//! - [`file`] - SSH key, Git config and project `.env` file
//! - [`status`] - Shared present/absent outcome

pub mod env;
pub mod file;
pub mod status;

pub use env::{CredentialCheck, CredentialDef, CredentialGroup, EnvProbe, CREDENTIALS};
pub use file::{FileCheck, FileProbe, FileTarget};
pub use status::ProbeStatus;
