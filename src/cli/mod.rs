//! Command-line interface for credsetup.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The [`Command`] trait and [`CommandResult`]
//! - [`setup`] - The setup check itself

pub mod args;
pub mod command;
pub mod setup;

pub use args::Cli;
pub use command::{Command, CommandResult};
pub use setup::SetupCommand;
