//! CLI argument definitions.
//!
//! The tool takes no subcommands; every flag is optional and a bare
//! `credsetup` runs the full setup check in the current directory.

use clap::Parser;
use std::path::PathBuf;

use crate::report::sections::DEFAULT_GITHUB_OWNER;

/// credsetup - Credential setup helper for ML projects.
#[derive(Debug, Parser)]
#[command(name = "credsetup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory for requirements.txt and .env (overrides current directory)
    #[arg(short, long, env = "CREDSETUP_PROJECT")]
    pub project: Option<PathBuf>,

    /// GitHub owner shown in clone hints
    #[arg(long, env = "CREDSETUP_GITHUB_OWNER", default_value = DEFAULT_GITHUB_OWNER)]
    pub github_owner: String,

    /// Show checked paths
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
