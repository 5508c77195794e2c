pub mod check;
pub mod fetch;
pub mod show;
pub mod update;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Keeps a README contribution tally up to date.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress decorative output, keep status and error lines
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch contribution counts and rewrite the README section
    #[command(alias = "u")]
    Update {
        /// Account login; falls back to GITHUB_USER
        #[arg(long)]
        login: Option<String>,
        /// Document to rewrite
        #[arg(long, default_value = "README.md")]
        readme: PathBuf,
        /// Name inside the section markers
        #[arg(long, default_value = "contribs")]
        section: String,
    },
    /// Fetch and print contribution counts, touching no file
    #[command(alias = "s")]
    Show {
        /// Account login; falls back to GITHUB_USER
        #[arg(long)]
        login: Option<String>,
    },
    /// Verify that the document carries the section markers
    #[command(alias = "c")]
    Check {
        /// Document to inspect
        #[arg(long, default_value = "README.md")]
        readme: PathBuf,
        /// Name inside the section markers
        #[arg(long, default_value = "contribs")]
        section: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
