//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{InitCommand, RunCommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Scaffold and run Snakemake-based analysis pipelines
#[derive(Debug, Parser, Clone)]
#[command(name = "workflowtool")]
#[command(version)]
#[command(about = "Scaffold and run Snakemake-based analysis pipelines", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Workflow engine executable (default: snakemake from PATH)
    #[arg(long, value_name = "PROGRAM")]
    pub engine: Option<String>,

    /// Read templates and the Snakefile from DIR instead of the built-in copies
    #[arg(long, value_name = "DIR")]
    pub resources: Option<PathBuf>,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Create and initialize a new pipeline directory
    Init(InitCommand),

    /// Run the pipeline
    ///
    /// Calls Snakemake to produce all the output files. Any arguments that
    /// are not recognized here are forwarded to Snakemake, e.g. targets to
    /// build or Snakemake options such as --dry-run.
    Run(RunCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
