//! CLI command definitions

use crate::core::UsageError;
use crate::engine::Cores;
use crate::execution::RunOptions;
use clap::Args;
use std::ffi::OsString;
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Create and initialize a new pipeline directory
#[derive(Debug, Args, Clone)]
pub struct InitCommand {
    /// New pipeline directory to create
    pub directory: PathBuf,

    /// Extra arguments; `init` rejects all of them
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub unknown: Vec<String>,
}

/// Run the pipeline
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Run on at most N CPU cores in parallel (default: use as many cores as available)
    #[arg(short, long, value_name = "N")]
    pub cores: Option<NonZeroU32>,

    /// Arguments forwarded to Snakemake unchanged
    #[arg(
        value_name = "SNAKEMAKE_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub arguments: Vec<OsString>,
}

impl RunCommand {
    /// Build run options for a pipeline in `working_dir`
    ///
    /// Once clap meets the first token it does not know, everything else lands
    /// in `arguments`, so `--cores` is picked out of those tokens as well. The
    /// last occurrence wins.
    pub fn options(&self, working_dir: impl Into<PathBuf>) -> Result<RunOptions, UsageError> {
        let (cores, forwarded) = split_cores(&self.arguments)?;

        Ok(RunOptions::new(working_dir)
            .with_cores(Cores::from(cores.or(self.cores)))
            .with_forwarded(forwarded))
    }
}

/// Separate `-c N`, `-cN`, `-c=N`, `--cores N` and `--cores=N` from the
/// tokens to forward
///
/// Scanning stops at `--`; the separator and everything after it are
/// forwarded untouched.
fn split_cores(tokens: &[OsString]) -> Result<(Option<NonZeroU32>, Vec<OsString>), UsageError> {
    let mut cores = None;
    let mut forwarded = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        let Some(text) = token.to_str() else {
            forwarded.push(token.clone());
            continue;
        };

        match text {
            "--" => {
                forwarded.push(token.clone());
                forwarded.extend(iter.by_ref().cloned());
            }
            "-c" | "--cores" => {
                let value = iter
                    .next()
                    .ok_or_else(|| UsageError::MissingValue(text.to_string()))?;
                cores = Some(parse_cores(&value.to_string_lossy())?);
            }
            _ => match attached_cores_value(text) {
                Some(value) => cores = Some(parse_cores(value)?),
                None => forwarded.push(token.clone()),
            },
        }
    }

    Ok((cores, forwarded))
}

fn attached_cores_value(token: &str) -> Option<&str> {
    token
        .strip_prefix("--cores=")
        .or_else(|| token.strip_prefix("-c="))
        .or_else(|| token.strip_prefix("-c").filter(|value| !value.is_empty()))
}

fn parse_cores(value: &str) -> Result<NonZeroU32, UsageError> {
    value
        .parse()
        .map_err(|_| UsageError::InvalidCores(value.to_string()))
}
