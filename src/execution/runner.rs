//! Pipeline runner - validates the configuration and hands off to the engine

use crate::{
    core::{resources::ENTRY_POINT, ConfigError, ConfigurationDocument, ResourceError, ResourceProvider},
    engine::{CommandInvocation, Cores, EngineConfig, EngineError, EngineLauncher, ExitOutcome},
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Error types for `run`
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to locate workflow: {0}")]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Options for a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Pipeline directory holding `workflowtool.yaml`
    pub working_dir: PathBuf,

    /// Core limit passed to the engine
    pub cores: Cores,

    /// Tokens passed through to the engine unchanged
    pub forwarded: Vec<OsString>,
}

impl RunOptions {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            cores: Cores::All,
            forwarded: Vec::new(),
        }
    }

    pub fn with_cores(mut self, cores: Cores) -> Self {
        self.cores = cores;
        self
    }

    pub fn with_forwarded<I, S>(mut self, forwarded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.forwarded = forwarded.into_iter().map(Into::into).collect();
        self
    }
}

/// Runs a pipeline through the workflow engine
pub struct PipelineRunner<L> {
    launcher: L,
    resources: Arc<dyn ResourceProvider>,
    config: EngineConfig,
}

impl<L: EngineLauncher> PipelineRunner<L> {
    pub fn new(launcher: L, resources: Arc<dyn ResourceProvider>, config: EngineConfig) -> Self {
        Self {
            launcher,
            resources,
            config,
        }
    }

    /// Validate the pipeline configuration and run the engine once
    ///
    /// The engine is only started after `workflowtool.yaml` has been read and
    /// parsed. Its exit status is returned as-is; a non-zero status is not an
    /// error here.
    pub async fn run(&self, options: RunOptions) -> Result<ExitOutcome, RunError> {
        let _config = ConfigurationDocument::load_from_dir(&options.working_dir)?;
        debug!("Configuration in {} is valid", options.working_dir.display());

        let invocation = self.invocation(options)?;
        info!("Starting {} with --cores={}", invocation.program(), invocation.cores());

        let outcome = self.launcher.launch(invocation).await?;
        debug!("Engine finished with exit code {}", outcome.code());

        Ok(outcome)
    }

    /// Build the engine command line for a run
    pub fn invocation(&self, options: RunOptions) -> Result<CommandInvocation, RunError> {
        let entry_point = self.resources.resolve_path(ENTRY_POINT)?;

        Ok(CommandInvocation::new(
            self.config.program(),
            options.cores,
            entry_point,
            options.forwarded,
        )
        .with_working_dir(options.working_dir))
    }
}
