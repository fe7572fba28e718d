//! Workflow engine invocation
//!
//! Building the engine command line and handing it to a launcher that runs
//! it to completion.

pub mod client;
pub mod invocation;
pub mod subprocess;

use async_trait::async_trait;
use thiserror::Error;

pub use client::{EngineConfig, DEFAULT_ENGINE};
pub use invocation::{CommandInvocation, Cores, ExitOutcome};
pub use subprocess::SubprocessLauncher;

/// Error types for engine launches
///
/// A non-zero exit status is not an error; it is carried in `ExitOutcome`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Trait for running an engine invocation - allows for different implementations
#[async_trait]
pub trait EngineLauncher: Send + Sync {
    /// Run the invocation to completion and return its exit status
    async fn launch(&self, invocation: CommandInvocation) -> Result<ExitOutcome, EngineError>;
}
