//! workflowtool - scaffold and run Snakemake-based analysis pipelines

pub mod cli;
pub mod core;
pub mod engine;
pub mod execution;
pub mod scaffold;

// Re-export commonly used types
pub use self::core::{BundledResources, ConfigError, ConfigurationDocument, ResourceProvider, UsageError};
pub use engine::{CommandInvocation, Cores, EngineConfig, EngineLauncher, ExitOutcome, SubprocessLauncher};
pub use execution::{PipelineRunner, RunError, RunOptions};
pub use scaffold::{init_pipeline, InitError, PipelineDirectory, ScaffoldReport};
