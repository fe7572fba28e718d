//! Pipeline execution

pub mod runner;

pub use runner::{PipelineRunner, RunError, RunOptions};
