//! Workflow engine configuration

/// Default workflow engine executable, looked up on `PATH`
pub const DEFAULT_ENGINE: &str = "snakemake";

/// Configuration for launching the workflow engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Path to the engine executable
    ///
    /// If not provided, defaults to "snakemake" (assumes it's on PATH).
    pub program: Option<String>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Executable that will be spawned
    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_ENGINE)
    }
}
