//! Engine subprocess launcher - runs the engine with inherited stdio

use crate::engine::{CommandInvocation, EngineError, EngineLauncher, ExitOutcome};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Launches the engine as a child process and waits for it to exit
///
/// The child shares our stdin, stdout and stderr so its progress is visible
/// live. There is no timeout.
#[derive(Debug, Clone, Default)]
pub struct SubprocessLauncher;

impl SubprocessLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EngineLauncher for SubprocessLauncher {
    async fn launch(&self, invocation: CommandInvocation) -> Result<ExitOutcome, EngineError> {
        debug!("Running: {}", invocation.command_line());

        let mut command = Command::new(invocation.program());
        command
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = invocation.working_dir() {
            command.current_dir(dir);
        }

        let status = command.status().await.map_err(|source| EngineError::Spawn {
            program: invocation.program().to_string(),
            source,
        })?;

        let outcome = ExitOutcome::from(status);
        debug!("{} exited with code {}", invocation.program(), outcome.code());

        Ok(outcome)
    }
}
