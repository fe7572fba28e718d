use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use workflowtool::cli::commands::{InitCommand, RunCommand};
use workflowtool::cli::output::{format_error, format_init_notices};
use workflowtool::cli::{Cli, Command};
use workflowtool::core::{BundledResources, DirectoryResources, ResourceProvider};
use workflowtool::engine::{EngineConfig, SubprocessLauncher};
use workflowtool::execution::{PipelineRunner, RunError};
use workflowtool::scaffold::init_pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging. RUST_LOG takes precedence over --verbose.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    let resources: Arc<dyn ResourceProvider> = match &cli.resources {
        Some(dir) => Arc::new(DirectoryResources::new(dir)),
        None => Arc::new(BundledResources::new()),
    };

    // Execute command
    match &cli.command {
        Command::Init(cmd) => init(cmd, resources.as_ref()),
        Command::Run(cmd) => run(cmd, &cli, resources).await,
    }
}

fn init(cmd: &InitCommand, resources: &dyn ResourceProvider) -> Result<()> {
    match init_pipeline(&cmd.directory, &cmd.unknown, resources) {
        Ok(report) => {
            for notice in format_init_notices(&report) {
                println!("{}", notice);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e));
            std::process::exit(1);
        }
    }
}

async fn run(cmd: &RunCommand, cli: &Cli, resources: Arc<dyn ResourceProvider>) -> Result<()> {
    let working_dir = std::env::current_dir().context("Failed to determine the current directory")?;
    let options = match cmd.options(working_dir) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", format_error(&e));
            std::process::exit(1);
        }
    };

    let mut engine_config = EngineConfig::new();
    if let Some(program) = &cli.engine {
        engine_config = engine_config.with_program(program.clone());
    }

    let runner = PipelineRunner::new(SubprocessLauncher::new(), resources, engine_config);

    match runner.run(options).await {
        // The engine's exit status becomes ours, whatever it is.
        Ok(outcome) => std::process::exit(outcome.code()),
        // Nothing can run without a readable configuration.
        Err(RunError::Config(e)) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Failed to run the pipeline"),
    }
}
