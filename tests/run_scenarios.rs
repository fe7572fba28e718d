//! Scenarios for `workflowtool run`
//!
//! A shell script stands in for Snakemake and records the arguments it was
//! started with.

#![cfg(unix)]

mod support;

use std::num::NonZeroU32;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::Arc;
use support::{pipeline_dir, recorded_args, write_fake_engine};
use workflowtool::core::resources::ENTRY_POINT;
use workflowtool::{
    BundledResources, ConfigError, Cores, EngineConfig, PipelineRunner, ResourceProvider, RunError,
    RunOptions, SubprocessLauncher,
};

fn runner(engine: &Path, cache: &Path) -> PipelineRunner<SubprocessLauncher> {
    let resources: Arc<dyn ResourceProvider> = Arc::new(BundledResources::with_cache_dir(cache));
    PipelineRunner::new(
        SubprocessLauncher::new(),
        resources,
        EngineConfig::new().with_program(engine.display().to_string()),
    )
}

/// Run the workflowtool binary inside `workdir` with a fake engine
fn run_binary(workdir: &Path, engine: &Path, cache: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_workflowtool"))
        .current_dir(workdir)
        .env("XDG_CACHE_HOME", cache)
        .arg("--engine")
        .arg(engine)
        .arg("run")
        .args(args)
        .output()
        .unwrap()
}

#[tokio::test]
async fn run_passes_cores_and_entry_point_in_order() {
    let engine_dir = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();
    let workdir = pipeline_dir();
    let engine = write_fake_engine(engine_dir.path(), 0);

    let options = RunOptions::new(workdir.path()).with_cores(Cores::from(NonZeroU32::new(4)));
    let outcome = runner(&engine, cache.path()).run(options).await.unwrap();

    assert!(outcome.success());
    let entry_point = cache.path().join(ENTRY_POINT);
    assert_eq!(
        recorded_args(engine_dir.path()).unwrap(),
        vec![
            "--cores=4".to_string(),
            "-p".to_string(),
            "-s".to_string(),
            entry_point.display().to_string(),
        ]
    );
    assert!(entry_point.is_file());
}

#[tokio::test]
async fn run_without_cores_uses_all() {
    let engine_dir = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();
    let workdir = pipeline_dir();
    let engine = write_fake_engine(engine_dir.path(), 0);

    runner(&engine, cache.path())
        .run(RunOptions::new(workdir.path()))
        .await
        .unwrap();

    let args = recorded_args(engine_dir.path()).unwrap();
    assert_eq!(args[0], "--cores=all");
}

#[tokio::test]
async fn run_forwards_trailing_arguments_verbatim() {
    let engine_dir = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();
    let workdir = pipeline_dir();
    let engine = write_fake_engine(engine_dir.path(), 0);

    let options = RunOptions::new(workdir.path())
        .with_forwarded(["--dry-run", "output.txt"]);
    runner(&engine, cache.path()).run(options).await.unwrap();

    let args = recorded_args(engine_dir.path()).unwrap();
    assert_eq!(args.len(), 6);
    assert_eq!(&args[4..], ["--dry-run", "output.txt"]);
}

#[tokio::test]
async fn run_without_config_never_starts_engine() {
    let engine_dir = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();
    let workdir = tempfile::tempdir().unwrap();
    let engine = write_fake_engine(engine_dir.path(), 0);

    let result = runner(&engine, cache.path())
        .run(RunOptions::new(workdir.path()))
        .await;

    assert!(matches!(result, Err(RunError::Config(ConfigError::Missing(_)))));
    assert!(recorded_args(engine_dir.path()).is_none());
}

#[test]
fn binary_without_config_exits_with_message() {
    let engine_dir = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();
    let workdir = tempfile::tempdir().unwrap();
    let engine = write_fake_engine(engine_dir.path(), 0);

    let output = run_binary(workdir.path(), &engine, cache.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'workflowtool.yaml' not found"));
    assert!(recorded_args(engine_dir.path()).is_none());
}

#[test]
fn binary_with_malformed_config_exits_with_parse_error() {
    let engine_dir = tempfile::tempdir().unwrap();
    let cache = tempfile::tempdir().unwrap();
    let workdir = tempfile::tempdir().unwrap();
    std::fs::write(workdir.path().join("workflowtool.yaml"), "samplesheet: [unclosed\n").unwrap();
    let engine = write_fake_engine(engine_dir.path(), 0);

    let output = run_binary(workdir.path(), &engine, cache.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not valid YAML"));
    assert!(recorded_args(engine_dir.path()).is_none());
}

#[test]
fn binary_exit_status_matches_engine() {
    for code in [0, 1, 2] {
        let engine_dir = tempfile::tempdir().unwrap();
        let cache = tempfile::tempdir().unwrap();
        let workdir = pipeline_dir();
        let engine = write_fake_engine(engine_dir.path(), code);

        let output = run_binary(workdir.path(), &engine, cache.path(), &["-c", "4", "--dry-run", "output.txt"]);

        assert_eq!(output.status.code(), Some(code), "engine exited with {}", code);
        let args = recorded_args(engine_dir.path()).unwrap();
        assert_eq!(args[0], "--cores=4");
        assert_eq!(&args[1..3], ["-p", "-s"]);
        assert!(args[3].ends_with(ENTRY_POINT));
        assert_eq!(&args[4..], ["--dry-run", "output.txt"]);
    }
}

#[test]
fn binary_reports_missing_engine() {
    let cache = tempfile::tempdir().unwrap();
    let workdir = pipeline_dir();
    let missing = workdir.path().join("no-such-engine");

    let output = run_binary(workdir.path(), &missing, cache.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to start"));
}

#[test]
fn binary_uses_entry_point_from_resource_directory() {
    let engine_dir = tempfile::tempdir().unwrap();
    let workflow = tempfile::tempdir().unwrap();
    std::fs::write(workflow.path().join(ENTRY_POINT), "rule all:\n").unwrap();
    let workdir = pipeline_dir();
    let engine = write_fake_engine(engine_dir.path(), 0);

    let output = Command::new(env!("CARGO_BIN_EXE_workflowtool"))
        .current_dir(workdir.path())
        .arg("--engine")
        .arg(&engine)
        .arg("--resources")
        .arg(workflow.path())
        .args(["run", "target.txt", "-c2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let entry_point = workflow.path().join(ENTRY_POINT);
    assert_eq!(
        recorded_args(engine_dir.path()).unwrap(),
        vec![
            "--cores=2".to_string(),
            "-p".to_string(),
            "-s".to_string(),
            entry_point.display().to_string(),
            "target.txt".to_string(),
        ]
    );
}
