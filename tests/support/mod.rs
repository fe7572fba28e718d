//! Shared helpers for workflowtool integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Name of the file the fake engine writes its arguments to
pub const RECORDED_ARGS: &str = "engine-args.txt";

/// Minimal valid pipeline configuration
pub const VALID_CONFIG: &str = "samplesheet: samples.tsv\nreference: reference.fasta\n";

/// Write a fake workflow engine into `dir`
///
/// The script records one argument per line in `engine-args.txt` next to
/// itself and exits with `exit_code`.
#[cfg(unix)]
pub fn write_fake_engine(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-snakemake");
    let record = dir.join(RECORDED_ARGS);
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > '{}'\nexit {}\n",
            record.display(),
            exit_code
        ),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Arguments recorded by the fake engine, or `None` if it never ran
pub fn recorded_args(dir: &Path) -> Option<Vec<String>> {
    std::fs::read_to_string(dir.join(RECORDED_ARGS))
        .ok()
        .map(|content| content.lines().map(str::to_string).collect())
}

/// Create a pipeline directory holding a valid configuration
pub fn pipeline_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("workflowtool.yaml"), VALID_CONFIG).unwrap();
    dir
}

/// Recursively list every entry below `dir`
pub fn entries(dir: &Path) -> Vec<PathBuf> {
    let mut found = Vec::new();
    if let Ok(read) = std::fs::read_dir(dir) {
        for entry in read.flatten() {
            let path = entry.path();
            if path.is_dir() {
                found.extend(entries(&path));
            }
            found.push(path);
        }
    }
    found.sort();
    found
}
