//! Creating new pipeline directories

use crate::core::resources::{CONFIG_TEMPLATE, SAMPLESHEET_TEMPLATE};
use crate::core::{ResourceError, ResourceProvider, UsageError, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Files copied into every new pipeline directory, in write order
pub const TEMPLATE_FILES: [&str; 2] = [CONFIG_TEMPLATE, SAMPLESHEET_TEMPLATE];

/// Error types for `init`
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("Failed to load template: {0}")]
    Template(#[from] ResourceError),
}

/// A directory holding one pipeline's configuration and sample sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineDirectory {
    path: PathBuf,
}

impl PipelineDirectory {
    /// Validate a pipeline directory path
    ///
    /// The path must not contain spaces.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, UsageError> {
        let path = path.into();
        if path.to_string_lossy().contains(' ') {
            return Err(UsageError::DirectoryNameHasSpaces);
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the configuration file inside this directory
    pub fn config_path(&self) -> PathBuf {
        self.path.join(CONFIG_FILE_NAME)
    }
}

/// Outcome of a successful `init`
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub directory: PipelineDirectory,

    /// Files written into the directory
    pub files: Vec<PathBuf>,
}

/// Create a new pipeline directory and copy the default templates into it
///
/// `unknown_args` are command-line tokens the parser did not recognize; any
/// of them aborts before the filesystem is touched. The directory is created
/// non-recursively, so an existing directory or a missing parent is an error.
/// If a template cannot be written, the freshly created directory is removed
/// again.
pub fn init_pipeline(
    directory: &Path,
    unknown_args: &[String],
    resources: &dyn ResourceProvider,
) -> Result<ScaffoldReport, InitError> {
    if !unknown_args.is_empty() {
        return Err(UsageError::UnknownArguments(unknown_args.to_vec()).into());
    }

    let directory = PipelineDirectory::new(directory)?;

    let templates = TEMPLATE_FILES
        .iter()
        .map(|name| resources.read_text(name).map(|content| (*name, content)))
        .collect::<Result<Vec<_>, _>>()?;

    fs::create_dir(directory.path())
        .map_err(|e| UsageError::filesystem(directory.path(), e))?;
    debug!("Created directory {}", directory.path().display());

    let files = populate(directory.path(), &templates)?;

    debug!("Scaffolded pipeline directory {}", directory.path().display());

    Ok(ScaffoldReport { directory, files })
}

/// Write the templates into a freshly created directory, removing the
/// directory again if any write fails
fn populate(directory: &Path, templates: &[(&str, String)]) -> Result<Vec<PathBuf>, UsageError> {
    let mut files = Vec::with_capacity(templates.len());
    for (name, content) in templates {
        let target = directory.join(name);
        if let Err(e) = fs::write(&target, content) {
            if let Err(cleanup) = fs::remove_dir_all(directory) {
                warn!(
                    "Failed to remove incomplete pipeline directory {}: {}",
                    directory.display(),
                    cleanup
                );
            }
            return Err(UsageError::filesystem(&target, e));
        }
        debug!("Wrote {}", target.display());
        files.push(target);
    }
    Ok(files)
}
