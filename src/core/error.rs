//! Errors reported back to the user of the command line

use std::path::PathBuf;
use thiserror::Error;

/// Error for invalid command-line usage
///
/// Reported with its message and a non-zero exit status.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("These arguments are unknown: {}", .0.join(" "))]
    UnknownArguments(Vec<String>),

    #[error("Invalid value '{0}' for '--cores <N>': expected a positive integer")]
    InvalidCores(String),

    #[error("Option '{0}' requires a value")]
    MissingValue(String),

    #[error("The name of the pipeline directory must not contain spaces")]
    DirectoryNameHasSpaces,

    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UsageError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UsageError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
