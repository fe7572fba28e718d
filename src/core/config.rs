//! Pipeline configuration file

use serde::Deserialize;
use serde_yaml::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file inside a pipeline directory
pub const CONFIG_FILE_NAME: &str = "workflowtool.yaml";

/// Error types for loading the pipeline configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Pipeline configuration file '{}' not found. Please see the documentation for how to create it.",
        .0.display()
    )]
    Missing(PathBuf),

    #[error("Pipeline configuration file '{}' is not valid YAML: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to read pipeline configuration file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parsed pipeline configuration
///
/// Only parseability is checked here. The keys are interpreted by the
/// workflow itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationDocument {
    root: Value,
}

impl ConfigurationDocument {
    /// Load the configuration from `workflowtool.yaml` inside `directory`
    pub fn load_from_dir<P: AsRef<Path>>(directory: P) -> Result<Self, ConfigError> {
        Self::from_file(directory.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                let name = path.file_name().map(PathBuf::from);
                ConfigError::Missing(name.unwrap_or_else(|| path.to_path_buf()))
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::from_yaml(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse the configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }
}
