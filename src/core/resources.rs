//! Bundled template and workflow resources
//!
//! Resources are addressed by logical name. Two operations are exposed:
//! reading a resource as text (for copying templates) and resolving it to a
//! real filesystem path (for handing the Snakefile to the engine).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// Logical name of the default pipeline configuration template
pub const CONFIG_TEMPLATE: &str = "workflowtool.yaml";

/// Logical name of the default sample sheet template
pub const SAMPLESHEET_TEMPLATE: &str = "samples.tsv";

/// Logical name of the workflow entry point
pub const ENTRY_POINT: &str = "Snakefile";

const BUNDLED: &[(&str, &str)] = &[
    (
        CONFIG_TEMPLATE,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/workflowtool.yaml")),
    ),
    (
        SAMPLESHEET_TEMPLATE,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/samples.tsv")),
    ),
    (
        ENTRY_POINT,
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/Snakefile")),
    ),
];

/// Error types for resource lookup
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Unknown resource: {0}")]
    Unknown(String),

    #[error("Failed to access resource '{name}' at {path}: {source}")]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Capability for retrieving resources that ship with the tool
pub trait ResourceProvider: Send + Sync {
    /// Read a resource as text
    fn read_text(&self, name: &str) -> Result<String, ResourceError>;

    /// Resolve a resource to a readable file on disk
    fn resolve_path(&self, name: &str) -> Result<PathBuf, ResourceError>;
}

/// Resources compiled into the binary
///
/// `resolve_path` materializes the resource below a versioned cache
/// directory, rewriting the file only when its content differs.
#[derive(Debug, Clone)]
pub struct BundledResources {
    cache_dir: PathBuf,
}

impl BundledResources {
    /// Create bundled resources using the per-user cache directory
    pub fn new() -> Self {
        let base = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        Self::with_cache_dir(
            base.join(env!("CARGO_PKG_NAME"))
                .join(env!("CARGO_PKG_VERSION")),
        )
    }

    /// Create bundled resources that materialize files below `cache_dir`
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Directory that receives materialized resources
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn lookup(name: &str) -> Result<&'static str, ResourceError> {
        BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|(_, content)| *content)
            .ok_or_else(|| ResourceError::Unknown(name.to_string()))
    }
}

impl Default for BundledResources {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceProvider for BundledResources {
    fn read_text(&self, name: &str) -> Result<String, ResourceError> {
        Self::lookup(name).map(str::to_string)
    }

    fn resolve_path(&self, name: &str) -> Result<PathBuf, ResourceError> {
        let content = Self::lookup(name)?;
        let path = self.cache_dir.join(name);
        let io_error = |source| ResourceError::Io {
            name: name.to_string(),
            path: path.clone(),
            source,
        };

        let up_to_date = fs::read_to_string(&path)
            .map(|existing| existing == content)
            .unwrap_or(false);

        if !up_to_date {
            debug!("Materializing resource {} at {}", name, path.display());
            fs::create_dir_all(&self.cache_dir).map_err(io_error)?;

            // Readers only ever see a complete file: write aside, then rename.
            let mut staged = NamedTempFile::new_in(&self.cache_dir).map_err(io_error)?;
            staged.write_all(content.as_bytes()).map_err(io_error)?;
            staged.persist(&path).map_err(|e| io_error(e.error))?;
        }

        Ok(path)
    }
}

/// Resources read from a directory on disk
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn existing(&self, name: &str) -> Result<PathBuf, ResourceError> {
        let path = self.root.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(ResourceError::Unknown(name.to_string()))
        }
    }
}

impl ResourceProvider for DirectoryResources {
    fn read_text(&self, name: &str) -> Result<String, ResourceError> {
        let path = self.existing(name)?;
        fs::read_to_string(&path).map_err(|source| ResourceError::Io {
            name: name.to_string(),
            path,
            source,
        })
    }

    fn resolve_path(&self, name: &str) -> Result<PathBuf, ResourceError> {
        self.existing(name)
    }
}
