//! Core building blocks shared by the commands
//!
//! Configuration loading, bundled resources and the user-facing error type.

pub mod config;
pub mod error;
pub mod resources;

pub use config::{ConfigError, ConfigurationDocument, CONFIG_FILE_NAME};
pub use error::UsageError;
pub use resources::{BundledResources, DirectoryResources, ResourceError, ResourceProvider};
