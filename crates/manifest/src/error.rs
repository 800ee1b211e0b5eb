//! Error types for workspace manifest operations

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, updating, or saving a manifest
#[derive(Debug, Error)]
pub enum Error {
    /// Manifest file does not exist at the given path
    #[error("Manifest not found: {}", path.display())]
    NotFound {
        /// Path that was not found
        path: PathBuf,
    },

    /// Manifest content is not well-formed TOML
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    /// Manifest does not have the shape an operation expects
    #[error("Manifest schema error: {0}")]
    Schema(String),

    /// Manifest could not be serialized back to TOML
    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
