//! Error types for shiplog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ShiplogError
pub type Result<T> = std::result::Result<T, ShiplogError>;

/// Main error type for shiplog operations
#[derive(Debug, Error)]
pub enum ShiplogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Schema outline errors
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Reference is neither a tag nor a recognizable date
    #[error("'{0}' is neither a tag nor a date")]
    InvalidDate(String),

    /// Commit carries a timestamp chrono cannot represent
    #[error("Commit {hash} has an out-of-range timestamp")]
    InvalidTimestamp { hash: String },

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Errors from fetching or decoding schema outlines
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Container runtime binary is not on PATH
    #[error("Container runtime '{0}' not found on PATH")]
    RuntimeNotFound(String),

    /// An external command could not be run or exited unsuccessfully
    #[error("Command failed: {command} - {reason}")]
    CommandFailed { command: String, reason: String },

    /// Command output was not a valid outline
    #[error("Failed to decode schema outline from {source_name}: {error}")]
    Decode {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    /// Catalog was queried before it was loaded
    #[error("Resource catalog has not been loaded")]
    CatalogNotLoaded,
}
