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

    /// Entry store errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Report rendering errors
    #[error(transparent)]
    Report(#[from] ReportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

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

/// Entry store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entry text was empty after trimming
    #[error("Entry text cannot be empty")]
    EmptyText,

    /// No entry with the given timestamp exists
    #[error("No entry found with timestamp {0}")]
    EntryNotFound(String),

    /// The store document exists but could not be parsed
    #[error("Changelog document at {path} is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// Failed to serialize the entry set
    #[error("Failed to serialize changelog: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Report rendering errors
#[derive(Debug, Error)]
pub enum ReportError {
    /// There are no entries to render
    #[error("Changelog is empty - nothing to export")]
    Empty,

    /// Failed to write the report to its destination
    #[error("Failed to write report to {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

impl ShiplogError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
