//! Error types for envref

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for envref operations
#[derive(Error, Debug)]
pub enum EnvrefError {
    /// A definition file could not be read
    #[error("Failed to read '{}': {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The active store cannot enumerate variable names
    #[error("Configuration unavailable: {0}")]
    ConfigUnavailable(String),

    /// Prefix extraction was asked for an empty prefix
    #[error("You must provide a non-empty prefix to search for")]
    EmptyPrefix,

    /// A mandatory variable is absent or null
    #[error("Required environment variable: {0}, not found")]
    MissingRequiredVariable(String),

    /// Unrecognized store mode name
    #[error("Invalid store mode: {0}")]
    InvalidMode(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EnvrefError {
    /// Returns true for failures that array lookups fall back from
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EnvrefError::ConfigUnavailable(_) | EnvrefError::EmptyPrefix
        )
    }

    /// Process exit status for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            EnvrefError::MissingRequiredVariable(_) => 2,
            EnvrefError::FileUnreadable { .. } => 3,
            EnvrefError::EmptyPrefix | EnvrefError::InvalidMode(_) => 64,
            _ => 1,
        }
    }
}

/// Result type alias using EnvrefError
pub type Result<T> = std::result::Result<T, EnvrefError>;
