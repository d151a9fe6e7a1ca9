//! Error types and error handling for the notetree corpus reader.
//!
//! This module defines the error types used throughout the crate.
//! Presentation of errors (CLI exit codes, colored output) is handled
//! in the respective adapter modules.

use thiserror::Error;

/// Result type alias for notetree operations
pub type Result<T> = std::result::Result<T, NoteTreeError>;

/// Main error type for the corpus reader
#[derive(Error, Debug)]
pub enum NoteTreeError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Scan failed: {0}")]
    ScanFailed(String),

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl NoteTreeError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, NoteTreeError::InvalidPath(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            NoteTreeError::ConfigError(_) | NoteTreeError::TomlError(_)
        )
    }

    /// Check if this error came from reading a single document
    pub fn is_read_failure(&self) -> bool {
        matches!(self, NoteTreeError::ReadFailed { .. })
    }
}
