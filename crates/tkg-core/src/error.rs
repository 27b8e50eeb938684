//! Centralized error types for TKG.

use thiserror::Error;

/// Main error type for TKG operations.
#[derive(Error, Debug)]
pub enum TkgError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error in '{file}': {message}")]
    Dataset { file: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for TKG operations.
pub type TkgResult<T> = Result<T, TkgError>;

impl TkgError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a dataset error tied to a source file.
    pub fn dataset(file: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Dataset {
            file: file.into(),
            message: msg.into(),
        }
    }
}
