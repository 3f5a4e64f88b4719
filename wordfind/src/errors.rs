//! Error types for the word search library.
//!
//! Every condition here represents a usage or input error detected eagerly
//! at the boundary of the operation that first needs the data. Nothing is
//! retried and no partial result is ever returned.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for word search operations
pub type WordFindResult<T> = Result<T, WordFindError>;

/// Errors that can occur while setting up or running a search
#[derive(Error, Debug)]
pub enum WordFindError {
    /// A required collaborator (word source, board contents) is absent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Board dimensions or contents violate a structural invariant
    #[error("Malformed board contents: {0}")]
    MalformedContent(String),

    /// A search was requested before the dictionary and board were established
    #[error("Not initialized: {0}")]
    NotInitialized(&'static str),

    /// The word list file does not exist
    #[error("Word list not found: {0}")]
    FileNotFound(PathBuf),

    /// Propagated I/O failure while reading the word list
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration loading or merging failed
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl WordFindError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn malformed_content(msg: impl Into<String>) -> Self {
        Self::MalformedContent(msg.into())
    }

    pub fn not_initialized(what: &'static str) -> Self {
        Self::NotInitialized(what)
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
