//! Errors raised by single-node operations

use thiserror::Error;

/// Errors that can occur when working with entries and directories
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// No child with this name
    #[error("Not found: {0}")]
    NotFound(String),

    /// Attempted a container operation on a plain file
    #[error("Not a directory: {0}")]
    NotADirectory(String),

    /// Name cannot be used for an entry
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Path is empty or malformed
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
