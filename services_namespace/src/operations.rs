//! Namespace operations
//!
//! This module defines the operations the namespace offers to its callers.

use fs_tree::{Entry, EntryPath, TreeError};
use thiserror::Error;

/// Errors that can occur during namespace operations
#[derive(Debug, Error)]
pub enum NamespaceError {
    /// No entry with this name (or path) anywhere in the tree
    #[error("File/directory not found: {0}")]
    NotFound(String),

    /// Named destination directory is not in the directory index
    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(String),

    /// Name cannot be used for an entry
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Path is empty or malformed
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A directory cannot be moved into itself or below itself
    #[error("Cannot move {name} into {destination}: destination is inside {name}")]
    InvalidMove { name: String, destination: String },

    /// JSON rendering failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<TreeError> for NamespaceError {
    fn from(err: TreeError) -> Self {
        match err {
            TreeError::NotFound(name) => NamespaceError::NotFound(name),
            TreeError::NotADirectory(name) => NamespaceError::DirectoryNotFound(name),
            TreeError::InvalidName(name) => NamespaceError::InvalidName(name),
            TreeError::InvalidPath(path) => NamespaceError::InvalidPath(path),
        }
    }
}

/// Namespace operations trait
///
/// The contract between the namespace and whatever drives it (a menu, a
/// script, a test). Every failure is returned to the caller unchanged.
pub trait NamespaceOperations {
    /// Create a file
    ///
    /// At the top level when `parent` is `None`, otherwise inside the named
    /// directory. An existing sibling with the same name is replaced.
    fn create_file(&mut self, name: &str, parent: Option<&str>)
        -> Result<EntryPath, NamespaceError>;

    /// Create a directory
    ///
    /// Same placement rules as `create_file`; the directory is registered in
    /// the directory index.
    fn create_directory(
        &mut self,
        name: &str,
        parent: Option<&str>,
    ) -> Result<EntryPath, NamespaceError>;

    /// Attach an existing entry (with its subtree) to the named directory
    fn add_to_directory(
        &mut self,
        entry: Entry,
        directory: &str,
    ) -> Result<EntryPath, NamespaceError>;

    /// Delete the first entry with this name, including everything below it
    ///
    /// Returns the detached entry.
    fn delete(&mut self, name: &str) -> Result<Entry, NamespaceError>;

    /// Move the first entry with this name into the named directory
    ///
    /// Both ends are resolved before anything is mutated.
    fn move_entry(&mut self, name: &str, destination: &str)
        -> Result<EntryPath, NamespaceError>;

    /// Path of the first entry with this name
    fn locate(&self, name: &str) -> Result<EntryPath, NamespaceError>;

    /// Checks if any entry has this name
    fn exists(&self, name: &str) -> bool;

    /// Indented listing of names
    fn render_tree(&self) -> String;

    /// Indented listing of metadata lines
    fn render_detailed_tree(&self) -> String;
}
