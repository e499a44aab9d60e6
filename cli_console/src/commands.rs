//! CLI Commands for the Namespace
//!
//! This module turns user intents into namespace operations and the messages
//! shown back to the user.

use services_namespace::{Namespace, NamespaceError, NamespaceOperations};
use tracing::debug;

/// CLI Command handler
///
/// Every command returns the line to print: `Ok` on success, `Err` with the
/// reason otherwise. A failed command leaves the namespace untouched.
#[derive(Debug, Default)]
pub struct CommandHandler {
    /// The namespace being organised
    pub namespace: Namespace,
}

impl CommandHandler {
    /// Creates a new command handler with an empty namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a file, optionally inside a directory
    ///
    /// Example: `touch notes in docs`
    ///
    /// While no directory exists at all, the file goes to the top level
    /// whatever directory was asked for.
    pub fn create_file(&mut self, name: &str, directory: Option<&str>) -> Result<String, String> {
        let parent = self.effective_parent(directory);
        self.namespace
            .create_file(name, parent)
            .map_err(describe)?;

        Ok("File created successfully".to_string())
    }

    /// Creates a folder, optionally inside a directory
    ///
    /// Example: `mkdir drafts in docs`
    pub fn create_folder(
        &mut self,
        name: &str,
        directory: Option<&str>,
    ) -> Result<String, String> {
        let parent = self.effective_parent(directory);
        self.namespace
            .create_directory(name, parent)
            .map_err(describe)?;

        Ok("Folder created successfully".to_string())
    }

    /// Deletes a file or folder, with everything below it
    ///
    /// Example: `rm drafts`
    pub fn delete(&mut self, name: &str) -> Result<String, String> {
        self.namespace.delete(name).map_err(describe)?;
        Ok(format!("{} deleted successfully", name))
    }

    /// Moves a file or folder into a directory
    ///
    /// Example: `mv notes archive`
    pub fn move_entry(&mut self, name: &str, destination: &str) -> Result<String, String> {
        self.namespace
            .move_entry(name, destination)
            .map_err(describe)?;

        Ok(format!("{} moved successfully to {}", name, destination))
    }

    /// Reports where a file or folder lives
    ///
    /// Example: `find notes` prints `/docs/notes`
    pub fn search(&self, name: &str) -> Result<String, String> {
        let path = self.namespace.locate(name).map_err(describe)?;
        Ok(path.to_string())
    }

    /// Checks if any entry has this name
    pub fn exists(&self, name: &str) -> bool {
        self.namespace.exists(name)
    }

    /// Names-only tree
    pub fn tree(&self) -> String {
        self.namespace.render_tree()
    }

    /// Tree with kind, modified time and child count on every line
    pub fn detailed_tree(&self) -> String {
        self.namespace.render_detailed_tree()
    }

    /// Tree as pretty-printed JSON
    pub fn tree_json(&self) -> Result<String, String> {
        self.namespace
            .render_json()
            .map_err(|e| format!("tree failed: {}", e))
    }

    /// Names of all directories, one per line
    pub fn list_directories(&self) -> String {
        let names = self.namespace.directory_names();
        if names.is_empty() {
            return "No directories".to_string();
        }
        let mut output = String::from("List of available directories:\n");
        for name in names {
            output.push_str(name);
            output.push('\n');
        }
        output
    }

    fn effective_parent<'a>(&self, directory: Option<&'a str>) -> Option<&'a str> {
        if self.namespace.directory_count() == 0 {
            if let Some(dir) = directory {
                debug!(directory = dir, "no directories yet, creating at top level");
            }
            return None;
        }
        directory
    }
}

/// User-facing text for a failed operation
fn describe(err: NamespaceError) -> String {
    match err {
        NamespaceError::DirectoryNotFound(_) => "Directory does not exist".to_string(),
        other => other.to_string(),
    }
}
