//! Directory type
//!
//! A directory is an entry that owns a keyed collection of child entries.

use crate::entry::{Entry, EntryKind, Metadata};
use crate::error::TreeError;
use serde::Serialize;
use std::collections::BTreeMap;

/// A directory
///
/// Children are keyed by name and owned exclusively by this directory.
/// Iteration is always in name order.
#[derive(Debug, Serialize)]
pub struct Directory {
    #[serde(flatten)]
    meta: Metadata,
    /// Entries in this directory (name -> entry)
    children: BTreeMap<String, Entry>,
}

impl Directory {
    /// Creates a new empty directory
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: Metadata::new(name),
            children: BTreeMap::new(),
        }
    }

    /// Returns the directory metadata
    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    pub fn name(&self) -> &str {
        self.meta.name()
    }

    /// Sets the modification time to now
    pub fn touch(&mut self) {
        self.meta.touch();
    }

    /// Adds an entry to the directory
    ///
    /// An existing child with the same name is replaced (last write wins) and
    /// handed back to the caller.
    pub fn add(&mut self, entry: Entry) -> Option<Entry> {
        let displaced = self.children.insert(entry.name().to_string(), entry);
        self.meta.touch();
        displaced
    }

    /// Removes a child by name
    pub fn remove(&mut self, name: &str) -> Result<Entry, TreeError> {
        let removed = self
            .children
            .remove(name)
            .ok_or_else(|| TreeError::NotFound(name.to_string()))?;
        self.meta.touch();
        Ok(removed)
    }

    /// Gets a child by name
    pub fn find(&self, name: &str) -> Result<&Entry, TreeError> {
        self.children
            .get(name)
            .ok_or_else(|| TreeError::NotFound(name.to_string()))
    }

    /// Gets a mutable child by name
    pub fn find_mut(&mut self, name: &str) -> Result<&mut Entry, TreeError> {
        self.children
            .get_mut(name)
            .ok_or_else(|| TreeError::NotFound(name.to_string()))
    }

    /// Checks if a direct child with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Snapshot of the children, sorted by name
    pub fn children(&self) -> Vec<&Entry> {
        self.children.values().collect()
    }

    /// Names of the children, sorted
    pub fn child_names(&self) -> Vec<&str> {
        self.children.keys().map(String::as_str).collect()
    }

    /// Counts the number of children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Formats the one-line summary for this directory
    pub fn render(&self) -> String {
        format!(
            "{:<5} {:<20} {:<3} {}",
            EntryKind::Directory.marker(),
            self.meta.modified_at().to_string(),
            self.child_count(),
            self.meta.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_creation() {
        let dir = Directory::new("docs");
        assert_eq!(dir.name(), "docs");
        assert_eq!(dir.child_count(), 0);
        assert!(dir.is_empty());
    }

    #[test]
    fn test_add_entry() {
        let mut dir = Directory::new("docs");
        assert!(dir.add(Entry::file("readme")).is_none());
        assert_eq!(dir.child_count(), 1);
        assert!(dir.contains("readme"));
    }

    #[test]
    fn test_add_duplicate_overwrites() {
        let mut dir = Directory::new("docs");
        let first = Entry::file("readme");
        let first_id = first.id();
        dir.add(first);

        let second = Entry::directory("readme");
        let second_id = second.id();
        let displaced = dir.add(second).expect("first entry should be displaced");

        assert_eq!(displaced.id(), first_id);
        assert_eq!(dir.child_count(), 1);
        let current = dir.find("readme").unwrap();
        assert_eq!(current.id(), second_id);
        assert!(current.is_directory());
    }

    #[test]
    fn test_remove_entry() {
        let mut dir = Directory::new("docs");
        dir.add(Entry::file("readme"));

        let removed = dir.remove("readme").unwrap();
        assert_eq!(removed.name(), "readme");
        assert_eq!(dir.child_count(), 0);
    }

    #[test]
    fn test_remove_nonexistent_entry() {
        let mut dir = Directory::new("docs");
        assert_eq!(
            dir.remove("ghost").unwrap_err(),
            TreeError::NotFound("ghost".to_string())
        );
    }

    #[test]
    fn test_find_entry() {
        let mut dir = Directory::new("docs");
        dir.add(Entry::file("readme"));

        assert_eq!(dir.find("readme").unwrap().name(), "readme");
        assert!(matches!(dir.find("ghost"), Err(TreeError::NotFound(_))));
        assert!(dir.find_mut("readme").is_ok());
    }

    #[test]
    fn test_children_sorted_by_name() {
        let mut dir = Directory::new("docs");
        dir.add(Entry::file("zeta"));
        dir.add(Entry::directory("alpha"));
        dir.add(Entry::file("mid"));

        let names: Vec<&str> = dir.children().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
        assert_eq!(dir.child_names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_children_snapshot_is_restartable() {
        let mut dir = Directory::new("docs");
        dir.add(Entry::file("a"));
        dir.add(Entry::file("b"));

        let first: Vec<&str> = dir.children().iter().map(|e| e.name()).collect();
        let second: Vec<&str> = dir.children().iter().map(|e| e.name()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mutation_touches_directory() {
        let mut dir = Directory::new("docs");
        let created = dir.meta().created_at();
        dir.add(Entry::file("readme"));
        assert!(dir.meta().modified_at() >= created);
        assert_eq!(dir.meta().created_at(), created);
    }

    #[test]
    fn test_render_directory_line() {
        let mut dir = Directory::new("docs");
        dir.add(Entry::file("a"));
        dir.add(Entry::file("b"));

        let line = dir.render();
        assert!(line.starts_with("dir   "));
        assert!(line.ends_with("2   docs"));
    }
}
