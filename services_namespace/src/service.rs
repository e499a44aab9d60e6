//! Namespace implementation
//!
//! Owns the forest of top-level entries and keeps the directory index in
//! step with it.

use crate::index::{subtree_directories, DirectoryIndex};
use crate::operations::{NamespaceError, NamespaceOperations};
use crate::render::{render_forest, TreeStyle};
use fs_tree::{Directory, Entry, EntryPath, PathResolver};
use std::collections::BTreeMap;
use std::ops::ControlFlow;
use tracing::{debug, trace};

/// The namespace
///
/// Maintains the tree of entries and provides operations to search and
/// manipulate it.
#[derive(Debug, Default)]
pub struct Namespace {
    /// Top-level entries (name -> entry)
    roots: BTreeMap<String, Entry>,
    /// Every reachable directory, by name
    directory_index: DirectoryIndex,
}

impl Namespace {
    /// Creates an empty namespace
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry at the top level
    ///
    /// An existing top-level entry with the same name is replaced.
    pub fn add(&mut self, entry: Entry) -> Result<EntryPath, NamespaceError> {
        self.insert(&EntryPath::root(), entry)
    }

    /// Gets an entry by its full path
    pub fn get(&self, path: &EntryPath) -> Result<&Entry, NamespaceError> {
        let not_found = || NamespaceError::NotFound(path.to_string());
        let (first, rest) = path.components().split_first().ok_or_else(not_found)?;

        let mut current = self.roots.get(first).ok_or_else(not_found)?;
        for component in rest {
            let dir = current.as_directory().ok_or_else(not_found)?;
            current = dir.find(component).map_err(|_| not_found())?;
        }
        Ok(current)
    }

    /// Paths of every entry with this name, in search order
    pub fn locate_all(&self, name: &str) -> Vec<EntryPath> {
        let mut found = Vec::new();
        self.walk(|trail, entry| {
            if entry.name() == name {
                found.push(EntryPath::from_components(trail.iter().copied()));
            }
            ControlFlow::<()>::Continue(())
        });
        found
    }

    /// Deletes the entry at an explicit path, including its subtree
    pub fn delete_path(&mut self, path: &EntryPath) -> Result<Entry, NamespaceError> {
        let removed = self.remove(path)?;
        debug!(path = %path, "deleted entry");
        Ok(removed)
    }

    /// Checks if a directory with this name is indexed
    pub fn directory_exists(&self, name: &str) -> bool {
        self.directory_index.contains(name)
    }

    /// Number of directories in the tree
    pub fn directory_count(&self) -> usize {
        self.directory_index.len()
    }

    /// Distinct directory names, sorted
    pub fn directory_names(&self) -> Vec<&str> {
        self.directory_index.names()
    }

    /// Read access to the directory index
    pub fn directory_index(&self) -> &DirectoryIndex {
        &self.directory_index
    }

    /// Top-level entries, sorted by name
    pub fn roots(&self) -> Vec<&Entry> {
        self.roots.values().collect()
    }

    /// Total number of entries at every depth
    pub fn entry_count(&self) -> usize {
        self.roots.values().map(|root| root.iter().count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pretty-printed JSON view of the whole forest
    pub fn render_json(&self) -> Result<String, NamespaceError> {
        Ok(serde_json::to_string_pretty(&self.roots)?)
    }

    /// Registers a directory location in the directory index
    ///
    /// Called for every directory that becomes reachable, nested or not.
    fn register_directory(&mut self, location: EntryPath) {
        trace!(path = %location, "registered directory");
        self.directory_index.register(location);
    }

    /// Resolves an optional parent directory name to its location
    fn resolve_parent(&self, parent: Option<&str>) -> Result<EntryPath, NamespaceError> {
        match parent {
            None => Ok(EntryPath::root()),
            Some(name) => self.resolve_directory(name),
        }
    }

    /// Resolves a directory name through the index
    fn resolve_directory(&self, name: &str) -> Result<EntryPath, NamespaceError> {
        self.directory_index.resolve(name).cloned().ok_or_else(|| {
            debug!(directory = name, "directory not in index");
            NamespaceError::DirectoryNotFound(name.to_string())
        })
    }

    /// Gets a directory by location for mutation
    fn directory_mut(&mut self, location: &EntryPath) -> Result<&mut Directory, NamespaceError> {
        let not_found = || NamespaceError::DirectoryNotFound(location.to_string());
        let (first, rest) = location
            .components()
            .split_first()
            .ok_or_else(not_found)?;

        let mut current = self.roots.get_mut(first).ok_or_else(not_found)?;
        for component in rest {
            let dir = current.try_directory_mut()?;
            current = dir.find_mut(component).map_err(|_| not_found())?;
        }
        Ok(current.try_directory_mut()?)
    }

    /// Rejects a subtree if any name in it is unusable
    fn validate_subtree(entry: &Entry) -> Result<(), NamespaceError> {
        for (_, node) in entry.iter() {
            PathResolver::validate_name(node.name())?;
        }
        Ok(())
    }

    /// Places an entry under `parent` and indexes its directories
    ///
    /// A displaced sibling leaves the index together with its subtree.
    fn insert(&mut self, parent: &EntryPath, entry: Entry) -> Result<EntryPath, NamespaceError> {
        Self::validate_subtree(&entry)?;
        let incoming = subtree_directories(&entry, &parent.join(entry.name()));

        let location = self.attach(parent, entry)?;
        for dir in incoming {
            self.register_directory(dir);
        }

        Ok(location)
    }

    /// Places an entry under `parent` without indexing it
    ///
    /// A displaced sibling still leaves the index.
    fn attach(&mut self, parent: &EntryPath, entry: Entry) -> Result<EntryPath, NamespaceError> {
        let location = parent.join(entry.name());

        let displaced = if parent.is_root() {
            self.roots.insert(entry.name().to_string(), entry)
        } else {
            self.directory_mut(parent)?.add(entry)
        };

        if let Some(old) = displaced {
            debug!(path = %location, "replaced existing entry");
            self.unindex(&old, &location);
        }

        Ok(location)
    }

    /// Detaches the entry at `location` and unindexes its directories
    fn remove(&mut self, location: &EntryPath) -> Result<Entry, NamespaceError> {
        let removed = self.detach(location)?;
        self.unindex(&removed, location);
        Ok(removed)
    }

    /// Detaches the entry at `location`, leaving the index alone
    fn detach(&mut self, location: &EntryPath) -> Result<Entry, NamespaceError> {
        let (name, parent) = match (location.name(), location.parent()) {
            (Some(name), Some(parent)) => (name.to_string(), parent),
            _ => return Err(NamespaceError::InvalidPath(location.to_string())),
        };

        let removed = if parent.is_root() {
            self.roots
                .remove(&name)
                .ok_or_else(|| NamespaceError::NotFound(location.to_string()))?
        } else {
            self.directory_mut(&parent)?
                .remove(&name)
                .map_err(|_| NamespaceError::NotFound(location.to_string()))?
        };

        Ok(removed)
    }

    /// Drops every directory of a detached subtree from the index
    fn unindex(&mut self, entry: &Entry, location: &EntryPath) {
        for dir in subtree_directories(entry, location) {
            self.directory_index.unregister(&dir);
        }
    }

    /// Depth-first walk over the forest
    ///
    /// Roots and siblings are visited in name order. `trail` holds the names
    /// from the current root down to `entry`, inclusive: a name is pushed
    /// when a node is entered and popped again on backtrack. The walk stops
    /// at the first `Break`.
    fn walk<'a, B>(
        &'a self,
        mut visit: impl FnMut(&[&'a str], &'a Entry) -> ControlFlow<B>,
    ) -> Option<B> {
        let mut trail: Vec<&'a str> = Vec::new();
        for root in self.roots.values() {
            trail.clear();
            for (depth, entry) in root.iter() {
                trail.truncate(depth);
                trail.push(entry.name());
                if let ControlFlow::Break(found) = visit(trail.as_slice(), entry) {
                    return Some(found);
                }
            }
        }
        None
    }
}

impl NamespaceOperations for Namespace {
    fn create_file(
        &mut self,
        name: &str,
        parent: Option<&str>,
    ) -> Result<EntryPath, NamespaceError> {
        PathResolver::validate_name(name)?;
        let parent = self.resolve_parent(parent)?;
        let location = self.insert(&parent, Entry::file(name))?;
        debug!(path = %location, "created file");
        Ok(location)
    }

    fn create_directory(
        &mut self,
        name: &str,
        parent: Option<&str>,
    ) -> Result<EntryPath, NamespaceError> {
        PathResolver::validate_name(name)?;
        let parent = self.resolve_parent(parent)?;
        let location = self.insert(&parent, Entry::directory(name))?;
        debug!(path = %location, "created directory");
        Ok(location)
    }

    fn add_to_directory(
        &mut self,
        entry: Entry,
        directory: &str,
    ) -> Result<EntryPath, NamespaceError> {
        Self::validate_subtree(&entry)?;
        let parent = self.resolve_directory(directory)?;
        let location = self.insert(&parent, entry)?;
        debug!(path = %location, "added entry to directory");
        Ok(location)
    }

    fn delete(&mut self, name: &str) -> Result<Entry, NamespaceError> {
        let location = self.locate(name)?;
        let removed = self.remove(&location)?;
        debug!(path = %location, "deleted entry");
        Ok(removed)
    }

    fn move_entry(
        &mut self,
        name: &str,
        destination: &str,
    ) -> Result<EntryPath, NamespaceError> {
        let source = self.locate(name)?;
        let target = self.resolve_directory(destination)?;

        if target.starts_with(&source) {
            return Err(NamespaceError::InvalidMove {
                name: name.to_string(),
                destination: destination.to_string(),
            });
        }

        // Nothing below may fail once the source is detached
        if !self.get(&target)?.is_directory() {
            return Err(NamespaceError::DirectoryNotFound(destination.to_string()));
        }

        // A move keeps each directory's place in the index; only its
        // recorded location changes.
        let entry = self.detach(&source)?;
        let before = subtree_directories(&entry, &source);
        let after = subtree_directories(&entry, &target.join(entry.name()));

        let location = self.attach(&target, entry)?;
        for (old, new) in before.iter().zip(after) {
            self.directory_index.relocate(old, new);
        }
        debug!(from = %source, to = %location, "moved entry");
        Ok(location)
    }

    /// Path of the first entry with this name
    ///
    /// Searches each root in name order, descending into directories before
    /// moving on to the next sibling. The returned path runs from the root
    /// down to the match, both inclusive.
    fn locate(&self, name: &str) -> Result<EntryPath, NamespaceError> {
        self.walk(|trail, entry| {
            if entry.name() == name {
                ControlFlow::Break(EntryPath::from_components(trail.iter().copied()))
            } else {
                ControlFlow::Continue(())
            }
        })
        .ok_or_else(|| {
            debug!(name, "no entry with this name");
            NamespaceError::NotFound(name.to_string())
        })
    }

    fn exists(&self, name: &str) -> bool {
        self.walk(|_, entry| {
            if entry.name() == name {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_some()
    }

    fn render_tree(&self) -> String {
        render_forest(self.roots.values(), TreeStyle::Names)
    }

    fn render_detailed_tree(&self) -> String {
        render_forest(self.roots.values(), TreeStyle::Detailed)
    }
}
