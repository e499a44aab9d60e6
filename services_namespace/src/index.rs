//! Directory index
//!
//! Side table from directory name to the location of every directory that
//! carries the name. It never owns directories; it only records where they
//! are, so it has to be updated together with every tree mutation.

use fs_tree::{Entry, EntryPath};
use std::collections::BTreeMap;

/// Index of directories by name
#[derive(Debug, Default)]
pub struct DirectoryIndex {
    /// name -> locations, oldest registration first
    locations: BTreeMap<String, Vec<EntryPath>>,
}

impl DirectoryIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly created directory location
    ///
    /// Registering a location twice keeps one copy and makes it the most
    /// recent one.
    pub fn register(&mut self, location: EntryPath) {
        let Some(name) = location.name() else {
            return;
        };
        let slots = self.locations.entry(name.to_string()).or_default();
        slots.retain(|existing| existing != &location);
        slots.push(location);
    }

    /// Forgets a directory location
    ///
    /// Returns false if the location was not indexed.
    pub fn unregister(&mut self, location: &EntryPath) -> bool {
        let Some(name) = location.name() else {
            return false;
        };
        let Some(slots) = self.locations.get_mut(name) else {
            return false;
        };
        let before = slots.len();
        slots.retain(|existing| existing != location);
        let removed = slots.len() != before;
        if slots.is_empty() {
            self.locations.remove(name);
        }
        removed
    }

    /// Rewrites an indexed location in place
    ///
    /// Used when a directory moves: it keeps its rank among directories of
    /// the same name. Both paths must end in that name. Returns false if
    /// `from` was not indexed.
    pub fn relocate(&mut self, from: &EntryPath, to: EntryPath) -> bool {
        let Some(slots) = from.name().and_then(|name| self.locations.get_mut(name)) else {
            return false;
        };
        match slots.iter_mut().find(|slot| **slot == *from) {
            Some(slot) => {
                *slot = to;
                true
            }
            None => false,
        }
    }

    /// Location a directory name resolves to
    ///
    /// With several directories sharing the name, the most recently
    /// registered one wins.
    pub fn resolve(&self, name: &str) -> Option<&EntryPath> {
        self.locations.get(name).and_then(|slots| slots.last())
    }

    /// Checks if any directory has this name
    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    /// Distinct directory names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.locations.keys().map(String::as_str).collect()
    }

    /// Every indexed location
    pub fn locations(&self) -> impl Iterator<Item = &EntryPath> {
        self.locations.values().flatten()
    }

    /// Number of indexed directories
    pub fn len(&self) -> usize {
        self.locations.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Locations of every directory in the subtree rooted at `entry`
///
/// `location` is where `entry` itself lives.
pub(crate) fn subtree_directories(entry: &Entry, location: &EntryPath) -> Vec<EntryPath> {
    let base = location.parent().unwrap_or_default();
    let mut trail: Vec<&str> = Vec::new();
    let mut found = Vec::new();

    for (depth, node) in entry.iter() {
        trail.truncate(depth);
        trail.push(node.name());
        if node.is_directory() {
            let components = base
                .components()
                .iter()
                .map(String::as_str)
                .chain(trail.iter().copied());
            found.push(EntryPath::from_components(components));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_tree::Directory;

    fn path(components: &[&str]) -> EntryPath {
        EntryPath::from_components(components.iter().copied())
    }

    #[test]
    fn test_register_and_resolve() {
        let mut index = DirectoryIndex::new();
        index.register(path(&["docs"]));

        assert!(index.contains("docs"));
        assert_eq!(index.resolve("docs"), Some(&path(&["docs"])));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_most_recent_registration_wins() {
        let mut index = DirectoryIndex::new();
        index.register(path(&["a", "shared"]));
        index.register(path(&["b", "shared"]));

        assert_eq!(index.resolve("shared"), Some(&path(&["b", "shared"])));
        assert_eq!(index.len(), 2);
        assert_eq!(index.names(), vec!["shared"]);
    }

    #[test]
    fn test_register_twice_keeps_one_copy() {
        let mut index = DirectoryIndex::new();
        index.register(path(&["a", "shared"]));
        index.register(path(&["b", "shared"]));
        index.register(path(&["a", "shared"]));

        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve("shared"), Some(&path(&["a", "shared"])));
    }

    #[test]
    fn test_unregister_falls_back_to_remaining_location() {
        let mut index = DirectoryIndex::new();
        index.register(path(&["a", "shared"]));
        index.register(path(&["b", "shared"]));

        assert!(index.unregister(&path(&["b", "shared"])));
        assert_eq!(index.resolve("shared"), Some(&path(&["a", "shared"])));

        assert!(index.unregister(&path(&["a", "shared"])));
        assert!(!index.contains("shared"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_unregister_unknown_location() {
        let mut index = DirectoryIndex::new();
        assert!(!index.unregister(&path(&["ghost"])));
        assert!(!index.unregister(&EntryPath::root()));
    }

    #[test]
    fn test_relocate_keeps_rank() {
        let mut index = DirectoryIndex::new();
        index.register(path(&["a", "shared"]));
        index.register(path(&["b", "shared"]));

        assert!(index.relocate(&path(&["a", "shared"]), path(&["c", "a", "shared"])));
        assert_eq!(index.resolve("shared"), Some(&path(&["b", "shared"])));
        assert_eq!(index.len(), 2);

        assert!(index.unregister(&path(&["b", "shared"])));
        assert_eq!(index.resolve("shared"), Some(&path(&["c", "a", "shared"])));
    }

    #[test]
    fn test_relocate_unknown_location() {
        let mut index = DirectoryIndex::new();
        index.register(path(&["docs"]));
        assert!(!index.relocate(&path(&["ghost"]), path(&["x", "ghost"])));
        assert!(!index.relocate(&path(&["other", "docs"]), path(&["x", "docs"])));
        assert_eq!(index.resolve("docs"), Some(&path(&["docs"])));
    }

    #[test]
    fn test_root_path_is_never_indexed() {
        let mut index = DirectoryIndex::new();
        index.register(EntryPath::root());
        assert!(index.is_empty());
    }

    #[test]
    fn test_subtree_directories() {
        let mut dir2 = Directory::new("dir2");
        dir2.add(Entry::file("file5"));
        let mut dir3 = Directory::new("dir3");
        dir3.add(Entry::file("file3"));
        dir3.add(Entry::Directory(dir2));
        let dir3 = Entry::Directory(dir3);

        let found = subtree_directories(&dir3, &path(&["top", "dir3"]));
        assert_eq!(
            found,
            vec![path(&["top", "dir3"]), path(&["top", "dir3", "dir2"])]
        );
    }

    #[test]
    fn test_subtree_directories_of_file() {
        let file = Entry::file("readme");
        assert!(subtree_directories(&file, &path(&["readme"])).is_empty());
    }
}
