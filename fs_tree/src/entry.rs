//! Entry types
//!
//! An entry is one named node of the namespace: either a plain file or a
//! directory. Both carry the same [`Metadata`]; only directories own children.

use crate::directory::Directory;
use crate::error::TreeError;
use crate::ids::EntryId;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Display format for timestamps (seconds precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A wall-clock point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    /// Returns the current local time
    pub fn now() -> Self {
        Self(Local::now())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// Kind of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Plain file (metadata only)
    File,
    /// Container of other entries
    Directory,
}

impl EntryKind {
    /// Short marker used in detailed listings
    pub fn marker(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "dir",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Metadata shared by every entry
///
/// Timestamps can only move forward through [`Metadata::touch`].
#[derive(Debug, Serialize)]
pub struct Metadata {
    id: EntryId,
    name: String,
    created_at: Timestamp,
    modified_at: Timestamp,
}

impl Metadata {
    /// Creates metadata for a freshly created entry
    ///
    /// Creation and modification time start out equal.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: EntryId::new(),
            name: name.into(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Returns the entry ID
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the entry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation time
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the last modification time
    pub fn modified_at(&self) -> Timestamp {
        self.modified_at
    }

    /// Sets the modification time to now
    pub fn touch(&mut self) {
        self.modified_at = Timestamp::now();
    }
}

/// A plain file
///
/// Files hold no content; they are named metadata records.
#[derive(Debug, Serialize)]
pub struct File {
    #[serde(flatten)]
    meta: Metadata,
}

impl File {
    /// Creates a new file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: Metadata::new(name),
        }
    }

    /// Returns the file metadata
    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    /// Sets the modification time to now
    pub fn touch(&mut self) {
        self.meta.touch();
    }

    /// Formats the one-line summary for this file
    pub fn render(&self) -> String {
        format!(
            "{:<5} {:<20} {:<3} {}",
            EntryKind::File.marker(),
            self.meta.modified_at().to_string(),
            "",
            self.meta.name()
        )
    }
}

/// A node in the namespace
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    File(File),
    Directory(Directory),
}

impl Entry {
    /// Creates a new plain file entry
    pub fn file(name: impl Into<String>) -> Self {
        Entry::File(File::new(name))
    }

    /// Creates a new empty directory entry
    pub fn directory(name: impl Into<String>) -> Self {
        Entry::Directory(Directory::new(name))
    }

    /// Returns the shared metadata
    pub fn meta(&self) -> &Metadata {
        match self {
            Entry::File(file) => file.meta(),
            Entry::Directory(dir) => dir.meta(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.meta().id()
    }

    pub fn name(&self) -> &str {
        self.meta().name()
    }

    pub fn created_at(&self) -> Timestamp {
        self.meta().created_at()
    }

    pub fn modified_at(&self) -> Timestamp {
        self.meta().modified_at()
    }

    /// Returns the kind of this entry
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File(_) => EntryKind::File,
            Entry::Directory(_) => EntryKind::Directory,
        }
    }

    /// Checks if this entry is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }

    /// Sets the modification time to now
    pub fn touch(&mut self) {
        match self {
            Entry::File(file) => file.touch(),
            Entry::Directory(dir) => dir.touch(),
        }
    }

    /// Returns the directory view of this entry, if it is one
    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    /// Returns the mutable directory view of this entry, if it is one
    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    /// Like [`Entry::as_directory_mut`], but fails with `NotADirectory`
    pub fn try_directory_mut(&mut self) -> Result<&mut Directory, TreeError> {
        match self {
            Entry::Directory(dir) => Ok(dir),
            Entry::File(file) => Err(TreeError::NotADirectory(file.meta().name().to_string())),
        }
    }

    /// Number of direct children (`None` for files)
    pub fn child_count(&self) -> Option<usize> {
        self.as_directory().map(Directory::child_count)
    }

    /// Number of entries below this one, at any depth
    pub fn descendant_count(&self) -> usize {
        self.iter().count() - 1
    }

    /// Formats the one-line summary (kind, modified time, child count, name)
    pub fn render(&self) -> String {
        match self {
            Entry::File(file) => file.render(),
            Entry::Directory(dir) => dir.render(),
        }
    }

    /// Pre-order traversal of this entry and everything below it
    ///
    /// Yields `(depth, entry)` pairs, starting with `(0, self)`. Siblings are
    /// visited in name order. The traversal keeps an explicit stack, so tree
    /// depth is not limited by the call stack.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![(0, self)],
        }
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Entry::File(file)
    }
}

impl From<Directory> for Entry {
    fn from(dir: Directory) -> Self {
        Entry::Directory(dir)
    }
}

/// Pre-order iterator over an entry subtree
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Entry)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, entry) = self.stack.pop()?;
        if let Entry::Directory(dir) = entry {
            // Reversed so the smallest name is popped first
            for child in dir.children().into_iter().rev() {
                self.stack.push((depth + 1, child));
            }
        }
        Some((depth, entry))
    }
}
