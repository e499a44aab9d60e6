//! # Namespace Service
//!
//! The namespace engine: a forest of top-level entries plus an index of every
//! directory by name.
//!
//! ## Invariants
//!
//! - Every entry has exactly one owner: the top-level map or one directory
//! - Names are unique among siblings, but may repeat across directories
//! - The directory index lists a directory if and only if it is reachable
//! - Every operation either fails before mutating anything or completes
//!
//! ## Operations
//!
//! - `create_file(name, parent)` / `create_directory(name, parent)`
//! - `add_to_directory(entry, dir)`: attach an existing entry to a directory
//! - `delete(name)`: remove the first match and its whole subtree
//! - `move_entry(name, dir)`: relocate an entry, subtree intact
//! - `locate(name)`: depth-first search, returns `/a/b/name`
//! - `exists(name)`: same search, boolean answer
//! - `render_tree()` / `render_detailed_tree()`: indented listings
//!
//! Lookups by bare name are first-match-wins in depth-first, name-sorted
//! order. [`Namespace::get`], [`Namespace::locate_all`] and
//! [`Namespace::delete_path`] work on explicit paths when that is ambiguous.

pub mod index;
pub mod operations;
pub mod render;
pub mod service;

pub use index::DirectoryIndex;
pub use operations::{NamespaceError, NamespaceOperations};
pub use render::{render_forest, TreeStyle};
pub use service::Namespace;
