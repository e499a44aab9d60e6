//! # Filesystem Tree
//!
//! In-memory model of a hierarchical namespace: named entries that are either
//! plain files or directories owning further entries.
//!
//! ## Design
//!
//! - An [`Entry`] is a sum type: [`File`] or [`Directory`]
//! - A directory owns its children exclusively; there are no parent pointers
//! - Children are kept in name order, so every traversal is deterministic
//! - Files are metadata records only (name and timestamps), never byte content
//!
//! Tree-wide concerns such as searching, moving and the directory index live
//! in `services_namespace`; this crate only knows about single nodes.

pub mod directory;
pub mod entry;
pub mod error;
pub mod ids;
pub mod path;

pub use directory::Directory;
pub use entry::{Entry, EntryKind, File, Metadata, Timestamp};
pub use error::TreeError;
pub use ids::EntryId;
pub use path::{EntryPath, PathResolver};
