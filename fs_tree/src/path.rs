//! Names and paths
//!
//! Entries are looked up by bare name; a path is only ever *reported*, as the
//! chain of names from a top-level entry down to the match.

use crate::error::TreeError;
use serde::Serialize;
use std::fmt;

/// Path resolver
///
/// Handles splitting paths into components and validating names.
pub struct PathResolver;

impl PathResolver {
    /// Splits a path into components
    ///
    /// # Examples
    ///
    /// ```
    /// use fs_tree::PathResolver;
    ///
    /// let components = PathResolver::split_path("/docs/notes/todo").unwrap();
    /// assert_eq!(components, vec!["docs", "notes", "todo"]);
    /// ```
    pub fn split_path(path: &str) -> Result<Vec<&str>, TreeError> {
        let trimmed = path.trim_matches('/');

        if trimmed.is_empty() {
            return Err(TreeError::InvalidPath("Empty path".to_string()));
        }

        let components: Vec<&str> = trimmed.split('/').collect();

        for component in &components {
            if component.is_empty() {
                return Err(TreeError::InvalidPath(format!(
                    "{}: path contains empty component",
                    path
                )));
            }
            if !Self::is_valid_name(component) {
                return Err(TreeError::InvalidPath(format!(
                    "{}: invalid component {:?}",
                    path, component
                )));
            }
        }

        Ok(components)
    }

    /// Validates a single entry name
    ///
    /// Returns true if the name can be used for a file or directory.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('/')
            && !name.contains('\0')
    }

    /// Like [`PathResolver::is_valid_name`], but fails with `InvalidName`
    pub fn validate_name(name: &str) -> Result<(), TreeError> {
        if Self::is_valid_name(name) {
            Ok(())
        } else {
            Err(TreeError::InvalidName(name.to_string()))
        }
    }
}

/// Location of an entry: the names from a top-level entry down to it
///
/// Displayed as `/a1/a2/.../name`. The empty path stands for the top level
/// of the namespace itself and displays as `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntryPath(Vec<String>);

impl EntryPath {
    /// The top level of the namespace
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from already validated components
    pub fn from_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(components.into_iter().map(Into::into).collect())
    }

    /// Parses a slash-delimited path
    pub fn parse(path: &str) -> Result<Self, TreeError> {
        let components = PathResolver::split_path(path)?;
        Ok(Self::from_components(components))
    }

    pub fn components(&self) -> &[String] {
        &self.0
    }

    /// Final component (the entry's own name)
    pub fn name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Path of the containing directory (`None` for the top level itself)
    pub fn parent(&self) -> Option<EntryPath> {
        let (_, ancestors) = self.0.split_last()?;
        Some(Self(ancestors.to_vec()))
    }

    /// Appends a name
    pub fn join(&self, name: &str) -> EntryPath {
        let mut components = self.0.clone();
        components.push(name.to_string());
        Self(components)
    }

    /// Number of components
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Checks if `self` is `ancestor` or lies beneath it
    pub fn starts_with(&self, ancestor: &EntryPath) -> bool {
        self.0.starts_with(&ancestor.0)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for component in &self.0 {
            write!(f, "/{}", component)?;
        }
        Ok(())
    }
}
