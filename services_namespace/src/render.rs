//! Tree rendering
//!
//! Renders a forest of entries as indented text. Rendering returns a string;
//! printing it is the caller's business.

use fs_tree::Entry;

/// Spaces added per depth level
pub const INDENT_WIDTH: usize = 4;

/// Marker placed in front of every node label
const BRANCH: &str = "|-- ";

/// What each rendered line shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeStyle {
    /// Entry names only
    Names,
    /// Metadata line: kind, modified time, child count, name
    Detailed,
}

/// Renders entries depth-first, pre-order, siblings in name order
///
/// Each node produces one line:
///
/// ```text
/// |-- dir3
/// |    |-- dir2
/// |        |-- file5
/// ```
///
/// Nested lines start with a single `|`, followed by `INDENT_WIDTH` spaces
/// per level beyond the first column and the `|-- ` branch marker.
pub fn render_forest<'a, I>(roots: I, style: TreeStyle) -> String
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut out = String::new();

    for root in roots {
        for (depth, entry) in root.iter() {
            if depth > 0 {
                out.push('|');
            }
            out.push_str(&" ".repeat(INDENT_WIDTH * depth));
            out.push_str(BRANCH);
            match style {
                TreeStyle::Names => out.push_str(entry.name()),
                TreeStyle::Detailed => out.push_str(&entry.render()),
            }
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_tree::Directory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_empty_forest() {
        let roots: Vec<Entry> = Vec::new();
        assert_eq!(render_forest(&roots, TreeStyle::Names), "");
    }

    #[test]
    fn test_render_flat_forest() {
        let roots = vec![Entry::file("file1"), Entry::file("file2")];
        assert_eq!(
            render_forest(&roots, TreeStyle::Names),
            "|-- file1\n|-- file2\n"
        );
    }

    #[test]
    fn test_render_nested_names() {
        let mut dir2 = Directory::new("dir2");
        dir2.add(Entry::file("file5"));
        let mut dir3 = Directory::new("dir3");
        dir3.add(Entry::Directory(dir2));
        dir3.add(Entry::file("file4"));
        let roots = vec![Entry::Directory(dir3)];

        let expected = "\
|-- dir3
|    |-- dir2
|        |-- file5
|    |-- file4
";
        assert_eq!(render_forest(&roots, TreeStyle::Names), expected);
    }

    #[test]
    fn test_render_detailed_uses_metadata_lines() {
        let mut docs = Directory::new("docs");
        docs.add(Entry::file("readme"));
        let roots = vec![Entry::Directory(docs)];

        let rendered = render_forest(&roots, TreeStyle::Detailed);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("|-- dir   "));
        assert!(lines[0].ends_with("1   docs"));
        assert!(lines[1].starts_with("|    |-- file  "));
        assert!(lines[1].ends_with(" readme"));
    }
}
