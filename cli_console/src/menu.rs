//! Menu text
//!
//! The numbered menu shown by the interactive console and the command help.

/// Menu items in display order; the number is the item's position
pub const MENU_ITEMS: [&str; 8] = [
    "Create file",
    "Create Folder",
    "Delete file or Folder",
    "Move File or Folder to Specific location",
    "Search File",
    "View File tree",
    "Print detailed File Tree",
    "Quit",
];

const RULE_WIDTH: usize = 74;
const TITLE: &str = "Virtual File System Organiser";

/// Banner with the numbered menu
pub fn banner() -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&centered(TITLE));
    out.push('\n');
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        out.push_str(&centered(&format!("{}. {}", i + 1, item)));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Command reference
pub fn help() -> String {
    let lines = [
        "Commands:",
        "  touch <name> [in <dir>]   create a file (1)",
        "  mkdir <name> [in <dir>]   create a folder (2)",
        "  rm <name>                 delete a file or folder (3)",
        "  mv <name> <dir>           move into a folder (4)",
        "  find <name>               print the path (5)",
        "  tree                      view the file tree (6)",
        "  tree -l                   detailed file tree (7)",
        "  tree --json               file tree as JSON",
        "  dirs                      list folders",
        "  help                      this text",
        "  quit | exit               leave (8)",
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pads `label` with dashes on both sides to the rule width
fn centered(label: &str) -> String {
    let inner = format!(" {} ", label);
    let fill = RULE_WIDTH.saturating_sub(inner.chars().count());
    let left = fill / 2;
    format!("{}{}{}", "-".repeat(left), inner, "-".repeat(fill - left))
}
