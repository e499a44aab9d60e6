//! # Console Commands
//!
//! The text commands understood by the organiser.
//!
//! ## Command Set
//!
//! - `touch <name> [in <dir>]` - Create a file (menu item 1)
//! - `mkdir <name> [in <dir>]` - Create a folder (menu item 2)
//! - `rm <name>` - Delete a file or folder (menu item 3)
//! - `mv <name> [to] <dir>` - Move into a folder (menu item 4)
//! - `find <name>` - Print the path of a file or folder (menu item 5)
//! - `tree` - View the file tree (menu item 6)
//! - `tree -l` - Detailed file tree (menu item 7)
//! - `tree --json` - File tree as JSON
//! - `dirs` - List folders
//! - `help` - Show the command reference
//! - `quit` / `exit` - Leave (menu item 8)
//!
//! A bare menu number can replace the keyword, followed by the same
//! arguments: `1 notes in docs` is `touch notes in docs`.

use thiserror::Error;

/// Console command error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleCommandError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Console commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Create a file, optionally inside a folder
    CreateFile {
        name: String,
        directory: Option<String>,
    },

    /// Create a folder, optionally inside another folder
    CreateFolder {
        name: String,
        directory: Option<String>,
    },

    /// Delete a file or folder
    Delete { name: String },

    /// Move a file or folder into a folder
    Move { name: String, destination: String },

    /// Print where a file or folder lives
    Find { name: String },

    /// Names-only tree
    Tree,

    /// Tree with metadata lines
    DetailedTree,

    /// Tree as JSON
    TreeJson,

    /// List folders
    Directories,

    /// Command reference
    Help,

    /// Leave the organiser
    Quit,
}

/// Console command parser
pub struct ConsoleCommandParser;

impl ConsoleCommandParser {
    /// Parses a command string
    pub fn parse(input: &str) -> Result<ConsoleCommand, ConsoleCommandError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ConsoleCommandError::InvalidCommand(
                "Empty command".to_string(),
            ));
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "touch" | "1" => Self::parse_create(args)
                .map(|(name, directory)| ConsoleCommand::CreateFile { name, directory }),
            "mkdir" | "2" => Self::parse_create(args)
                .map(|(name, directory)| ConsoleCommand::CreateFolder { name, directory }),
            "rm" | "3" => Self::parse_name(args).map(|name| ConsoleCommand::Delete { name }),
            "mv" | "4" => Self::parse_move(args),
            "find" | "5" => Self::parse_name(args).map(|name| ConsoleCommand::Find { name }),
            "tree" => Self::parse_tree(args),
            "6" => Ok(ConsoleCommand::Tree),
            "7" => Ok(ConsoleCommand::DetailedTree),
            "dirs" => Ok(ConsoleCommand::Directories),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" | "8" => Ok(ConsoleCommand::Quit),
            _ => Err(ConsoleCommandError::UnknownCommand(cmd)),
        }
    }

    /// Parses `<name> [in <dir>]`
    ///
    /// Names may contain spaces; the last standalone `in`, in any case,
    /// separates the name from the folder.
    fn parse_create(args: &[&str]) -> Result<(String, Option<String>), ConsoleCommandError> {
        match args.iter().rposition(|arg| arg.eq_ignore_ascii_case("in")) {
            Some(pos) if pos > 0 => {
                let directory = &args[pos + 1..];
                if directory.is_empty() {
                    return Err(ConsoleCommandError::MissingArgument(
                        "directory name after 'in'".to_string(),
                    ));
                }
                Ok((args[..pos].join(" "), Some(directory.join(" "))))
            }
            _ => Ok((Self::parse_name(args)?, None)),
        }
    }

    /// Parses a name, which may contain spaces
    fn parse_name(args: &[&str]) -> Result<String, ConsoleCommandError> {
        if args.is_empty() {
            return Err(ConsoleCommandError::MissingArgument("name".to_string()));
        }
        Ok(args.join(" "))
    }

    /// Parses `<name> [to] <dir>`
    fn parse_move(args: &[&str]) -> Result<ConsoleCommand, ConsoleCommandError> {
        if let Some(pos) = args.iter().rposition(|arg| arg.eq_ignore_ascii_case("to")) {
            if pos > 0 && pos + 1 < args.len() {
                return Ok(ConsoleCommand::Move {
                    name: args[..pos].join(" "),
                    destination: args[pos + 1..].join(" "),
                });
            }
        }

        match args {
            [] => Err(ConsoleCommandError::MissingArgument("name".to_string())),
            [_] => Err(ConsoleCommandError::MissingArgument(
                "destination directory".to_string(),
            )),
            [name, destination] => Ok(ConsoleCommand::Move {
                name: name.to_string(),
                destination: destination.to_string(),
            }),
            _ => Err(ConsoleCommandError::InvalidCommand(
                "names with spaces need 'mv <name> to <dir>'".to_string(),
            )),
        }
    }

    /// Parses the "tree" flags
    fn parse_tree(args: &[&str]) -> Result<ConsoleCommand, ConsoleCommandError> {
        match args {
            [] => Ok(ConsoleCommand::Tree),
            ["-l"] | ["--long"] => Ok(ConsoleCommand::DetailedTree),
            ["--json"] => Ok(ConsoleCommand::TreeJson),
            _ => Err(ConsoleCommandError::InvalidCommand(format!(
                "Unknown tree option: {}",
                args.join(" ")
            ))),
        }
    }
}
