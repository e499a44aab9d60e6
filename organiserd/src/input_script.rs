//! # Command Script Parser
//!
//! Scripted input for deterministic runs and demos.
//!
//! ## Format
//!
//! Scripts are line-based, one console command per line:
//! - Any command accepted at the prompt, including menu numbers
//! - Comments: `# This is a comment`
//! - Blank lines are ignored
//!
//! ## Example
//!
//! ```text
//! # Build a small tree
//! mkdir docs
//! touch readme in docs
//! find readme
//! tree
//! ```
//!
//! Every line is parsed when the script is loaded, so a typo fails the
//! whole script before any command runs.

use crate::commands::{ConsoleCommand, ConsoleCommandParser};
use std::collections::VecDeque;
use thiserror::Error;

/// Command script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandScriptError {
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,
}

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedCommand {
    /// 1-based line number in the script text
    pub line: usize,
    pub command: ConsoleCommand,
}

/// Command script
#[derive(Debug, Clone)]
pub struct CommandScript {
    commands: VecDeque<ScriptedCommand>,
}

impl CommandScript {
    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, CommandScriptError> {
        let mut commands = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let command =
                ConsoleCommandParser::parse(line).map_err(|e| CommandScriptError::ParseError {
                    line: line_num + 1,
                    message: e.to_string(),
                })?;
            commands.push_back(ScriptedCommand {
                line: line_num + 1,
                command,
            });
        }

        if commands.is_empty() {
            return Err(CommandScriptError::EmptyScript);
        }

        Ok(Self { commands })
    }

    /// Takes the next command
    pub fn next_command(&mut self) -> Option<ScriptedCommand> {
        self.commands.pop_front()
    }

    /// Checks if commands remain
    pub fn has_more(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Number of commands left
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_script() {
        let script = CommandScript::from_text("mkdir docs\ntouch readme in docs\ntree").unwrap();
        assert_eq!(script.remaining(), 3);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = "# setup\n\nmkdir docs\n   \n# done\n";
        let mut script = CommandScript::from_text(text).unwrap();

        let first = script.next_command().unwrap();
        assert_eq!(first.line, 3);
        assert_eq!(
            first.command,
            ConsoleCommand::CreateFolder {
                name: "docs".to_string(),
                directory: None
            }
        );
        assert!(!script.has_more());
        assert_eq!(script.next_command(), None);
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(
            CommandScript::from_text("").unwrap_err(),
            CommandScriptError::EmptyScript
        );
        assert_eq!(
            CommandScript::from_text("# only comments\n\n").unwrap_err(),
            CommandScriptError::EmptyScript
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = CommandScript::from_text("mkdir docs\n\nfrobnicate docs").unwrap_err();
        assert_eq!(
            err,
            CommandScriptError::ParseError {
                line: 3,
                message: "Unknown command: frobnicate".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Parse error at line 3: Unknown command: frobnicate"
        );
    }

    #[test]
    fn test_menu_numbers_in_script() {
        let mut script = CommandScript::from_text("2 docs\n6\n8").unwrap();
        script.next_command();
        assert_eq!(script.next_command().unwrap().command, ConsoleCommand::Tree);
        assert_eq!(script.next_command().unwrap().command, ConsoleCommand::Quit);
    }
}
