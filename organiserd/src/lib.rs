//! # Organiser Host Runtime
//!
//! Host side of the virtual file system organiser.
//!
//! ## Responsibilities
//!
//! The host runtime:
//! - Parses text commands (and the numbered menu shortcuts)
//! - Runs them one at a time, interactively or from a script
//! - Writes each result line to its output
//! - Keeps going after a failed command
//! - Sets up logging
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Persist the tree between runs
//! - Touch the real filesystem
//! - Implement a shell with pipes or job control

pub mod commands;
pub mod input_script;
pub mod logging;
pub mod runtime;

pub use commands::{ConsoleCommand, ConsoleCommandError, ConsoleCommandParser};
pub use input_script::{CommandScript, CommandScriptError, ScriptedCommand};
pub use runtime::{OrganiserConfig, OrganiserError, OrganiserRuntime};
