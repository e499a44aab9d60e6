//! # Organiser Runtime
//!
//! The command loop: read a command, run it against the namespace, write
//! the result. A failing command prints its error and the loop goes on.

use crate::commands::{ConsoleCommand, ConsoleCommandParser};
use crate::input_script::{CommandScript, CommandScriptError};
use cli_console::{menu, CommandHandler};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Prompt shown before each interactive command
const PROMPT: &str = "> ";

/// Organiser runtime error types
///
/// Only host-level failures end the loop; command failures never do.
#[derive(Debug, Error)]
pub enum OrganiserError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Script error: {0}")]
    Script(#[from] CommandScriptError),
}

/// Organiser runtime configuration
#[derive(Debug, Clone, Default)]
pub struct OrganiserConfig {
    /// Script text; commands are read from input when absent
    pub script: Option<String>,
    /// Maximum commands to run (0 = unlimited)
    pub max_steps: usize,
    /// Suppress the banner and the prompt
    pub quiet: bool,
    /// Debug-level logging
    pub verbose: bool,
}

/// Organiser runtime state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuntimeState {
    Running,
    Shutdown,
}

/// Organiser runtime
///
/// Generic over where commands come from and where results go, so tests can
/// drive it with in-memory buffers.
pub struct OrganiserRuntime<R, W> {
    /// Configuration
    config: OrganiserConfig,
    /// Command façade over the namespace
    handler: CommandHandler,
    /// Parsed script (scripted mode)
    script: Option<CommandScript>,
    /// Interactive input
    input: R,
    /// Result sink
    output: W,
    /// Current state
    state: RuntimeState,
    /// Commands executed so far
    steps: usize,
}

impl<R: BufRead, W: Write> OrganiserRuntime<R, W> {
    /// Creates a new runtime
    ///
    /// Fails if the configured script does not parse.
    pub fn new(config: OrganiserConfig, input: R, output: W) -> Result<Self, OrganiserError> {
        let script = config
            .script
            .as_deref()
            .map(CommandScript::from_text)
            .transpose()?;

        Ok(Self {
            config,
            handler: CommandHandler::new(),
            script,
            input,
            output,
            state: RuntimeState::Running,
            steps: 0,
        })
    }

    /// Runs the command loop
    ///
    /// Returns when:
    /// - Quit command received
    /// - Max steps reached (if configured)
    /// - Script exhausted, or end of input
    pub fn run(&mut self) -> Result<(), OrganiserError> {
        if !self.config.quiet {
            write!(self.output, "{}", menu::banner())?;
        }

        loop {
            if self.state == RuntimeState::Shutdown {
                break;
            }

            if self.config.max_steps > 0 && self.steps >= self.config.max_steps {
                info!(steps = self.steps, "step limit reached");
                break;
            }

            let Some(command) = self.next_command()? else {
                break;
            };
            self.execute_command(command)?;
            self.steps += 1;
        }

        self.output.flush()?;
        Ok(())
    }

    /// Executes one command and writes its result
    pub fn execute_command(&mut self, command: ConsoleCommand) -> Result<(), OrganiserError> {
        debug!(?command, "executing");

        let result = match command {
            ConsoleCommand::CreateFile { name, directory } => {
                self.handler.create_file(&name, directory.as_deref())
            }
            ConsoleCommand::CreateFolder { name, directory } => {
                self.handler.create_folder(&name, directory.as_deref())
            }
            ConsoleCommand::Delete { name } => self.handler.delete(&name),
            ConsoleCommand::Move { name, destination } => {
                self.handler.move_entry(&name, &destination)
            }
            ConsoleCommand::Find { name } => self.handler.search(&name),
            ConsoleCommand::Tree => Ok(self.handler.tree()),
            ConsoleCommand::DetailedTree => Ok(self.handler.detailed_tree()),
            ConsoleCommand::TreeJson => self.handler.tree_json(),
            ConsoleCommand::Directories => Ok(self.handler.list_directories()),
            ConsoleCommand::Help => Ok(menu::help()),
            ConsoleCommand::Quit => {
                self.state = RuntimeState::Shutdown;
                return Ok(());
            }
        };

        match result {
            Ok(text) => self.write_block(&text)?,
            Err(message) => writeln!(self.output, "{}", message)?,
        }
        Ok(())
    }

    /// Read access to the command handler
    pub fn handler(&self) -> &CommandHandler {
        &self.handler
    }

    /// Commands executed so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Checks if a quit command was executed
    pub fn is_shutdown(&self) -> bool {
        self.state == RuntimeState::Shutdown
    }

    /// Consumes the runtime, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next command from the script, or from input in interactive mode
    ///
    /// Unparseable input lines are reported and skipped.
    fn next_command(&mut self) -> Result<Option<ConsoleCommand>, OrganiserError> {
        if let Some(script) = &mut self.script {
            return Ok(script.next_command().map(|scripted| {
                debug!(line = scripted.line, "script command");
                scripted.command
            }));
        }

        let mut line = String::new();
        loop {
            if !self.config.quiet {
                write!(self.output, "{}", PROMPT)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                return Ok(None);
            }
            if line.trim().is_empty() {
                continue;
            }

            match ConsoleCommandParser::parse(&line) {
                Ok(command) => return Ok(Some(command)),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }

    /// Writes text, adding a final newline if it lacks one
    fn write_block(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.output.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.output.write_all(b"\n")?;
        }
        Ok(())
    }
}
