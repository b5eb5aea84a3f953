use std::collections::BTreeMap;
use std::ffi::OsStr;

mod cd;
mod exit;

pub use cd::CdCommand;
pub use exit::ExitCommand;

use crate::core::Outcome;
use crate::highlight::Highlighter;
use crate::input::ArgVector;
use crate::process::{ProcessError, ProcessExecutor};
use log::debug;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ChangeDirectory(String, std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::ChangeDirectory(path, err) => write!(f, "cd: {}: {}", path, err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::InvalidArguments(_) => None,
            CommandError::ChangeDirectory(_, err) => Some(err),
            CommandError::ProcessError(err) => Some(err),
        }
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// A built-in. `args` excludes the command name.
pub trait Command {
    fn execute(&self, args: &[&OsStr]) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[&OsStr]) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
        }
    }
}

/// Routes a command line to a built-in or to an external program.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
    highlighter: Highlighter,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(Highlighter::plain())
    }
}

impl CommandExecutor {
    pub fn new(highlighter: Highlighter) -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
            highlighter,
        }
    }

    pub fn execute(&self, argv: &ArgVector<'_>) -> Result<Outcome, CommandError> {
        let Some(name) = argv.command() else {
            return Ok(Outcome::Continue);
        };

        if let Some(cmd) = name.to_str().and_then(|name| self.commands.get(name)) {
            debug!("builtin: {}", name.to_string_lossy());
            cmd.execute(argv.args())
        } else {
            self.process_executor.spawn_process(argv.as_slice())?;
            Ok(Outcome::Continue)
        }
    }

    /// Like `execute`, but every error is reported on stderr and absorbed.
    pub fn dispatch(&self, argv: &ArgVector<'_>) -> Outcome {
        match self.execute(argv) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.highlighter.report(&e);
                Outcome::Continue
            }
        }
    }
}
