use super::{Command, CommandError};
use crate::core::Outcome;
use std::ffi::OsStr;

/// Ends the loop. Arguments are ignored and the shell exits with status 0.
#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[&OsStr]) -> Result<Outcome, CommandError> {
        Ok(Outcome::Terminate)
    }
}
