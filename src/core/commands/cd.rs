use super::{Command, CommandError};
use crate::core::Outcome;
use log::debug;
use std::env;
use std::ffi::OsStr;
use std::path::Path;

/// Changes the process working directory. The OS keeps the only copy of it.
#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[&OsStr]) -> Result<Outcome, CommandError> {
        let path = Path::new(args.first().ok_or_else(|| {
            CommandError::InvalidArguments("expected argument to \"cd\"".to_string())
        })?);

        env::set_current_dir(path).map_err(|e| {
            CommandError::ChangeDirectory(path.to_string_lossy().into_owned(), e)
        })?;
        debug!("working directory changed to {}", path.display());

        Ok(Outcome::Continue)
    }
}
