use std::ffi::OsStr;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

use log::debug;

use super::{ProcessError, Termination};

/// Runs external programs in the foreground.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        ProcessExecutor
    }

    /// Spawns `argv[0]` with the remaining tokens passed verbatim, then blocks
    /// until the child exits or is killed by a signal. Environment and
    /// standard streams are inherited unchanged.
    pub fn spawn_process<S: AsRef<OsStr>>(&self, argv: &[S]) -> Result<Termination, ProcessError> {
        let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;
        let program = program.as_ref();
        let name = program.to_string_lossy();

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProcessError::CommandNotFound(name.to_string()),
            ErrorKind::PermissionDenied => ProcessError::PermissionDenied(name.to_string()),
            _ => ProcessError::SpawnFailed(name.to_string(), e),
        })?;
        debug!("spawned {} (pid {})", name, child.id());

        let status = child
            .wait()
            .map_err(|e| ProcessError::WaitFailed(name.to_string(), e))?;
        let termination = Termination::from(status);
        debug!("{} {}", name, termination);

        Ok(termination)
    }
}
