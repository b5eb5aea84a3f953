use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    EmptyCommand,
    CommandNotFound(String),
    PermissionDenied(String),
    SpawnFailed(String, std::io::Error),
    WaitFailed(String, std::io::Error),
    SignalError(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::EmptyCommand => write!(f, "empty command"),
            ProcessError::CommandNotFound(cmd) => write!(f, "{}: command not found", cmd),
            ProcessError::PermissionDenied(cmd) => write!(f, "{}: permission denied", cmd),
            ProcessError::SpawnFailed(cmd, e) => write!(f, "{}: {}", cmd, e),
            ProcessError::WaitFailed(cmd, e) => write!(f, "{}: wait failed: {}", cmd, e),
            ProcessError::SignalError(msg) => write!(f, "signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::SpawnFailed(_, e) | ProcessError::WaitFailed(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Terminal state of a foreground child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => Termination::Exited(code),
            None => Termination::Signaled(status.signal().unwrap_or_default()),
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited(code) => write!(f, "exited with status {}", code),
            Termination::Signaled(sig) => write!(f, "terminated by {}", signal::signal_name(*sig)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_mapping() {
        // Raw wait statuses: exit code in the high byte, signal in the low bits.
        assert_eq!(Termination::from(ExitStatus::from_raw(0)), Termination::Exited(0));
        assert_eq!(Termination::from(ExitStatus::from_raw(3 << 8)), Termination::Exited(3));
        assert_eq!(Termination::from(ExitStatus::from_raw(9)), Termination::Signaled(9));
    }

    #[test]
    fn test_termination_display() {
        assert_eq!(Termination::Exited(1).to_string(), "exited with status 1");
        assert_eq!(Termination::Signaled(15).to_string(), "terminated by SIGTERM");
    }

    #[test]
    fn test_error_display_names_command() {
        let errors = vec![
            ProcessError::CommandNotFound("nope".to_string()),
            ProcessError::PermissionDenied("nope".to_string()),
            ProcessError::SpawnFailed(
                "nope".to_string(),
                std::io::Error::new(std::io::ErrorKind::Other, "out of processes"),
            ),
        ];

        for error in errors {
            assert!(error.to_string().starts_with("nope: "));
        }
    }
}
