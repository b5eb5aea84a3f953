use crate::process::ProcessError;

/// Errors that end the shell. Everything recoverable is handled by the
/// dispatcher and never reaches this type.
#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    ProcessError(ProcessError),
    FlagError(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "readline: {}", e),
            ShellError::Io(e) => write!(f, "io error: {}", e),
            ShellError::ProcessError(e) => write!(f, "{}", e),
            ShellError::FlagError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Readline(e) => Some(e),
            ShellError::Io(e) => Some(e),
            ShellError::ProcessError(e) => Some(e),
            ShellError::FlagError(_) => None,
        }
    }
}
