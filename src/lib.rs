pub mod error;
pub mod flags;
pub mod logging;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod process;

/// Name used in the prompt and as the prefix of every error report.
pub const SHELL_NAME: &str = "myshell";

#[cfg(test)]
pub(crate) mod test_support;
