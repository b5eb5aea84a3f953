use crate::core::Outcome;
use crate::input::ArgVector;
use std::ffi::OsStr;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &OsStr) -> Outcome;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &OsStr) -> Outcome {
        // The tokens borrow `line` and are dropped before the next read.
        let argv = ArgVector::parse(line);
        self.executor.dispatch(&argv)
    }
}
