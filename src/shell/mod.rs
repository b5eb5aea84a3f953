use log::debug;

mod executor;
pub mod prompt;

use crate::{
    core::commands::CommandExecutor,
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
    input::{self, LineReader, ReadEvent},
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) reader: Box<dyn LineReader>,
    pub(crate) executor: CommandExecutor,
}

impl Shell {
    /// Shell on the process's standard streams.
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let reader = input::stdin_reader()?;
        let executor = CommandExecutor::new(Highlighter::new(flags));
        Ok(Self::with_reader(reader, executor))
    }

    pub fn with_reader(reader: Box<dyn LineReader>, executor: CommandExecutor) -> Self {
        Shell { reader, executor }
    }

    /// Prompt, read, dispatch, until `exit` or end of input. Returns an error
    /// only when reading fails.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = prompt::render();
            let line = match self.reader.read_line(&prompt)? {
                ReadEvent::Line(line) => line,
                ReadEvent::Interrupted => continue,
                ReadEvent::Eof => {
                    debug!("end of input");
                    break;
                }
            };

            if !self.execute_line(&line).should_continue() {
                debug!("exit requested");
                break;
            }
        }
        Ok(())
    }
}
