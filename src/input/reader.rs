use crate::error::ShellError;
use log::debug;
use rustyline::{config::Configurer, error::ReadlineError, DefaultEditor};
use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal, Write};
use std::os::unix::ffi::OsStringExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// One line of input as raw bytes, line terminator removed.
    Line(OsString),
    /// The user abandoned the line being edited (Ctrl-C at the prompt).
    Interrupted,
    /// Clean end of input.
    Eof,
}

/// Source of command lines. Shows `prompt`, then blocks until a full line,
/// an interrupt or end of input. Read failures are fatal to the shell.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent, ShellError>;
}

/// Interactive line editing on a terminal. History lives in memory only.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, ShellError> {
        let mut editor = DefaultEditor::new()?;
        editor.set_auto_add_history(true);
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadEvent::Line(line.into())),
            Err(ReadlineError::Interrupted) => Ok(ReadEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadEvent::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain buffered reading for pipes and files.
pub struct StreamReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> LineReader for StreamReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent, ShellError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(ReadEvent::Eof);
        }

        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }

        Ok(ReadEvent::Line(OsString::from_vec(raw)))
    }
}

/// Picks the line editor for a terminal and a plain stream otherwise.
pub fn stdin_reader() -> Result<Box<dyn LineReader>, ShellError> {
    if io::stdin().is_terminal() {
        debug!("stdin is a terminal, using line editor");
        Ok(Box::new(EditorReader::new()?))
    } else {
        debug!("stdin is not a terminal, reading plain lines");
        Ok(Box::new(StreamReader::new(io::stdin().lock(), io::stdout())))
    }
}
