use crate::flags::Flags;
use crate::SHELL_NAME;
use inksac::prelude::*;
use std::fmt;
use std::io::{self, IsTerminal};

/// Renders error reports for stderr, coloured when the terminal allows it.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::plain()
    }
}

impl Highlighter {
    pub fn new(flags: &Flags) -> Self {
        if flags.is_set("no-color") || !io::stderr().is_terminal() {
            return Self::plain();
        }
        Self {
            color_support: check_color_support().unwrap_or(ColorSupport::NoColor),
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn format_report(&self, error: &dyn fmt::Display) -> String {
        self.highlight_error(&format!("{}: {}", SHELL_NAME, error))
    }

    /// Writes a single-line error report to stderr.
    pub fn report(&self, error: &dyn fmt::Display) {
        eprintln!("{}", self.format_report(error));
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        error.style(error_style).to_string()
    }
}
