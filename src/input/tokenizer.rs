use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

/// Bytes that separate tokens: space, tab, carriage return, newline, bell.
const DELIMITERS: &[u8] = b" \t\r\n\x07";

fn is_delimiter(byte: &u8) -> bool {
    DELIMITERS.contains(byte)
}

/// Tokens of one command line, borrowed from the line they were split out of.
///
/// Tokens are raw bytes, so paths and arguments reach the OS exactly as
/// typed. Index 0 is the command name and there is no terminator slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgVector<'a> {
    tokens: Vec<&'a OsStr>,
}

impl<'a> ArgVector<'a> {
    /// Splits `line` on any run of delimiters. Never yields empty tokens.
    pub fn parse<S: AsRef<OsStr> + ?Sized>(line: &'a S) -> Self {
        let tokens = line
            .as_ref()
            .as_bytes()
            .split(is_delimiter)
            .filter(|token| !token.is_empty())
            .map(OsStr::from_bytes)
            .collect();
        Self { tokens }
    }

    pub fn command(&self) -> Option<&'a OsStr> {
        self.tokens.first().copied()
    }

    /// Everything after the command name.
    pub fn args(&self) -> &[&'a OsStr] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[&'a OsStr] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        let argv = ArgVector::parse("  ls   -la  ");
        assert_eq!(argv.as_slice(), &["ls", "-la"]);
        assert_eq!(argv.command(), Some(OsStr::new("ls")));
        assert_eq!(argv.args(), &["-la"]);
    }

    #[test]
    fn test_empty_and_blank_lines() {
        for line in ["", "   ", "\t\r\n", "\x07 \x07"] {
            let argv = ArgVector::parse(line);
            assert!(argv.as_slice().is_empty(), "{:?} should have no tokens", line);
            assert_eq!(argv.command(), None);
            assert!(argv.args().is_empty());
        }
    }

    #[test]
    fn test_all_delimiters_split() {
        let argv = ArgVector::parse("a\tb\rc\nd\x07e f");
        assert_eq!(argv.as_slice(), &["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_trailing_newline_is_not_part_of_token() {
        let argv = ArgVector::parse("exit\n");
        assert_eq!(argv.as_slice(), &["exit"]);
    }

    #[test]
    fn test_no_quoting_or_expansion() {
        let argv = ArgVector::parse("echo \"a b\" $HOME ~ *.rs");
        assert_eq!(argv.as_slice(), &["echo", "\"a", "b\"", "$HOME", "~", "*.rs"]);
    }

    #[test]
    fn test_many_tokens_are_kept() {
        let line = (0..1000).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let argv = ArgVector::parse(&line);
        assert_eq!(argv.as_slice().len(), 1000);
        assert_eq!(argv.as_slice()[999], "999");
    }

    #[test]
    fn test_no_empty_tokens() {
        for line in ["", "ls", "cd /tmp", "  a  b   c "] {
            let argv = ArgVector::parse(line);
            assert!(argv.as_slice().iter().all(|token| !token.is_empty()));
        }
    }

    #[test]
    fn test_non_utf8_bytes_kept_verbatim() {
        let line = OsStr::from_bytes(b"cd d\xff\xfe  x");
        let argv = ArgVector::parse(line);
        assert_eq!(argv.args()[0].as_bytes(), b"d\xff\xfe");
        assert_eq!(argv.args()[1], "x");
    }

    #[test]
    fn test_non_ascii_whitespace_is_not_a_delimiter() {
        let argv = ArgVector::parse("a\u{a0}b");
        assert_eq!(argv.as_slice().len(), 1);
    }
}
