//! Line-based console I/O
//!
//! Every prompt in the program goes through `Console`, so tests can drive
//! whole sessions from a string and inspect what was printed.

use kinema_core::KinemaError;
use std::io::{self, BufRead, Write};

pub struct Console<'io> {
    input: Box<dyn BufRead + 'io>,
    output: Box<dyn Write + 'io>,
}

impl<'io> Console<'io> {
    pub fn new(input: impl BufRead + 'io, output: impl Write + 'io) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Console over the process's stdin/stdout
    pub fn stdio() -> Console<'static> {
        Console::new(io::BufReader::new(io::stdin()), io::stdout())
    }

    /// Print one line
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<(), KinemaError> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Print the prompt, then read one line with surrounding whitespace
    /// removed. `None` means the input is closed. Bytes that are not
    /// valid UTF-8 become U+FFFD, so the caller sees an unparseable line
    /// rather than an I/O failure.
    pub fn prompt(&mut self, text: &str) -> Result<Option<String>, KinemaError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&buf).trim().to_string())),
        }
    }

    /// Like `prompt`, but a closed input aborts the current operation
    pub fn require(&mut self, text: &str) -> Result<String, KinemaError> {
        self.prompt(text)?.ok_or_else(KinemaError::end_of_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_and_echoes_prompt() {
        let mut out = Vec::new();
        {
            let mut console = Console::new(Cursor::new("  42 \nnext\n"), &mut out);
            assert_eq!(console.prompt("Value: ").unwrap(), Some("42".to_string()));
            assert_eq!(console.prompt("Again: ").unwrap(), Some("next".to_string()));
            assert_eq!(console.prompt("Last: ").unwrap(), None);
        }
        assert_eq!(String::from_utf8(out).unwrap(), "Value: Again: Last: ");
    }

    #[test]
    fn test_prompt_replaces_invalid_utf8() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new(vec![0xff, 0xfe, b'\n', b'7', b'\n']), &mut out);
        assert_eq!(console.prompt("> ").unwrap(), Some("\u{FFFD}\u{FFFD}".to_string()));
        assert_eq!(console.prompt("> ").unwrap(), Some("7".to_string()));
        assert_eq!(console.prompt("> ").unwrap(), None);
    }

    #[test]
    fn test_require_reports_end_of_input() {
        let mut out = Vec::new();
        let mut console = Console::new(Cursor::new(""), &mut out);
        let err = console.require("Enter unit: ").unwrap_err();
        assert!(err.is_end_of_input());
    }

    #[test]
    fn test_say_appends_newline() {
        let mut out = Vec::new();
        {
            let mut console = Console::new(Cursor::new(""), &mut out);
            console.say("hello").unwrap();
            console.say(String::from("world")).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "hello\nworld\n");
    }
}
