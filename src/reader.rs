//! Sources of input lines for the interactive loop.

use crate::errors::ShellError;
use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, Write};

/// Something that can show a prompt and hand back one line of input.
pub trait LineReader {
    /// Show `prompt` and read one line without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input. Any error is fatal to the interpreter.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line editor backed reader for interactive terminals.
///
/// Lines are never added to the editor's history.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialise line editor")?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl-C drops the current line and prompts again.
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(err)) => Err(ShellError::ReadLine(err).into()),
            Err(err) => Err(ShellError::ReadLine(io::Error::other(err.to_string())).into()),
        }
    }
}

/// Plain buffered reader, used when input is piped or `--plain` is given.
///
/// The prompt is written to `prompt_out` and flushed before every read.
pub struct StdinReader<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> StdinReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineReader for StdinReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        // A prompt that cannot be shown does not stop the operator from typing.
        let _ = write!(self.prompt_out, "{prompt}");
        let _ = self.prompt_out.flush();

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(ShellError::ReadLine)?;
        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_until_eof() {
        let mut out = Vec::new();
        let mut reader = StdinReader::new(Cursor::new("ls -l\ncd /tmp\n"), &mut out);

        assert_eq!(reader.read_line("$ ").unwrap().as_deref(), Some("ls -l"));
        assert_eq!(reader.read_line("$ ").unwrap().as_deref(), Some("cd /tmp"));
        assert_eq!(reader.read_line("$ ").unwrap(), None);
        drop(reader);

        assert_eq!(String::from_utf8(out).unwrap(), "$ $ $ ");
    }

    #[test]
    fn test_strips_crlf_and_keeps_unterminated_last_line() {
        let mut reader = StdinReader::new(Cursor::new("help\r\nexit"), std::io::sink());
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("help"));
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some("exit"));
        assert_eq!(reader.read_line("").unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut reader = StdinReader::new(Cursor::new("\n"), std::io::sink());
        assert_eq!(reader.read_line("").unwrap().as_deref(), Some(""));
        assert_eq!(reader.read_line("").unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut reader = StdinReader::new(Cursor::new(vec![0xff, 0xfe, b'\n']), std::io::sink());
        let err = reader.read_line("").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShellError>(),
            Some(ShellError::ReadLine(cause)) if cause.kind() == io::ErrorKind::InvalidData
        ));
        assert_eq!(err.to_string(), "error reading line");
    }
}
