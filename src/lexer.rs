//! Lexical analysis of one input line into an argument vector.
//!
//! Splitting is quote-aware but deliberately simpler than POSIX shell quoting:
//! closing a quote always ends the current argument, so `"a"b` yields two
//! arguments, `a` and `b`, rather than one concatenated word.

use crate::errors::{self, ShellError};
use std::io::Write;

/// Errors that can occur during lexical analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexingError {
    /// The line ended while a quote opened by the contained character was still open.
    UnfinishedQuote(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    /// Between arguments; whitespace is skipped.
    Start,
    /// Inside an unquoted argument.
    ReadingWord,
    /// Inside a quoted span opened by the contained character.
    Quoted(char),
}

struct LexingFSM {
    input: Vec<char>,
    pos: usize,
    state: LexingState,
    buffer: String,
}

impl LexingFSM {
    fn new(line: &str) -> Self {
        LexingFSM {
            input: line.chars().collect(),
            pos: 0,
            state: LexingState::Start,
            buffer: String::new(),
        }
    }

    /// Runs the machine over the whole input.
    ///
    /// Tokens collected before an unfinished quote are discarded: the caller gets
    /// either every argument of the line or an error.
    fn make_tokens(&mut self) -> Result<Vec<String>, LexingError> {
        let mut out = Vec::new();

        while let Some(ch) = self.read_char() {
            match self.state {
                LexingState::Start => self.handle_start(ch),
                LexingState::ReadingWord => self.handle_word(ch, &mut out),
                LexingState::Quoted(quote) => self.handle_quoted(ch, quote, &mut out),
            }
        }

        if let LexingState::Quoted(quote) = self.state {
            return Err(LexingError::UnfinishedQuote(quote));
        }

        if !self.buffer.is_empty() {
            out.push(std::mem::take(&mut self.buffer));
        }

        Ok(out)
    }

    fn read_char(&mut self) -> Option<char> {
        let ch = self.input.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn handle_start(&mut self, ch: char) {
        match ch {
            c if is_separator(c) => {}
            '\'' | '"' => self.state = LexingState::Quoted(ch),
            c => {
                self.buffer.push(c);
                self.state = LexingState::ReadingWord;
            }
        }
    }

    fn handle_word(&mut self, ch: char, out: &mut Vec<String>) {
        match ch {
            c if is_separator(c) => {
                out.push(std::mem::take(&mut self.buffer));
                self.state = LexingState::Start;
            }
            // The text read so far stays part of the argument; only the closing
            // quote decides where it ends.
            '\'' | '"' => self.state = LexingState::Quoted(ch),
            c => self.buffer.push(c),
        }
    }

    fn handle_quoted(&mut self, ch: char, quote: char, out: &mut Vec<String>) {
        if ch == quote {
            // Pushed even when empty, so `''` is an argument of its own.
            out.push(std::mem::take(&mut self.buffer));
            self.state = LexingState::Start;
        } else {
            self.buffer.push(ch);
        }
    }
}

/// ASCII whitespace including vertical tab, the set C `isspace` accepts.
/// Other Unicode spaces are ordinary characters.
fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}

/// Splits `line` into arguments.
///
/// # Returns
/// The arguments in order, or [`LexingError::UnfinishedQuote`] if a quote is never
/// closed. An empty or whitespace-only line yields an empty vector.
pub fn split_into_tokens(line: &str) -> Result<Vec<String>, LexingError> {
    LexingFSM::new(line).make_tokens()
}

/// Splits `line` into arguments, reporting malformed input on `stderr`.
///
/// A line with unbalanced quotes produces a diagnostic and an empty vector, the
/// same value an empty line produces, so the interpreter simply prompts again.
pub fn tokenize(line: &str, stderr: &mut dyn Write) -> Vec<String> {
    split_into_tokens(line).unwrap_or_else(|err| {
        errors::report(stderr, &ShellError::from(err));
        Vec::new()
    })
}
