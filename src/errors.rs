use crate::command::ExitCode;
use crate::lexer::LexingError;
use std::io::{self, Write};
use thiserror::Error;

/// Every failure the interpreter reports to the operator.
///
/// The `Display` text is the diagnostic itself; [`report`] adds the `lsh:` prefix.
/// Only [`ShellError::ReadLine`] stops the interactive loop; it travels to `main`
/// inside an `anyhow::Error`.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("expected argument to \"{command}\"")]
    MissingArgument { command: &'static str },

    #[error("cd failed: {0}")]
    ChangeDir(String),

    #[error("mismatched quotes")]
    MismatchedQuotes,

    #[error("failed to execute command: {0}")]
    ExecFailed(String),

    #[error("command exited with code {0}")]
    NonZeroExit(ExitCode),

    #[error("failed to create child process")]
    SpawnFailed(#[source] io::Error),

    #[error("failed to wait for {0}")]
    WaitFailed(String, #[source] io::Error),

    #[error("failed to write output")]
    Output(#[from] io::Error),

    #[error("error reading line")]
    ReadLine(#[source] io::Error),
}

impl From<LexingError> for ShellError {
    fn from(err: LexingError) -> Self {
        match err {
            LexingError::UnfinishedQuote(_) => ShellError::MismatchedQuotes,
        }
    }
}

/// Writes `err` as a single diagnostic line.
///
/// A failure to write the diagnostic itself is ignored; there is nowhere left to
/// report it.
pub fn report(stderr: &mut dyn Write, err: &ShellError) {
    let _ = writeln!(stderr, "lsh: {err}");
    let _ = stderr.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_prefixes_diagnostic() {
        let mut out = Vec::new();
        report(&mut out, &ShellError::NonZeroExit(2));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "lsh: command exited with code 2\n"
        );
    }

    #[test]
    fn test_missing_argument_names_command() {
        let err = ShellError::MissingArgument { command: "cd" };
        assert_eq!(err.to_string(), "expected argument to \"cd\"");
    }

    #[test]
    fn test_read_line_keeps_cause_in_chain() {
        let err = anyhow::Error::new(ShellError::ReadLine(io::Error::other("bad byte")));
        assert_eq!(err.to_string(), "error reading line");
        assert_eq!(format!("{err:#}"), "error reading line: bad byte");
    }

    #[test]
    fn test_change_dir_hides_system_error() {
        let err = ShellError::ChangeDir("/nope".to_string());
        assert_eq!(err.to_string(), "cd failed: /nope");
    }
}
