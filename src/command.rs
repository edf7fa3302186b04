use crate::errors::ShellError;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// What the interactive loop does after a command finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Print a fresh prompt and read the next line.
    Continue,
    /// Stop the interpreter with a success outcome.
    Terminate,
}

/// A command executed in-process by the interpreter itself.
///
/// Builtins run on the interpreter's own thread, so they can change state a child
/// process could not, such as the working directory. Implementations live in a
/// process-wide table and therefore must be `Sync`.
pub trait BuiltinCommand: Sync {
    /// Canonical name of the command, e.g. "cd".
    fn name(&self) -> &'static str;

    /// Executes the command.
    ///
    /// `args` is the full argument vector, including the command name at index 0.
    /// An error is reported by the caller as a diagnostic; it never stops the loop.
    fn execute(&self, args: &[String], stdout: &mut dyn Write) -> Result<Status, ShellError>;
}
