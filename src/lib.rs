//! A tiny interactive command interpreter.
//!
//! Each input line is split into arguments by a quote-aware [`lexer`], then run
//! either as one of the builtins `cd`, `help` and `exit` or as an external program
//! that the interpreter waits for before prompting again. There is no globbing,
//! redirection, piping or variable expansion: one line is one foreground command.
//!
//! The main entry point is [`Interpreter`]; the line sources it reads from live in
//! [`reader`].

mod builtin;
pub mod cli;
pub mod command;
pub mod errors;
mod external;
mod interpreter;
#[cfg(test)]
mod io_adapters;
pub mod lexer;
pub mod reader;

pub use builtin::Registry;
pub use command::{ExitCode, Status};
pub use external::launch;
pub use interpreter::{DEFAULT_PROMPT, Interpreter};

/// Serializes tests that change the process working directory.
#[cfg(test)]
pub(crate) fn lock_current_dir() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
