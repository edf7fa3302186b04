use crate::builtin::Registry;
use crate::command::Status;
use crate::errors;
use crate::external;
use crate::lexer;
use crate::reader::LineReader;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Prompt shown after the blank separator line when none is configured.
pub const DEFAULT_PROMPT: &str = "$ ";

/// A minimal interactive interpreter for builtin and external commands.
///
/// Each line is split into arguments, dispatched to a builtin from the
/// [`Registry`] when its first argument names one, and run as an external program
/// otherwise. Every failure below the loop becomes a diagnostic on the error
/// stream; only the `exit` builtin or end of input stops it.
///
/// Example
/// ```
/// use lsh::{Interpreter, Status};
/// let mut sh = Interpreter::default();
/// assert_eq!(sh.run_line("exit"), Status::Terminate);
/// ```
pub struct Interpreter {
    registry: Registry,
    prompt: String,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl Interpreter {
    /// Create an interpreter writing to the given streams.
    pub fn new(stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self {
            registry: Registry::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            stdout,
            stderr,
        }
    }

    /// Replace the prompt text printed before each read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// The builtins this interpreter dispatches to before falling back to
    /// external programs.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Route one argument vector to a builtin or an external program.
    ///
    /// An empty vector does nothing. Whatever goes wrong is reported on the error
    /// stream, and the result is [`Status::Terminate`] only for `exit`.
    pub fn execute(&mut self, args: &[String]) -> Status {
        let Some(name) = args.first() else {
            return Status::Continue;
        };

        let Some(builtin) = self.registry.lookup(name) else {
            debug!(command = %name, "launching external command");
            // Keep our buffered output ahead of whatever the child prints.
            let _ = self.stdout.flush();
            return external::launch(args, &mut *self.stderr);
        };

        debug!(builtin = %name, "running builtin");
        builtin
            .execute(args, &mut *self.stdout)
            .unwrap_or_else(|err| {
                errors::report(&mut *self.stderr, &err);
                Status::Continue
            })
    }

    /// Tokenize and execute a single input line.
    pub fn run_line(&mut self, line: &str) -> Status {
        let args = lexer::tokenize(line, &mut *self.stderr);
        trace!(?args, "tokenized line");
        self.execute(&args)
    }

    /// Read-eval loop.
    ///
    /// Prints a blank line and the prompt, reads a line from `reader` and runs it,
    /// until `exit` is executed or the input ends; both return `Ok(())`. A read
    /// error is returned as is and should end the process with a failure status.
    pub fn repl(&mut self, reader: &mut dyn LineReader) -> anyhow::Result<()> {
        loop {
            let _ = writeln!(self.stdout);
            let _ = self.stdout.flush();

            let Some(line) = reader.read_line(&self.prompt)? else {
                debug!("end of input");
                return Ok(());
            };

            if self.run_line(&line) == Status::Terminate {
                debug!("exit requested");
                return Ok(());
            }
        }
    }
}

impl Default for Interpreter {
    /// Create an interpreter on the process's standard output and error streams.
    fn default() -> Self {
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()))
    }
}
