use crate::command::{ExitCode, Status};
use crate::errors::{self, ShellError};
use std::io::{self, Write};
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Command that is not a builtin.
///
/// The program is resolved through `PATH` unless its name contains a slash, and
/// runs with the interpreter's standard streams, environment and working directory.
pub struct ExternalCommand<'a> {
    name: &'a str,
    args: &'a [String],
}

impl<'a> ExternalCommand<'a> {
    /// Split a full argument vector into program name and arguments.
    ///
    /// Returns `None` for an empty vector.
    pub fn new(argv: &'a [String]) -> Option<Self> {
        let (name, args) = argv.split_first()?;
        Some(Self {
            name: name.as_str(),
            args,
        })
    }

    /// Spawn the program and block until it terminates.
    ///
    /// Returns the exit code on success or when the child was killed by a signal.
    /// A non-zero exit code is returned as [`ShellError::NonZeroExit`].
    pub fn execute(self) -> Result<ExitCode, ShellError> {
        let mut child = Command::new(self.name)
            .args(self.args)
            .spawn()
            .map_err(|err| spawn_error(self.name, err))?;
        debug!(pid = child.id(), command = self.name, "spawned child");

        let exit_status = child
            .wait()
            .map_err(|err| ShellError::WaitFailed(self.name.to_owned(), err))?;

        match exit_status.code() {
            Some(0) => Ok(0),
            Some(code) => Err(ShellError::NonZeroExit(code)),
            None => {
                let code = terminated_by_signal(exit_status);
                debug!(command = self.name, code, "child terminated by signal");
                Ok(code)
            }
        }
    }
}

/// Run `argv` as an external program and wait for it.
///
/// Failures to start the program and non-zero exit codes are reported on
/// `stderr`. The interpreter keeps going whatever happens, so the result is
/// always [`Status::Continue`]. An empty `argv` does nothing.
pub fn launch(argv: &[String], stderr: &mut dyn Write) -> Status {
    match ExternalCommand::new(argv) {
        Some(cmd) => finish(cmd.name, cmd.execute(), stderr),
        None => Status::Continue,
    }
}

fn finish(name: &str, result: Result<ExitCode, ShellError>, stderr: &mut dyn Write) -> Status {
    match result {
        Ok(code) => debug!(command = name, code, "external command finished"),
        Err(err) => errors::report(stderr, &err),
    }
    Status::Continue
}

// Resource exhaustion means no child was created at all; anything else means the
// child existed but could not become the requested program.
fn spawn_error(name: &str, err: io::Error) -> ShellError {
    match err.kind() {
        io::ErrorKind::OutOfMemory | io::ErrorKind::WouldBlock => ShellError::SpawnFailed(err),
        _ => {
            debug!(%err, command = name, "exec failed");
            ShellError::ExecFailed(name.to_owned())
        }
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}
