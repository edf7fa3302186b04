use crate::command::{BuiltinCommand, Status};
use crate::errors::ShellError;
use std::env;
use std::io::Write;
use tracing::debug;

/// Builtins known to the shell at compile time, in lookup order.
static BUILTINS: &[&dyn BuiltinCommand] = &[&Cd, &Help, &Exit];

/// Read-only table mapping command names to in-process handlers.
///
/// The default registry holds `cd`, `help` and `exit`. It is never modified after
/// construction, so copies can be handed out freely.
#[derive(Clone, Copy)]
pub struct Registry {
    commands: &'static [&'static dyn BuiltinCommand],
}

impl Registry {
    /// Find the builtin called `name`; the first match in table order wins.
    pub fn lookup(&self, name: &str) -> Option<&'static dyn BuiltinCommand> {
        self.commands.iter().copied().find(|cmd| cmd.name() == name)
    }

    /// Number of builtins in the table.
    pub fn count(&self) -> usize {
        self.commands.len()
    }

    /// Names of all builtins in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.commands.iter().map(|cmd| cmd.name())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self { commands: BUILTINS }
    }
}

/// Change the interpreter's working directory to `args[1]`.
///
/// Child processes started afterwards inherit the new directory.
pub struct Cd;

impl BuiltinCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, args: &[String], _stdout: &mut dyn Write) -> Result<Status, ShellError> {
        let target = args
            .get(1)
            .ok_or(ShellError::MissingArgument {
                command: self.name(),
            })?;

        env::set_current_dir(target).map_err(|err| {
            debug!(%err, target = %target, "chdir failed");
            ShellError::ChangeDir(target.clone())
        })?;

        debug!(cwd = %target, "changed working directory");
        Ok(Status::Continue)
    }
}

/// Print a short usage hint.
pub struct Help;

impl BuiltinCommand for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _args: &[String], stdout: &mut dyn Write) -> Result<Status, ShellError> {
        writeln!(stdout, "Type program names and arguments, and hit enter.")?;
        writeln!(stdout, "The following are built in:")?;
        for name in Registry::default().names() {
            writeln!(stdout, "  {name}")?;
        }
        stdout.flush()?;
        Ok(Status::Continue)
    }
}

/// Stop the interpreter. Arguments are ignored.
pub struct Exit;

impl BuiltinCommand for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _args: &[String], _stdout: &mut dyn Write) -> Result<Status, ShellError> {
        Ok(Status::Terminate)
    }
}
