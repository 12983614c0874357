use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::{Error, Result};

/// Runs a command string to completion.
pub trait CommandRunner {
    /// Runs `command`, blocking until it has exited.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be started or exited with a
    /// non-success status.
    fn run(&mut self, command: &str) -> Result<()>;
}

/// Executes a command with the terminal's standard streams inherited.
///
/// # Errors
///
/// Returns an error if command execution fails or exits with non-zero status.
pub fn execute_command(mut command: Command) -> Result<()> {
    let status = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()?
        .wait()?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::SubProcessExit(status.code()))
    }
}

/// Hands command strings to the system shell, e.g. `sh -c <command>`.
#[derive(Debug, Clone)]
pub struct ShellDispatcher {
    shell_command: String,
}

impl ShellDispatcher {
    #[must_use]
    pub fn new(shell_command: impl Into<String>) -> Self {
        Self {
            shell_command: shell_command.into(),
        }
    }

    /// Builds the process for `command`: the shell prefix split on whitespace,
    /// with the command string appended as a single argument.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell prefix is blank.
    pub fn build_command(&self, command: &str) -> Result<Command> {
        let mut words = self.shell_command.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| Error::EmptyShellCommand(self.shell_command.clone()))?;

        let mut process = Command::new(program);
        process.args(words).arg(command);
        Ok(process)
    }
}

impl CommandRunner for ShellDispatcher {
    fn run(&mut self, command: &str) -> Result<()> {
        info!("Dispatching `{command}` via `{}`", self.shell_command);
        let process = self.build_command(command)?;
        debug!("Spawning {process:?}");
        execute_command(process)
    }
}
