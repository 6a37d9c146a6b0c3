use crate::ports::outbound::{CommandOutput, CommandRunner, CommandSpec};
use crate::shared::Result;
use anyhow::Context;
use std::process::{Command, Stdio};

/// SystemCommandRunner adapter backed by `std::process::Command`
///
/// The child inherits the parent's environment.
#[derive(Debug, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(command: &CommandSpec) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &command.current_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run_captured(&self, command: &CommandSpec) -> Result<CommandOutput> {
        let output = Self::build(command)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to start `{}`", command.display()))?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_inherited(&self, command: &CommandSpec) -> Result<Option<i32>> {
        let status = Self::build(command)
            .stdin(Stdio::null())
            .status()
            .with_context(|| format!("Failed to start `{}`", command.display()))?;

        Ok(status.code())
    }
}
