use crate::shared::Result;
use std::path::{Path, PathBuf};

/// A subprocess to launch: program, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Human-readable command line for progress and error messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of a subprocess whose output was captured
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// CommandRunner port for launching subprocesses
///
/// Both methods block until the child exits. An `Err` means the process
/// could not be started at all; a started process that fails is reported
/// through its exit code.
pub trait CommandRunner {
    /// Runs the command with stdout and stderr captured
    fn run_captured(&self, command: &CommandSpec) -> Result<CommandOutput>;

    /// Runs the command with the parent's stdio and returns its exit code
    fn run_inherited(&self, command: &CommandSpec) -> Result<Option<i32>>;
}
