use crate::ports::outbound::{
    CommandOutput, CommandRunner, CommandSpec, EnvironmentProvisioner, ToolEnvironment,
};
use crate::shared::error::HookError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Number of trailing output lines kept in install error messages
const ERROR_TAIL_LINES: usize = 20;

/// Path of the Python interpreter inside a virtual environment
pub fn venv_interpreter(venv: &Path) -> PathBuf {
    if cfg!(windows) {
        venv.join("Scripts").join("python.exe")
    } else {
        venv.join("bin").join("python")
    }
}

/// TempVenv - A virtual environment living in a temporary directory
///
/// The directory is deleted when the value is dropped.
#[derive(Debug)]
pub struct TempVenv {
    temp_dir: TempDir,
    venv: PathBuf,
    interpreter: PathBuf,
}

impl TempVenv {
    fn new(temp_dir: TempDir) -> Self {
        let venv = temp_dir.path().join(".venv");
        let interpreter = venv_interpreter(&venv);
        Self {
            temp_dir,
            venv,
            interpreter,
        }
    }

    /// Directory holding the venv; removed on drop
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl ToolEnvironment for TempVenv {
    fn root(&self) -> &Path {
        &self.venv
    }

    fn interpreter(&self) -> &Path {
        &self.interpreter
    }
}

/// TempVenvProvisioner adapter creating venvs with `python -m venv`
///
/// # Type Parameters
/// * `R` - CommandRunner used for `venv` and `pip`
pub struct TempVenvProvisioner<R> {
    runner: R,
    python: PathBuf,
}

impl<R: CommandRunner> TempVenvProvisioner<R> {
    /// # Arguments
    /// * `runner` - Runner used to launch Python
    /// * `python` - Base interpreter that creates the venv (e.g. `python3`)
    pub fn new(runner: R, python: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            python: python.into(),
        }
    }

    fn run_install_step(&self, step: &CommandSpec) -> Result<()> {
        let output = self
            .runner
            .run_captured(step)
            .map_err(|e| HookError::ToolInstall {
                step: step.display(),
                details: format!("{:#}", e),
            })?;

        if !output.success() {
            return Err(HookError::ToolInstall {
                step: step.display(),
                details: failure_details(&output),
            }
            .into());
        }
        Ok(())
    }
}

impl<R: CommandRunner> EnvironmentProvisioner for TempVenvProvisioner<R> {
    type Environment = TempVenv;

    fn create(&self) -> Result<TempVenv> {
        let temp_dir = TempDir::new().map_err(|e| HookError::ToolInstall {
            step: "create temporary directory".to_string(),
            details: e.to_string(),
        })?;
        let env = TempVenv::new(temp_dir);

        let step = CommandSpec::new(&self.python).args([
            "-m".to_string(),
            "venv".to_string(),
            env.root().display().to_string(),
        ]);
        self.run_install_step(&step)?;

        Ok(env)
    }

    fn install(&self, environment: &TempVenv, requirement: &str) -> Result<()> {
        let step = CommandSpec::new(environment.interpreter()).args([
            "-m",
            "pip",
            "install",
            "--disable-pip-version-check",
            requirement,
        ]);
        self.run_install_step(&step)
    }
}

fn failure_details(output: &CommandOutput) -> String {
    let status = match output.exit_code {
        Some(code) => format!("exited with status {}", code),
        None => "terminated by signal".to_string(),
    };
    let text = if output.stderr.trim().is_empty() {
        &output.stdout
    } else {
        &output.stderr
    };
    let lines: Vec<&str> = text.lines().collect();
    let tail = &lines[lines.len().saturating_sub(ERROR_TAIL_LINES)..];
    if tail.is_empty() {
        status
    } else {
        format!("{}\n{}", status, tail.join("\n"))
    }
}
