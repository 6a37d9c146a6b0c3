use std::fs;
use std::sync::{Arc, Mutex};
use third_party_license_hook::prelude::*;

/// Mock CommandRunner standing in for the license generator
///
/// On `run_inherited` it writes the configured report into the command's
/// working directory, at the file named by the command's `-o/--output-file`
/// arguments, and returns the configured exit code.
#[derive(Clone)]
pub struct MockCommandRunner {
    report: Option<String>,
    exit_code: Option<i32>,
    fail_to_start: bool,
    pub commands: Arc<Mutex<Vec<CommandSpec>>>,
}

impl MockCommandRunner {
    fn with(report: Option<String>, exit_code: Option<i32>, fail_to_start: bool) -> Self {
        Self {
            report,
            exit_code,
            fail_to_start,
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Writes `lines` joined by newlines and exits 0
    pub fn writing_report(lines: &[&str]) -> Self {
        let mut content = lines.join("\n");
        content.push('\n');
        Self::with(Some(content), Some(0), false)
    }

    /// Writes nothing and exits with `code`
    pub fn exiting_with(code: i32) -> Self {
        Self::with(None, Some(code), false)
    }

    /// Exits 0 without writing a report
    pub fn without_report() -> Self {
        Self::with(None, Some(0), false)
    }

    pub fn failing_to_start() -> Self {
        Self::with(None, None, true)
    }

    pub fn get_commands(&self) -> Vec<CommandSpec> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run_captured(&self, command: &CommandSpec) -> Result<CommandOutput> {
        self.commands.lock().unwrap().push(command.clone());
        Ok(CommandOutput {
            exit_code: self.exit_code,
            ..CommandOutput::default()
        })
    }

    fn run_inherited(&self, command: &CommandSpec) -> Result<Option<i32>> {
        self.commands.lock().unwrap().push(command.clone());
        if self.fail_to_start {
            anyhow::bail!("Mock spawn failure: No such file or directory");
        }

        if let (Some(report), Some(dir)) = (&self.report, &command.current_dir) {
            let path = dir.join(OutputFileResolver::resolve(&command.args));
            fs::write(path, report)?;
        }
        Ok(self.exit_code)
    }
}
