use crate::application::dto::{ReportRequest, ReportResponse};
use crate::license_report::domain::{ReportDocument, GENERATOR_MODULE};
use crate::license_report::services::{FramingTrimmer, OutputFileResolver};
use crate::ports::outbound::{
    CommandRunner, CommandSpec, EnvironmentProvisioner, ProgressReporter, ReportFingerprint,
    ReportStore, ToolEnvironment,
};
use crate::shared::error::HookError;
use crate::shared::Result;
use std::path::Path;

const TOTAL_STEPS: usize = 3;

/// GenerateLicenseReportUseCase - Core use case of the hook
///
/// Builds a disposable environment, installs the generator into it, runs it
/// against the project and strips the timestamped first and last line from
/// the report it writes. The environment is owned by `execute` and released
/// when it returns, whichever step fails.
///
/// # Type Parameters
/// * `EP` - EnvironmentProvisioner implementation
/// * `CR` - CommandRunner implementation used for the generator
/// * `RS` - ReportStore implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateLicenseReportUseCase<EP, CR, RS, PR> {
    environment_provisioner: EP,
    command_runner: CR,
    report_store: RS,
    progress_reporter: PR,
}

impl<EP, CR, RS, PR> GenerateLicenseReportUseCase<EP, CR, RS, PR>
where
    EP: EnvironmentProvisioner,
    CR: CommandRunner,
    RS: ReportStore,
    PR: ProgressReporter,
{
    /// Creates a new GenerateLicenseReportUseCase with injected dependencies
    pub fn new(
        environment_provisioner: EP,
        command_runner: CR,
        report_store: RS,
        progress_reporter: PR,
    ) -> Self {
        Self {
            environment_provisioner,
            command_runner,
            report_store,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// - `HookError::ToolInstall` if the environment or the generator cannot be installed
    /// - `HookError::ToolExecution` if the generator fails, writes no report, or
    ///   leaves an existing report untouched
    /// - `HookError::FileIo` if the report cannot be read or rewritten
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let generator_args = request.generator_options.to_args();
        let report_path = request
            .project_path
            .join(OutputFileResolver::resolve(&generator_args));

        // A report left over from an earlier run must not pass for new output
        let previous = self.report_store.fingerprint(&report_path);

        // Step 1-2: Disposable environment with the generator installed
        let environment = self.prepare_environment(&request.requirement)?;

        // Step 3: Generate the report inside the project
        self.run_generator(&environment, &request.project_path, generator_args)?;
        self.ensure_report_written(&report_path, previous)?;

        // Step 4: Strip the header and footer
        let response = self.trim_report(&report_path)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Wrote {} ({} entries)",
            response.report_path.display(),
            response.trimmed_line_count
        ));

        Ok(response)
    }

    fn prepare_environment(&self, requirement: &str) -> Result<EP::Environment> {
        self.progress_reporter.report_progress(
            1,
            TOTAL_STEPS,
            Some("🐍 Creating temporary virtual environment..."),
        );
        let environment = self.environment_provisioner.create()?;

        self.progress_reporter.report_progress(
            2,
            TOTAL_STEPS,
            Some(format!("📦 Installing {}...", requirement).as_str()),
        );
        self.environment_provisioner.install(&environment, requirement)?;

        Ok(environment)
    }

    fn run_generator(
        &self,
        environment: &EP::Environment,
        project_path: &Path,
        generator_args: Vec<String>,
    ) -> Result<()> {
        self.progress_reporter.report(&format!(
            "[{}/{}] 📝 Running {} in {}",
            TOTAL_STEPS,
            TOTAL_STEPS,
            GENERATOR_MODULE,
            project_path.display()
        ));

        let command = CommandSpec::new(environment.interpreter())
            .args(generator_args)
            .current_dir(project_path);

        let exit_code = self
            .command_runner
            .run_inherited(&command)
            .map_err(|e| HookError::ToolExecution {
                details: format!("{:#}", e),
                exit_code: None,
                hint: "Check that the virtual environment interpreter is runnable".to_string(),
            })?;

        match exit_code {
            Some(0) => Ok(()),
            Some(code) => Err(HookError::ToolExecution {
                details: format!("{} exited with status {}", GENERATOR_MODULE, code),
                exit_code: Some(code),
                hint: "See the generator output above for the cause".to_string(),
            }
            .into()),
            None => Err(HookError::ToolExecution {
                details: format!("{} was terminated by a signal", GENERATOR_MODULE),
                exit_code: None,
                hint: "See the generator output above for the cause".to_string(),
            }
            .into()),
        }
    }

    fn ensure_report_written(
        &self,
        report_path: &Path,
        previous: Option<ReportFingerprint>,
    ) -> Result<()> {
        let details = match self.report_store.fingerprint(report_path) {
            None => format!(
                "The generator exited successfully but produced no report file at {}",
                report_path.display()
            ),
            Some(current) if previous == Some(current) => format!(
                "The generator exited successfully but produced no report file; {} is left over from an earlier run",
                report_path.display()
            ),
            Some(_) => return Ok(()),
        };

        Err(HookError::ToolExecution {
            details,
            exit_code: None,
            hint: "Check the --output-file argument and the requirements path".to_string(),
        }
        .into())
    }

    fn trim_report(&self, report_path: &Path) -> Result<ReportResponse> {
        let content = self.report_store.read_report(report_path)?;
        let document = ReportDocument::parse(&content);
        let trimmed = FramingTrimmer::trim(&document);

        if trimmed.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} has no entries after removing its header and footer.",
                report_path.display()
            ));
        }

        self.report_store.write_report(report_path, &trimmed.render())?;

        Ok(ReportResponse::new(
            report_path.to_path_buf(),
            document.line_count(),
            trimmed.line_count(),
        ))
    }
}
