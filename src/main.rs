use owo_colors::{OwoColorize, Stream};
use std::path::{Path, PathBuf};
use std::process;
use third_party_license_hook::adapters::outbound::console::StderrProgressReporter;
use third_party_license_hook::adapters::outbound::filesystem::FileSystemReportStore;
use third_party_license_hook::adapters::outbound::process::SystemCommandRunner;
use third_party_license_hook::adapters::outbound::venv::{venv_interpreter, TempVenvProvisioner};
use third_party_license_hook::application::dto::ReportRequest;
use third_party_license_hook::application::use_cases::GenerateLicenseReportUseCase;
use third_party_license_hook::cli::Args;
use third_party_license_hook::config::{discover_config, load_config_from_path, ConfigFile};
use third_party_license_hook::shared::error::{ExitCode, HookError};
use third_party_license_hook::shared::Result;

const DEFAULT_PYTHON: &str = "python";

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!(
            "\n{}\n",
            "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
        );
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e));
    }
}

fn run(args: Args) -> Result<()> {
    let project_path = PathBuf::from(args.path.as_deref().unwrap_or("."));
    validate_project_path(&project_path)?;

    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(&project_path)?.unwrap_or_default(),
    };

    let virtual_env = std::env::var_os("VIRTUAL_ENV").map(PathBuf::from);
    let settings = resolve_settings(&args, config, virtual_env.as_deref());
    let request = settings.to_request(project_path)?;

    // Create adapters (Dependency Injection)
    let command_runner = SystemCommandRunner::new();
    let environment_provisioner = TempVenvProvisioner::new(command_runner, settings.python);
    let report_store = FileSystemReportStore::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateLicenseReportUseCase::new(
        environment_provisioner,
        command_runner,
        report_store,
        progress_reporter,
    );

    use_case.execute(request)?;

    Ok(())
}

/// Settings after merging CLI flags, config file and defaults
#[derive(Debug, PartialEq)]
struct Settings {
    python: String,
    python_path: String,
    package: Option<String>,
    requirements_path: Option<String>,
    skip_prefixes: Option<Vec<String>>,
    do_not_skip_not_required_packages: Option<bool>,
    generator_args: Vec<String>,
}

impl Settings {
    fn to_request(&self, project_path: PathBuf) -> Result<ReportRequest> {
        let mut builder = ReportRequest::builder()
            .project_path(project_path)
            .python_path(self.python_path.clone())
            .extra_args(self.generator_args.iter().cloned());

        if let Some(package) = &self.package {
            builder = builder.requirement(package.clone());
        }
        if let Some(path) = &self.requirements_path {
            builder = builder.requirements_path(path.clone());
        }
        if let Some(prefixes) = &self.skip_prefixes {
            builder = builder.skip_prefixes(prefixes.clone());
        }
        if let Some(enabled) = self.do_not_skip_not_required_packages {
            builder = builder.do_not_skip_not_required_packages(enabled);
        }

        builder.build()
    }
}

/// Merges settings with precedence CLI > config file > defaults.
///
/// Forwarded generator arguments are ordered config `extra_args`, then the
/// output file, then the CLI's trailing arguments.
fn resolve_settings(args: &Args, config: ConfigFile, virtual_env: Option<&Path>) -> Settings {
    let python = args
        .python
        .clone()
        .or(config.python)
        .unwrap_or_else(|| DEFAULT_PYTHON.to_string());

    let python_path = args
        .python_path
        .clone()
        .or(config.python_path)
        .or_else(|| virtual_env.map(|venv| venv_interpreter(venv).display().to_string()))
        .unwrap_or_else(|| python.clone());

    let mut generator_args = config.extra_args.unwrap_or_default();
    if let Some(output_file) = args.output_file.clone().or(config.output_file) {
        generator_args.push("--output-file".to_string());
        generator_args.push(output_file);
    }
    generator_args.extend(args.generator_args.iter().cloned());

    Settings {
        python,
        python_path,
        package: args.package.clone().or(config.package),
        requirements_path: config.requirements_path,
        skip_prefixes: config.skip_prefixes,
        do_not_skip_not_required_packages: config.do_not_skip_not_required_packages,
        generator_args,
    }
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<HookError>()
        .map(HookError::exit_code)
        .unwrap_or(ExitCode::ApplicationError.as_i32())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(HookError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| HookError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(HookError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(HookError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    // Security check: Canonicalize path to prevent path traversal
    path.canonicalize().map_err(|e| HookError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to canonicalize path: {}", e),
    })?;

    Ok(())
}
