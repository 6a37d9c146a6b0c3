use clap::Parser;

/// Generate a reproducible THIRDPARTYLICENSES report for a Python project
///
/// The license generator is installed into a temporary virtual environment,
/// run against the project, and the timestamped first and last line of its
/// report are removed.
#[derive(Parser, Debug)]
#[command(name = "run-third-party-license-generator")]
#[command(version)]
#[command(about = "Generate a reproducible THIRDPARTYLICENSES report for a Python project", long_about = None)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Report file name, forwarded to the generator as --output-file
    #[arg(short, long = "output-file", value_name = "FILE")]
    pub output_file: Option<String>,

    /// Path to a config file (defaults to third-party-license.config.yml in the project)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Python interpreter used to create the virtual environment
    #[arg(long, value_name = "INTERPRETER")]
    pub python: Option<String>,

    /// Interpreter whose installed packages are inspected by the generator
    #[arg(long, value_name = "PATH")]
    pub python_path: Option<String>,

    /// pip requirement for the generator (e.g. "third-party-license-file-generator==2024.8.23")
    #[arg(long, value_name = "REQUIREMENT")]
    pub package: Option<String>,

    /// Extra arguments forwarded verbatim to the generator (after `--`)
    #[arg(value_name = "GENERATOR_ARGS", last = true)]
    pub generator_args: Vec<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["run-third-party-license-generator"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.output_file.is_none());
        assert!(args.config.is_none());
        assert!(args.python.is_none());
        assert!(args.python_path.is_none());
        assert!(args.package.is_none());
        assert!(args.generator_args.is_empty());
    }

    #[test]
    fn test_output_file_short_and_long() {
        let args =
            Args::try_parse_from(["run-third-party-license-generator", "-o", "LICENSES"]).unwrap();
        assert_eq!(args.output_file.as_deref(), Some("LICENSES"));

        let args = Args::try_parse_from([
            "run-third-party-license-generator",
            "--output-file=OTHER",
        ])
        .unwrap();
        assert_eq!(args.output_file.as_deref(), Some("OTHER"));
    }

    #[test]
    fn test_generator_args_after_double_dash() {
        let args = Args::try_parse_from([
            "run-third-party-license-generator",
            "-p",
            "project",
            "--",
            "--permit-gpl",
            "--skip-prefix",
            "acme",
        ])
        .unwrap();
        assert_eq!(args.path.as_deref(), Some("project"));
        assert_eq!(
            args.generator_args,
            vec!["--permit-gpl", "--skip-prefix", "acme"]
        );
    }

    #[test]
    fn test_python_options() {
        let args = Args::try_parse_from([
            "run-third-party-license-generator",
            "--python",
            "python3.12",
            "--python-path",
            "/opt/venv/bin/python",
            "--package",
            "third-party-license-file-generator==2024.8.23",
        ])
        .unwrap();
        assert_eq!(args.python.as_deref(), Some("python3.12"));
        assert_eq!(args.python_path.as_deref(), Some("/opt/venv/bin/python"));
        assert_eq!(
            args.package.as_deref(),
            Some("third-party-license-file-generator==2024.8.23")
        );
    }

    #[test]
    fn test_generator_args_require_double_dash() {
        let result = Args::try_parse_from(["run-third-party-license-generator", "stray"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let result = Args::try_parse_from(["run-third-party-license-generator", "--bogus"]);
        assert!(result.is_err());
    }
}
