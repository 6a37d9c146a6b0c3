use crate::shared::Result;

/// pip requirement installed when none is configured
pub const GENERATOR_REQUIREMENT: &str = "third-party-license-file-generator";

/// Python module that implements the license generator CLI
pub const GENERATOR_MODULE: &str = "third_party_license_file_generator";

/// Report file name the generator writes when `--output-file` is not given
pub const DEFAULT_REPORT_FILE: &str = "THIRDPARTYLICENSES";

const DEFAULT_REQUIREMENTS_PATH: &str = "pyproject.toml";
const DEFAULT_SKIP_PREFIXES: [&str; 3] = ["fc", "fr", "FR"];

/// Maximum number of forwarded arguments accepted
const MAX_EXTRA_ARGS: usize = 256;

/// GeneratorOptions - The argument set passed to the license generator
///
/// Built-in options come first, forwarded arguments are appended verbatim
/// in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    requirements_path: String,
    python_path: String,
    skip_prefixes: Vec<String>,
    do_not_skip_not_required_packages: bool,
    extra_args: Vec<String>,
}

impl GeneratorOptions {
    /// Options matching the hook's defaults for the given inspected interpreter
    pub fn new(python_path: impl Into<String>) -> Self {
        Self {
            requirements_path: DEFAULT_REQUIREMENTS_PATH.to_string(),
            python_path: python_path.into(),
            skip_prefixes: DEFAULT_SKIP_PREFIXES.iter().map(|p| p.to_string()).collect(),
            do_not_skip_not_required_packages: true,
            extra_args: Vec::new(),
        }
    }

    pub fn with_requirements_path(mut self, path: impl Into<String>) -> Self {
        self.requirements_path = path.into();
        self
    }

    pub fn with_skip_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.skip_prefixes = prefixes;
        self
    }

    pub fn with_do_not_skip_not_required_packages(mut self, enabled: bool) -> Self {
        self.do_not_skip_not_required_packages = enabled;
        self
    }

    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn requirements_path(&self) -> &str {
        &self.requirements_path
    }

    pub fn python_path(&self) -> &str {
        &self.python_path
    }

    pub fn skip_prefixes(&self) -> &[String] {
        &self.skip_prefixes
    }

    pub fn extra_args(&self) -> &[String] {
        &self.extra_args
    }

    /// Checks the options before they reach a subprocess
    pub fn validate(&self) -> Result<()> {
        if self.requirements_path.trim().is_empty() {
            anyhow::bail!("Requirements path cannot be empty");
        }
        if self.python_path.trim().is_empty() {
            anyhow::bail!("Python path cannot be empty");
        }
        if let Some(i) = self.skip_prefixes.iter().position(|p| p.trim().is_empty()) {
            anyhow::bail!("Skip prefix #{} cannot be empty", i + 1);
        }
        if self.extra_args.len() > MAX_EXTRA_ARGS {
            anyhow::bail!(
                "Too many generator arguments: {} (maximum: {})",
                self.extra_args.len(),
                MAX_EXTRA_ARGS
            );
        }
        Ok(())
    }

    /// Full argument list for `python <args>`, starting with `-m <module>`
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-m".to_string(),
            GENERATOR_MODULE.to_string(),
            "--requirements-path".to_string(),
            self.requirements_path.clone(),
            "--python-path".to_string(),
            self.python_path.clone(),
        ];
        for prefix in &self.skip_prefixes {
            args.push("--skip-prefix".to_string());
            args.push(prefix.clone());
        }
        if self.do_not_skip_not_required_packages {
            args.push("--do-not-skip-not-required-packages".to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}
