use crate::license_report::domain::{GeneratorOptions, GENERATOR_REQUIREMENT};
use crate::shared::error::HookError;
use crate::shared::Result;
use std::path::PathBuf;

const DEFAULT_PYTHON: &str = "python";

/// ReportRequest - Internal request DTO for the license report use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Directory of the project whose report is generated
    pub project_path: PathBuf,
    /// pip requirement installed into the disposable environment
    pub requirement: String,
    /// Arguments handed to the generator
    pub generator_options: GeneratorOptions,
}

impl ReportRequest {
    pub fn new(
        project_path: PathBuf,
        requirement: String,
        generator_options: GeneratorOptions,
    ) -> Self {
        Self {
            project_path,
            requirement,
            generator_options,
        }
    }

    pub fn builder() -> ReportRequestBuilder {
        ReportRequestBuilder::default()
    }
}

/// Builder for [`ReportRequest`] that fills in the hook's defaults
#[derive(Debug, Default)]
pub struct ReportRequestBuilder {
    project_path: Option<PathBuf>,
    requirement: Option<String>,
    python_path: Option<String>,
    requirements_path: Option<String>,
    skip_prefixes: Option<Vec<String>>,
    do_not_skip_not_required_packages: Option<bool>,
    extra_args: Vec<String>,
}

impl ReportRequestBuilder {
    pub fn project_path(mut self, path: PathBuf) -> Self {
        self.project_path = Some(path);
        self
    }

    pub fn requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirement = Some(requirement.into());
        self
    }

    /// Interpreter whose installed packages the generator inspects
    pub fn python_path(mut self, python_path: impl Into<String>) -> Self {
        self.python_path = Some(python_path.into());
        self
    }

    pub fn requirements_path(mut self, path: impl Into<String>) -> Self {
        self.requirements_path = Some(path.into());
        self
    }

    pub fn skip_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.skip_prefixes = Some(prefixes);
        self
    }

    pub fn do_not_skip_not_required_packages(mut self, enabled: bool) -> Self {
        self.do_not_skip_not_required_packages = Some(enabled);
        self
    }

    /// Appends arguments forwarded verbatim to the generator
    pub fn extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<ReportRequest> {
        let requirement = self
            .requirement
            .unwrap_or_else(|| GENERATOR_REQUIREMENT.to_string());
        if requirement.trim().is_empty() {
            return Err(HookError::Validation {
                message: "Package requirement cannot be empty".to_string(),
            }
            .into());
        }

        let mut options =
            GeneratorOptions::new(self.python_path.unwrap_or_else(|| DEFAULT_PYTHON.to_string()));
        if let Some(path) = self.requirements_path {
            options = options.with_requirements_path(path);
        }
        if let Some(prefixes) = self.skip_prefixes {
            options = options.with_skip_prefixes(prefixes);
        }
        if let Some(enabled) = self.do_not_skip_not_required_packages {
            options = options.with_do_not_skip_not_required_packages(enabled);
        }
        let options = options.with_extra_args(self.extra_args);

        options.validate().map_err(|e| HookError::Validation {
            message: e.to_string(),
        })?;

        Ok(ReportRequest::new(
            self.project_path.unwrap_or_else(|| PathBuf::from(".")),
            requirement,
            options,
        ))
    }
}
