use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the hook process.
///
/// pre-commit only distinguishes zero from non-zero, but distinct codes
/// make failures easier to tell apart in CI logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The report was generated and trimmed
    Success = 0,
    /// Application error (install failure, missing report, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for license report generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("Failed to install the license generator: {step}\nDetails: {details}\n\n💡 Hint: Check that Python with the venv module is available and that the package index is reachable")]
    ToolInstall { step: String, details: String },

    #[error("License generator failed: {details}\n\n💡 Hint: {hint}")]
    ToolExecution {
        details: String,
        exit_code: Option<i32>,
        hint: String,
    },

    #[error("Failed to access report file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read and write permissions")]
    FileIo { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl HookError {
    /// Exit status the process should terminate with for this error.
    ///
    /// A generator that exited with a non-zero code hands that code through
    /// unchanged; everything else maps to [`ExitCode::ApplicationError`].
    pub fn exit_code(&self) -> i32 {
        match self {
            HookError::ToolExecution {
                exit_code: Some(code),
                ..
            } if *code != 0 => *code,
            _ => ExitCode::ApplicationError.as_i32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_tool_install_display() {
        let error = HookError::ToolInstall {
            step: "pip install third-party-license-file-generator".to_string(),
            details: "Could not find a version that satisfies the requirement".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to install the license generator"));
        assert!(display.contains("pip install"));
        assert!(display.contains("Could not find a version"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_tool_execution_display() {
        let error = HookError::ToolExecution {
            details: "exited with status 3".to_string(),
            exit_code: Some(3),
            hint: "Run the generator manually to see its output".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("License generator failed"));
        assert!(display.contains("exited with status 3"));
        assert!(display.contains("Run the generator manually"));
    }

    #[test]
    fn test_file_io_display() {
        let error = HookError::FileIo {
            path: PathBuf::from("/project/THIRDPARTYLICENSES"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to access report file"));
        assert!(display.contains("/project/THIRDPARTYLICENSES"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = HookError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("Directory does not exist"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_exit_code_propagates_generator_status() {
        let error = HookError::ToolExecution {
            details: "exited with status 7".to_string(),
            exit_code: Some(7),
            hint: String::new(),
        };
        assert_eq!(error.exit_code(), 7);
    }

    #[test]
    fn test_exit_code_without_generator_status() {
        let missing_report = HookError::ToolExecution {
            details: "no report file".to_string(),
            exit_code: None,
            hint: String::new(),
        };
        assert_eq!(missing_report.exit_code(), 1);

        let zero_status = HookError::ToolExecution {
            details: "report missing".to_string(),
            exit_code: Some(0),
            hint: String::new(),
        };
        assert_eq!(zero_status.exit_code(), 1);

        let install = HookError::ToolInstall {
            step: "venv".to_string(),
            details: "boom".to_string(),
        };
        assert_eq!(install.exit_code(), 1);
    }
}
