//! third-party-license-hook - Reproducible third-party license reports
//!
//! This library runs the `third-party-license-file-generator` Python package
//! inside a disposable virtual environment and removes the timestamped first
//! and last line of the report it writes, so the committed
//! `THIRDPARTYLICENSES` file only changes when dependencies do.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_report`): Report documents, trimming and generator arguments
//! - **Application Layer** (`application`): The report generation use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use third_party_license_hook::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let runner = SystemCommandRunner::new();
//! let use_case = GenerateLicenseReportUseCase::new(
//!     TempVenvProvisioner::new(runner, "python3"),
//!     runner,
//!     FileSystemReportStore::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ReportRequest::builder()
//!     .project_path(PathBuf::from("."))
//!     .python_path("python3")
//!     .build()?;
//! let response = use_case.execute(request)?;
//! println!("{} entries", response.trimmed_line_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod license_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemReportStore;
    pub use crate::adapters::outbound::process::SystemCommandRunner;
    pub use crate::adapters::outbound::venv::{TempVenv, TempVenvProvisioner};
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::use_cases::GenerateLicenseReportUseCase;
    pub use crate::license_report::domain::{GeneratorOptions, LineEnding, ReportDocument};
    pub use crate::license_report::services::{FramingTrimmer, OutputFileResolver};
    pub use crate::ports::outbound::{
        CommandOutput, CommandRunner, CommandSpec, EnvironmentProvisioner, ProgressReporter,
        ReportFingerprint, ReportStore, ToolEnvironment,
    };
    pub use crate::shared::error::HookError;
    pub use crate::shared::Result;
}
