/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (processes, file system, console).
pub mod command_runner;
pub mod environment_provisioner;
pub mod progress_reporter;
pub mod report_store;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};
pub use environment_provisioner::{EnvironmentProvisioner, ToolEnvironment};
pub use progress_reporter::ProgressReporter;
pub use report_store::{ReportFingerprint, ReportStore};
