/// Mock implementations for testing
mod mock_command_runner;
mod mock_environment_provisioner;
mod mock_progress_reporter;

pub use mock_command_runner::MockCommandRunner;
pub use mock_environment_provisioner::{MockEnvironment, MockEnvironmentProvisioner};
pub use mock_progress_reporter::MockProgressReporter;
