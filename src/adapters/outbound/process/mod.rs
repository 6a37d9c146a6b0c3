/// Process adapters for launching subprocesses
mod system_command_runner;

pub use system_command_runner::SystemCommandRunner;
