use crate::shared::Result;
use std::path::Path;

/// An isolated, disposable Python environment hosting the generator
///
/// Implementations release their resources when dropped, so an environment
/// is torn down on every exit path of the code that owns it.
pub trait ToolEnvironment {
    /// Root directory of the environment
    fn root(&self) -> &Path;

    /// Python interpreter inside the environment
    fn interpreter(&self) -> &Path;
}

/// EnvironmentProvisioner port for creating tool environments
///
/// This port abstracts virtual environment creation and package
/// installation so the use case can be exercised without Python or network.
pub trait EnvironmentProvisioner {
    type Environment: ToolEnvironment;

    /// Creates a fresh, empty environment
    ///
    /// # Errors
    /// Returns `HookError::ToolInstall` if the environment cannot be created
    fn create(&self) -> Result<Self::Environment>;

    /// Installs a package requirement into the environment
    ///
    /// # Arguments
    /// * `environment` - Environment returned by [`EnvironmentProvisioner::create`]
    /// * `requirement` - pip requirement specifier (e.g. `third-party-license-file-generator==2024.8.23`)
    ///
    /// # Errors
    /// Returns `HookError::ToolInstall` if installation fails
    fn install(&self, environment: &Self::Environment, requirement: &str) -> Result<()>;
}
