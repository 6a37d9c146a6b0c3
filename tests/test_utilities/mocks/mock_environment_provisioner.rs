use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use third_party_license_hook::prelude::*;

/// Mock environment that flags its release on drop
pub struct MockEnvironment {
    root: PathBuf,
    interpreter: PathBuf,
    released: Arc<AtomicBool>,
}

impl ToolEnvironment for MockEnvironment {
    fn root(&self) -> &Path {
        &self.root
    }

    fn interpreter(&self) -> &Path {
        &self.interpreter
    }
}

impl Drop for MockEnvironment {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Mock EnvironmentProvisioner for testing
///
/// Clones share state, so a test can keep one clone for assertions after
/// handing another to the use case.
#[derive(Clone, Default)]
pub struct MockEnvironmentProvisioner {
    fail_create: bool,
    fail_install: bool,
    created: Arc<AtomicUsize>,
    released: Arc<AtomicBool>,
    installed: Arc<Mutex<Vec<String>>>,
}

impl MockEnvironmentProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn failing_install() -> Self {
        Self {
            fail_install: true,
            ..Self::default()
        }
    }

    pub fn interpreter() -> PathBuf {
        PathBuf::from("/mock-venv/.venv/bin/python")
    }

    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn was_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    pub fn installed_requirements(&self) -> Vec<String> {
        self.installed.lock().unwrap().clone()
    }
}

impl EnvironmentProvisioner for MockEnvironmentProvisioner {
    type Environment = MockEnvironment;

    fn create(&self) -> Result<MockEnvironment> {
        if self.fail_create {
            return Err(HookError::ToolInstall {
                step: "python -m venv".to_string(),
                details: "Mock venv creation failure".to_string(),
            }
            .into());
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(MockEnvironment {
            root: PathBuf::from("/mock-venv/.venv"),
            interpreter: Self::interpreter(),
            released: Arc::clone(&self.released),
        })
    }

    fn install(&self, _environment: &MockEnvironment, requirement: &str) -> Result<()> {
        if self.fail_install {
            return Err(HookError::ToolInstall {
                step: format!("pip install {}", requirement),
                details: "Mock network error: could not reach the package index".to_string(),
            }
            .into());
        }
        self.installed.lock().unwrap().push(requirement.to_string());
        Ok(())
    }
}
