use crate::shared::Result;
use std::path::Path;
use std::time::SystemTime;

/// Modification time and size of a report at one point in time
///
/// Two fingerprints taken around a generator run are equal when the run
/// did not touch the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFingerprint {
    pub modified: Option<SystemTime>,
    pub len: u64,
}

/// ReportStore port for reading and rewriting the generated report
pub trait ReportStore {
    /// Fingerprint of the report, `None` if nothing exists at the path
    fn fingerprint(&self, path: &Path) -> Option<ReportFingerprint>;

    /// Reads the report as UTF-8 text
    ///
    /// # Errors
    /// Returns `HookError::FileIo` if the file cannot be read
    fn read_report(&self, path: &Path) -> Result<String>;

    /// Overwrites the report with new content
    ///
    /// # Errors
    /// Returns `HookError::FileIo` if the file cannot be written
    fn write_report(&self, path: &Path, content: &str) -> Result<()>;
}
