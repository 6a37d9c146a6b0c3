use crate::ports::outbound::{ReportFingerprint, ReportStore};
use crate::shared::error::HookError;
use crate::shared::security::{check_report_readable, check_report_writable};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReportStore adapter for the report file on disk
///
/// Reads are refused for symlinks, non-regular files and oversized files.
/// Writes are refused when the existing report is a symlink or a directory.
pub struct FileSystemReportStore;

impl FileSystemReportStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReportStore {
    fn default() -> Self {
        Self::new()
    }
}

fn file_io_error(path: &Path, error: impl ToString) -> HookError {
    HookError::FileIo {
        path: path.to_path_buf(),
        details: error.to_string(),
    }
}

impl ReportStore for FileSystemReportStore {
    fn fingerprint(&self, path: &Path) -> Option<ReportFingerprint> {
        let metadata = fs::symlink_metadata(path).ok()?;
        Some(ReportFingerprint {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }

    fn read_report(&self, path: &Path) -> Result<String> {
        check_report_readable(path).map_err(|e| file_io_error(path, e))?;

        fs::read_to_string(path).map_err(|e| file_io_error(path, e).into())
    }

    fn write_report(&self, path: &Path, content: &str) -> Result<()> {
        check_report_writable(path).map_err(|e| file_io_error(path, e))?;

        fs::write(path, content).map_err(|e| file_io_error(path, e).into())
    }
}
