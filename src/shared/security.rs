use crate::shared::Result;
use anyhow::bail;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Largest report the hook loads into memory (100 MB)
pub const MAX_REPORT_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that a report may be read
///
/// The report must be a regular file, not a symbolic link, and no larger
/// than [`MAX_REPORT_SIZE`]. `symlink_metadata()` inspects the link itself
/// rather than whatever it points to.
pub fn check_report_readable(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Cannot inspect report {}: {}", path.display(), e))?;

    if metadata.is_symlink() {
        bail!(
            "Security: report {} is a symbolic link. Symbolic links are never read or rewritten.",
            path.display()
        );
    }

    if !metadata.is_file() {
        bail!("{} is not a regular file", path.display());
    }

    check_report_size(path, metadata.len(), MAX_REPORT_SIZE)
}

/// Checks that a report may be overwritten
///
/// A missing report is writable. An existing one must be neither a
/// symbolic link nor a directory.
pub fn check_report_writable(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => bail!("Cannot inspect report {}: {}", path.display(), e),
    };

    if metadata.is_symlink() {
        bail!(
            "Security: report {} is a symbolic link. Symbolic links are never read or rewritten.",
            path.display()
        );
    }

    if metadata.is_dir() {
        bail!("{} is a directory, not a report file", path.display());
    }

    Ok(())
}

pub fn check_report_size(path: &Path, size: u64, limit: u64) -> Result<()> {
    if size > limit {
        bail!(
            "Security: report {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            size,
            limit
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_readable_regular_report() {
        let temp_dir = TempDir::new().unwrap();
        let report = temp_dir.path().join("THIRDPARTYLICENSES");
        fs::write(&report, "pkg: MIT\n").unwrap();

        assert!(check_report_readable(&report).is_ok());
    }

    #[test]
    fn test_readable_missing_report() {
        let result = check_report_readable(Path::new("/nonexistent/THIRDPARTYLICENSES"));
        assert!(result.unwrap_err().to_string().contains("Cannot inspect report"));
    }

    #[test]
    fn test_readable_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = check_report_readable(temp_dir.path());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_writable_missing_report() {
        let temp_dir = TempDir::new().unwrap();
        let report = temp_dir.path().join("THIRDPARTYLICENSES");

        assert!(check_report_writable(&report).is_ok());
    }

    #[test]
    fn test_writable_rejects_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = check_report_writable(temp_dir.path());
        assert!(result.unwrap_err().to_string().contains("is a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_report_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("elsewhere");
        let link = temp_dir.path().join("THIRDPARTYLICENSES");
        fs::write(&target, "pkg: MIT\n").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        for result in [check_report_readable(&link), check_report_writable(&link)] {
            assert!(result.unwrap_err().to_string().contains("symbolic link"));
        }
    }

    #[test]
    fn test_report_size_limit() {
        let path = PathBuf::from("/project/THIRDPARTYLICENSES");
        assert!(check_report_size(&path, 1000, MAX_REPORT_SIZE).is_ok());
        assert!(check_report_size(&path, MAX_REPORT_SIZE, MAX_REPORT_SIZE).is_ok());

        let result = check_report_size(&path, MAX_REPORT_SIZE + 1, MAX_REPORT_SIZE);
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
