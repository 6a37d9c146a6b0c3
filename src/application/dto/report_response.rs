use std::path::PathBuf;

/// ReportResponse - Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResponse {
    /// Report file that was generated and trimmed
    pub report_path: PathBuf,
    /// Lines written by the generator
    pub original_line_count: usize,
    /// Lines left after removing the header and footer
    pub trimmed_line_count: usize,
}

impl ReportResponse {
    pub fn new(report_path: PathBuf, original_line_count: usize, trimmed_line_count: usize) -> Self {
        Self {
            report_path,
            original_line_count,
            trimmed_line_count,
        }
    }
}
