/// Filesystem adapters for file I/O operations
mod report_file_store;

pub use report_file_store::FileSystemReportStore;
