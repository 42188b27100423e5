//! Where report files are read from: disk or memory.

use std::path::Path;

use crate::error::{ReportError, ReportResult};

/// Abstraction over where evaluation reports are read from.
///
/// The loader only ever needs whole-file reads, so tests can swap in
/// [`crate::mock::MockReportSource`] instead of touching the filesystem.
pub trait ReportSource {
    /// Read the whole file. A missing file is `ReportError::NotFound`.
    fn read_to_string(&self, path: &Path) -> ReportResult<String>;

    /// Check if a report file exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a results directory rather than a report file.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Reads reports from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReportSource;

impl ReportSource for FileReportSource {
    fn read_to_string(&self, path: &Path) -> ReportResult<String> {
        std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReportError::NotFound(path.display().to_string())
            } else {
                ReportError::Io(format!("{}: {e}", path.display()))
            }
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
