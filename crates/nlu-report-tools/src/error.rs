//! Report tool error types.

use nlu_report_types::LabelType;
use thiserror::Error;

/// Errors that can occur while loading, combining or diffing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("report not found: {0}")]
    NotFound(String),

    #[error("malformed report {path}: {message}")]
    Parse { path: String, message: String },

    #[error("result set {name} holds {found} but the combination is for {expected}")]
    LabelTypeMismatch {
        name: String,
        expected: LabelType,
        found: LabelType,
    },

    #[error("result set {0} appears more than once")]
    DuplicateResultSet(String),

    #[error("unknown baseline result set: {0}")]
    UnknownBaseline(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias for report tool results.
pub type ReportResult<T> = Result<T, ReportError>;
