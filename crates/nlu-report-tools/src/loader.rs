//! Read evaluation reports from a [`ReportSource`].

use std::path::Path;

use nlu_report_types::Report;

use crate::error::{ReportError, ReportResult};
use crate::source::ReportSource;

/// Load a per-label report.
///
/// A missing file means no evaluation was run for that label type and
/// yields an empty report. Malformed JSON is fatal.
pub fn load_report(source: &dyn ReportSource, path: &Path) -> ReportResult<Report> {
    let content = match source.read_to_string(path) {
        Ok(content) => content,
        Err(ReportError::NotFound(_)) => {
            tracing::debug!(path = %path.display(), "report not found, using empty report");
            return Ok(Report::new());
        }
        Err(e) => return Err(e),
    };
    let report = parse_report(path, &content)?;
    tracing::debug!(
        path = %path.display(),
        labels = report.label_count(),
        "report loaded"
    );
    Ok(report)
}

/// Parse report JSON, attributing errors to `path`.
pub fn parse_report(path: &Path, content: &str) -> ReportResult<Report> {
    serde_json::from_str(content).map_err(|e| ReportError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
