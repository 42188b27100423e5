//! Report tools for NLU evaluation results.
//!
//! Loads per-label classification reports (intents, entities, retrieval
//! intents) from evaluation result directories, combines several runs into
//! one label → result set → metric structure, diffs them against a baseline
//! run, and renders Markdown or HTML tables. Combined reports can be
//! persisted and reloaded without re-reading every source report.

pub mod combine;
pub mod diff;
pub mod error;
pub mod loader;
pub mod mock;
pub mod persist;
pub mod render;
pub mod result_set;
pub mod source;

// Re-export key types for convenience
pub use combine::{CombinedReport, combine};
pub use diff::{DiffReport, diff};
pub use error::{ReportError, ReportResult};
pub use loader::load_report;
pub use mock::MockReportSource;
pub use persist::{
    CombinedReportFile, load_from_combined_json_report, results_from_combined_reports,
    write_combined_json_report,
};
pub use render::{Document, RenderOptions, Section, Table, TableFormat};
pub use result_set::ResultSet;
pub use source::{FileReportSource, ReportSource};
