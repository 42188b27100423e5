//! Save and reload combined reports as a single JSON file.
//!
//! Layout:
//!
//! ```json
//! {
//!   "result_sets_combined": ["baseline", "candidate"],
//!   "combined_intent_report": {"greet": {"baseline": {"support": 10}}},
//!   "combined_entity_report": {},
//!   "combined_response_selection_report": {}
//! }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use nlu_report_types::{LabelType, MetricValue, metrics_from_nullable};
use serde::{Deserialize, Deserializer, Serialize};

use crate::combine::{CombinedReport, CombinedRow};
use crate::error::{ReportError, ReportResult};
use crate::result_set::ResultSet;
use crate::source::ReportSource;

type Rows = IndexMap<String, CombinedRow>;

/// On-disk form of one or more combined reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedReportFile {
    pub result_sets_combined: Vec<String>,
    #[serde(default, deserialize_with = "nullable_rows")]
    pub combined_intent_report: Rows,
    #[serde(default, deserialize_with = "nullable_rows")]
    pub combined_entity_report: Rows,
    #[serde(default, deserialize_with = "nullable_rows")]
    pub combined_response_selection_report: Rows,
}

fn nullable_rows<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rows, D::Error> {
    type Raw = IndexMap<String, IndexMap<String, IndexMap<String, Option<MetricValue>>>>;
    let raw = Raw::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(label, row)| {
            let row = row
                .into_iter()
                .map(|(set, metrics)| (set, metrics_from_nullable(metrics)))
                .collect();
            (label, row)
        })
        .collect())
}

impl CombinedReportFile {
    /// Collect combined reports, at most one per label type.
    pub fn from_reports(reports: &[&CombinedReport]) -> ReportResult<Self> {
        let mut file = Self::default();
        let mut seen = Vec::new();
        for report in reports {
            let label_type = report.label_type();
            if seen.contains(&label_type) {
                return Err(ReportError::InvalidArgument(format!(
                    "more than one combined report for {label_type}"
                )));
            }
            seen.push(label_type);
            for name in report.result_set_names() {
                if !file.result_sets_combined.contains(name) {
                    file.result_sets_combined.push(name.clone());
                }
            }
            *file.rows_mut(label_type) = report.rows().clone();
        }
        Ok(file)
    }

    pub fn rows(&self, label_type: LabelType) -> &Rows {
        match label_type {
            LabelType::Intents => &self.combined_intent_report,
            LabelType::Entities => &self.combined_entity_report,
            LabelType::RetrievalIntents => &self.combined_response_selection_report,
        }
    }

    fn rows_mut(&mut self, label_type: LabelType) -> &mut Rows {
        match label_type {
            LabelType::Intents => &mut self.combined_intent_report,
            LabelType::Entities => &mut self.combined_entity_report,
            LabelType::RetrievalIntents => &mut self.combined_response_selection_report,
        }
    }

    /// Rebuild the combined report of one label type.
    pub fn report(&self, label_type: LabelType) -> CombinedReport {
        CombinedReport::from_rows(
            label_type,
            self.result_sets_combined.clone(),
            self.rows(label_type).clone(),
        )
    }
}

/// Write combined reports as pretty-printed JSON.
pub fn write_combined_json_report(path: &Path, reports: &[&CombinedReport]) -> ReportResult<()> {
    let file = CombinedReportFile::from_reports(reports)?;
    let json = serde_json::to_string_pretty(&file)
        .map_err(|e| ReportError::Io(format!("{}: {e}", path.display())))?;
    std::fs::write(path, json).map_err(|e| ReportError::Io(format!("{}: {e}", path.display())))?;
    tracing::info!(
        path = %path.display(),
        result_sets = file.result_sets_combined.len(),
        "combined report written"
    );
    Ok(())
}

/// Load a combined report file. Unlike single reports, it must exist.
pub fn load_from_combined_json_report(
    source: &dyn ReportSource,
    path: &Path,
) -> ReportResult<CombinedReportFile> {
    let content = source.read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ReportError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// The result sets a persisted combined report was built from.
pub fn results_from_combined_reports(
    file: &CombinedReportFile,
    label_type: LabelType,
) -> Vec<ResultSet> {
    file.report(label_type).result_sets()
}
