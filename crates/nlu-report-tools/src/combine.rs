//! Join several result sets of one label type into a single report.

use std::collections::HashSet;
use std::sync::LazyLock;

use indexmap::IndexMap;
use nlu_report_types::{LabelMetrics, LabelType, MetricValue, Report};

use crate::error::{ReportError, ReportResult};
use crate::result_set::ResultSet;

/// Row of a combined report: result set name → that set's metrics.
pub type CombinedRow = IndexMap<String, LabelMetrics>;

static EMPTY_METRICS: LazyLock<LabelMetrics> = LazyLock::new(LabelMetrics::new);

/// Union of several result sets: label → result set → metric → value.
///
/// A row only holds entries for the result sets that actually report the
/// label; lookups for the others resolve to an empty metric mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedReport {
    label_type: LabelType,
    result_sets: Vec<String>,
    accuracy: IndexMap<String, f64>,
    rows: IndexMap<String, CombinedRow>,
}

/// Combine result sets sharing `label_type`.
///
/// Labels appear in order of first appearance across the inputs.
pub fn combine(result_sets: &[ResultSet], label_type: LabelType) -> ReportResult<CombinedReport> {
    let mut combined = CombinedReport::empty(label_type);
    for set in result_sets {
        combined.push(set)?;
    }
    tracing::debug!(
        label_type = %label_type,
        result_sets = combined.result_sets.len(),
        labels = combined.rows.len(),
        "result sets combined"
    );
    Ok(combined)
}

impl CombinedReport {
    pub fn empty(label_type: LabelType) -> Self {
        Self {
            label_type,
            result_sets: Vec::new(),
            accuracy: IndexMap::new(),
            rows: IndexMap::new(),
        }
    }

    /// Rebuild from persisted rows. Result set order comes from `result_sets`;
    /// names only found in rows are appended.
    pub fn from_rows(
        label_type: LabelType,
        result_sets: Vec<String>,
        rows: IndexMap<String, CombinedRow>,
    ) -> Self {
        let mut names = result_sets;
        for row in rows.values() {
            for name in row.keys() {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        Self {
            label_type,
            result_sets: names,
            accuracy: IndexMap::new(),
            rows,
        }
    }

    /// Add one result set as the last column.
    pub fn push(&mut self, set: &ResultSet) -> ReportResult<()> {
        if set.label_type() != self.label_type {
            return Err(ReportError::LabelTypeMismatch {
                name: set.name().to_string(),
                expected: self.label_type,
                found: set.label_type(),
            });
        }
        if self.result_sets.iter().any(|n| n == set.name()) {
            return Err(ReportError::DuplicateResultSet(set.name().to_string()));
        }

        let name = set.name().to_string();
        for (label, metrics) in set.report().iter() {
            self.rows
                .entry(label.to_string())
                .or_default()
                .insert(name.clone(), metrics.clone());
        }
        if let Some(accuracy) = set.accuracy() {
            self.accuracy.insert(name.clone(), accuracy);
        }
        self.result_sets.push(name);
        Ok(())
    }

    /// Append every result set of `other`, keeping its column order.
    pub fn extend(&mut self, other: &CombinedReport) -> ReportResult<()> {
        if other.label_type != self.label_type {
            let name = other.result_sets.first().cloned().unwrap_or_default();
            return Err(ReportError::LabelTypeMismatch {
                name,
                expected: self.label_type,
                found: other.label_type,
            });
        }
        for set in other.result_sets() {
            self.push(&set)?;
        }
        Ok(())
    }

    pub fn label_type(&self) -> LabelType {
        self.label_type
    }

    pub fn result_set_names(&self) -> &[String] {
        &self.result_sets
    }

    pub fn has_result_set(&self, name: &str) -> bool {
        self.result_sets.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.keys().map(String::as_str).collect()
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.rows.contains_key(label)
    }

    pub fn rows(&self) -> &IndexMap<String, CombinedRow> {
        &self.rows
    }

    /// Metrics of `label` in `result_set`; empty when either is unknown.
    pub fn metrics(&self, label: &str, result_set: &str) -> &LabelMetrics {
        self.rows
            .get(label)
            .and_then(|row| row.get(result_set))
            .unwrap_or(&EMPTY_METRICS)
    }

    pub fn metric(&self, label: &str, result_set: &str, metric: &str) -> Option<&MetricValue> {
        self.metrics(label, result_set).get(metric)
    }

    /// Accuracy of a result set, when its report had one.
    pub fn accuracy(&self, result_set: &str) -> Option<f64> {
        self.accuracy.get(result_set).copied()
    }

    /// Every metric name in the report, in first-seen order.
    pub fn metric_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for row in self.rows.values() {
            for metrics in row.values() {
                for metric in metrics.keys() {
                    if seen.insert(metric.as_str()) {
                        names.push(metric.as_str());
                    }
                }
            }
        }
        names
    }

    /// Project onto `labels`, in the given order. Unknown labels are dropped.
    pub fn select_labels<S: AsRef<str>>(&self, labels: &[S]) -> CombinedReport {
        let rows = labels
            .iter()
            .filter_map(|label| {
                let label = label.as_ref();
                self.rows
                    .get(label)
                    .map(|row| (label.to_string(), row.clone()))
            })
            .collect();
        CombinedReport {
            label_type: self.label_type,
            result_sets: self.result_sets.clone(),
            accuracy: self.accuracy.clone(),
            rows,
        }
    }

    /// Split back into one result set per column.
    pub fn result_sets(&self) -> Vec<ResultSet> {
        self.result_sets
            .iter()
            .map(|name| {
                let mut report = Report::new();
                for (label, row) in &self.rows {
                    if let Some(metrics) = row.get(name) {
                        report.insert_label(label.clone(), metrics.clone());
                    }
                }
                report.set_accuracy(self.accuracy(name));
                ResultSet::new(name.clone(), self.label_type, report)
            })
            .collect()
    }
}
