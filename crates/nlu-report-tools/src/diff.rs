//! Metric deltas of every result set against a baseline.

use indexmap::IndexMap;
use nlu_report_types::{DiffValue, MetricValue, MissingSide, metric};

use crate::combine::CombinedReport;
use crate::error::{ReportError, ReportResult};

/// Deltas keyed label → metric → compared result set.
///
/// The baseline never has an entry of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffReport {
    baseline: String,
    compared: Vec<String>,
    metrics: Vec<String>,
    cells: IndexMap<String, IndexMap<String, IndexMap<String, DiffValue>>>,
}

/// Diff `combined` against `baseline` (default: its first result set).
///
/// An empty `metrics` list diffs every metric found in the report.
/// `confused_with` is never diffed. Absent `support` counts as zero; any
/// other absent metric yields a sentinel naming the side that has it.
pub fn diff<S: AsRef<str>>(
    combined: &CombinedReport,
    baseline: Option<&str>,
    metrics: &[S],
) -> ReportResult<DiffReport> {
    let baseline = match baseline {
        Some(name) if combined.has_result_set(name) => name.to_string(),
        Some(name) => return Err(ReportError::UnknownBaseline(name.to_string())),
        None => combined
            .result_set_names()
            .first()
            .cloned()
            .ok_or_else(|| ReportError::InvalidArgument("no result sets to diff".into()))?,
    };

    let requested: Vec<String> = if metrics.is_empty() {
        combined
            .metric_names()
            .into_iter()
            .map(String::from)
            .collect()
    } else {
        metrics.iter().map(|m| m.as_ref().to_string()).collect()
    };
    let mut diffed: Vec<String> = Vec::new();
    for m in requested {
        if m != metric::CONFUSED_WITH && !diffed.contains(&m) {
            diffed.push(m);
        }
    }

    let compared: Vec<String> = combined
        .result_set_names()
        .iter()
        .filter(|name| **name != baseline)
        .cloned()
        .collect();

    let mut cells = IndexMap::new();
    for label in combined.labels() {
        let mut by_metric = IndexMap::new();
        for m in &diffed {
            let base = numeric(combined.metric(label, &baseline, m));
            let by_set: IndexMap<String, DiffValue> = compared
                .iter()
                .map(|name| {
                    let other = numeric(combined.metric(label, name, m));
                    (name.clone(), delta(m, other, base, name, &baseline))
                })
                .collect();
            by_metric.insert(m.clone(), by_set);
        }
        cells.insert(label.to_string(), by_metric);
    }

    tracing::debug!(
        baseline = %baseline,
        compared = compared.len(),
        metrics = ?diffed,
        "diff computed"
    );
    Ok(DiffReport {
        baseline,
        compared,
        metrics: diffed,
        cells,
    })
}

fn numeric(value: Option<&MetricValue>) -> Option<f64> {
    value.and_then(MetricValue::as_number)
}

fn delta(
    metric_name: &str,
    other: Option<f64>,
    base: Option<f64>,
    other_name: &str,
    baseline: &str,
) -> DiffValue {
    if metric_name == metric::SUPPORT {
        return DiffValue::Delta(other.unwrap_or(0.0) - base.unwrap_or(0.0));
    }
    match (other, base) {
        (Some(o), Some(b)) => DiffValue::Delta(o - b),
        (Some(_), None) => DiffValue::Missing(MissingSide::OnlyIn(other_name.to_string())),
        (None, Some(_)) => DiffValue::Missing(MissingSide::OnlyIn(baseline.to_string())),
        (None, None) => DiffValue::Missing(MissingSide::Neither),
    }
}

impl DiffReport {
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Non-baseline result sets, in combined order.
    pub fn compared(&self) -> &[String] {
        &self.compared
    }

    /// Diffed metrics, in request order.
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn covers_metric(&self, metric: &str) -> bool {
        self.metrics.iter().any(|m| m == metric)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.cells.keys().map(String::as_str).collect()
    }

    pub fn delta(&self, label: &str, metric: &str, result_set: &str) -> Option<&DiffValue> {
        self.cells.get(label)?.get(metric)?.get(result_set)
    }

    /// Labels with a non-zero delta or a sentinel in any compared result set.
    pub fn find_labels_with_changes(&self) -> Vec<&str> {
        self.cells
            .iter()
            .filter(|(_, by_metric)| {
                by_metric
                    .values()
                    .flat_map(|by_set| by_set.values())
                    .any(DiffValue::is_change)
            })
            .map(|(label, _)| label.as_str())
            .collect()
    }
}
