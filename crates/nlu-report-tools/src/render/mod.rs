//! Table rendering for combined and diffed reports.
//!
//! Reports are first projected into a format-neutral [`Table`] (sorted rows,
//! formatted cells), which the Markdown and HTML writers then serialise.

pub mod html;
pub mod markdown;

use nlu_report_types::{
    AGGREGATE_LABELS, DiffValue, LabelType, MetricValue, is_aggregate_label, is_integral, metric,
};
use serde::{Deserialize, Serialize};

use crate::combine::CombinedReport;
use crate::diff::DiffReport;
use crate::result_set::{ResultSet, compare_descending};

/// Placeholder for a metric without a value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Output format of rendered tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    Markdown,
    Html,
}

impl TableFormat {
    /// Guess the format from an output filename; anything but `.md` is HTML.
    pub fn from_extension(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md" | "markdown") => Self::Markdown,
            _ => Self::Html,
        }
    }
}

impl std::str::FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown table format: {other}")),
        }
    }
}

/// A rendered-ready table: header row plus formatted cell rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn render(&self, format: TableFormat) -> String {
        match format {
            TableFormat::Markdown => markdown::render_table(self),
            TableFormat::Html => html::render_table(self),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What to put in a table and in which order.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions<'a> {
    /// Metric columns, in display order.
    pub metrics: Vec<String>,
    /// Metric to sort rows by (descending, against the baseline).
    pub sort_metric: Option<String>,
    /// Restrict rows to these labels.
    pub labels: Option<Vec<String>>,
    /// Interleave delta columns from this diff.
    pub diff: Option<&'a DiffReport>,
}

/// Build the table for a combined report.
pub fn build_table(combined: &CombinedReport, options: &RenderOptions<'_>) -> Table {
    let sets = combined.result_set_names();
    let single = sets.len() == 1;
    let baseline = options
        .diff
        .map(DiffReport::baseline)
        .or_else(|| sets.first().map(String::as_str));

    // (metric, result set, is delta column)
    let mut columns: Vec<(&str, &str, bool)> = Vec::new();
    let mut headers = vec![combined.label_type().row_header().to_string()];
    for m in &options.metrics {
        for set in sets {
            headers.push(if single {
                m.clone()
            } else {
                format!("{m} ({set})")
            });
            columns.push((m.as_str(), set.as_str(), false));
            if let Some(diff) = options.diff {
                if diff.covers_metric(m) && set.as_str() != diff.baseline() {
                    headers.push(format!("Change in {m} ({set} - {})", diff.baseline()));
                    columns.push((m.as_str(), set.as_str(), true));
                }
            }
        }
    }

    let candidates: Vec<&str> = combined
        .labels()
        .into_iter()
        .filter(|label| match &options.labels {
            Some(keep) => keep.iter().any(|k| k == label),
            None => true,
        })
        .collect();
    let ordered = order_labels(candidates, options.sort_metric.as_deref(), |label, m| {
        baseline.and_then(|b| combined.metric(label, b, m))
    });

    let rows = ordered
        .into_iter()
        .map(|label| {
            let mut row = vec![label.to_string()];
            for &(m, set, is_delta) in &columns {
                let cell = if is_delta {
                    options
                        .diff
                        .and_then(|d| d.delta(label, m, set))
                        .map(|d| format_delta(m, d))
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
                } else {
                    format_cell(m, combined.metric(label, set, m))
                };
                row.push(cell);
            }
            row
        })
        .collect();

    Table { headers, rows }
}

/// Render a combined report straight to `format`.
pub fn render(combined: &CombinedReport, options: &RenderOptions<'_>, format: TableFormat) -> String {
    build_table(combined, options).render(format)
}

/// Render a single result set straight to `format`.
pub fn render_result_set(
    set: &ResultSet,
    metrics: &[String],
    sort_metric: Option<&str>,
    format: TableFormat,
) -> String {
    build_result_set_table(set, metrics, sort_metric).render(format)
}

/// Build the table for a single result set (no result set suffixes).
pub fn build_result_set_table(
    set: &ResultSet,
    metrics: &[String],
    sort_metric: Option<&str>,
) -> Table {
    let mut headers = vec![set.label_type().row_header().to_string()];
    headers.extend(metrics.iter().cloned());

    let ordered = order_labels(set.labels(), sort_metric, |label, m| set.metric(label, m));
    let rows = ordered
        .into_iter()
        .map(|label| {
            let mut row = vec![label.to_string()];
            row.extend(metrics.iter().map(|m| format_cell(m, set.metric(label, m))));
            row
        })
        .collect();

    Table { headers, rows }
}

/// Aggregate rows first in their fixed order, then the rest stable-sorted
/// descending by `sort_metric` (input order when there is none).
pub fn order_labels<'l, 'v, F>(
    labels: Vec<&'l str>,
    sort_metric: Option<&str>,
    value: F,
) -> Vec<&'l str>
where
    F: Fn(&str, &str) -> Option<&'v MetricValue>,
{
    let mut ordered: Vec<&str> = AGGREGATE_LABELS
        .iter()
        .filter_map(|agg| labels.iter().copied().find(|l| l == agg))
        .collect();

    let mut rest: Vec<&str> = labels
        .into_iter()
        .filter(|l| !is_aggregate_label(l))
        .collect();
    if let Some(m) = sort_metric {
        rest.sort_by(|a, b| {
            compare_descending(
                value(*a, m).and_then(MetricValue::as_number),
                value(*b, m).and_then(MetricValue::as_number),
            )
        });
    }
    ordered.extend(rest);
    ordered
}

fn is_ratio_metric(name: &str) -> bool {
    matches!(name, metric::PRECISION | metric::RECALL | metric::F1_SCORE)
}

fn format_number(metric_name: &str, n: f64) -> String {
    if metric_name == metric::SUPPORT || (!is_ratio_metric(metric_name) && is_integral(n)) {
        format!("{n:.0}")
    } else {
        format!("{n:.3}")
    }
}

/// Format a metric value for display.
pub fn format_cell(metric_name: &str, value: Option<&MetricValue>) -> String {
    match value {
        None => NOT_AVAILABLE.to_string(),
        Some(MetricValue::Number(n)) => format_number(metric_name, *n),
        Some(MetricValue::Confusion(map)) if map.is_empty() => NOT_AVAILABLE.to_string(),
        Some(MetricValue::Confusion(map)) => map
            .iter()
            .map(|(label, count)| format!("{label}({})", format_number(metric::SUPPORT, *count)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Format a delta; positive values carry a leading `+`. The sign follows
/// the rounded text, so deltas below display precision print unsigned.
pub fn format_delta(metric_name: &str, value: &DiffValue) -> String {
    match value {
        DiffValue::Delta(d) => {
            let body = format_number(metric_name, *d);
            let magnitude = body.trim_start_matches('-');
            if magnitude.chars().all(|c| c == '0' || c == '.') {
                magnitude.to_string()
            } else if body.starts_with('-') {
                body
            } else {
                format!("+{body}")
            }
        }
        DiffValue::Missing(side) => side.to_string(),
    }
}

/// One titled table in an output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub table: Table,
}

impl Section {
    pub fn new(label_type: LabelType, table: Table) -> Self {
        Self {
            title: label_type.section_title().to_string(),
            table,
        }
    }
}

/// A full output file: title, optional intro and one section per label type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: Option<String>,
    pub intro: Option<String>,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn render(&self, format: TableFormat) -> String {
        match format {
            TableFormat::Markdown => markdown::render_document(self),
            TableFormat::Html => html::render_document(self),
        }
    }
}
