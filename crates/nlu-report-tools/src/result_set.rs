//! A single evaluation run's report for one label type.

use std::cmp::Ordering;
use std::path::Path;

use nlu_report_types::{LabelType, MetricValue, Report};

use crate::error::ReportResult;
use crate::loader::load_report;
use crate::source::ReportSource;

/// One evaluation run's report, identified by a display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    name: String,
    label_type: LabelType,
    report: Report,
}

impl ResultSet {
    pub fn new(name: impl Into<String>, label_type: LabelType, report: Report) -> Self {
        Self {
            name: name.into(),
            label_type,
            report,
        }
    }

    /// Load the label type's conventional report file from a results directory.
    pub fn from_dir(
        source: &dyn ReportSource,
        dir: &Path,
        name: impl Into<String>,
        label_type: LabelType,
    ) -> ReportResult<Self> {
        Self::from_file(source, &dir.join(label_type.report_filename()), name, label_type)
    }

    /// Load an explicit report file.
    pub fn from_file(
        source: &dyn ReportSource,
        path: &Path,
        name: impl Into<String>,
        label_type: LabelType,
    ) -> ReportResult<Self> {
        let report = load_report(source, path)?;
        Ok(Self::new(name, label_type, report))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label_type(&self) -> LabelType {
        self.label_type
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Labels in report order, `accuracy` excluded.
    pub fn labels(&self) -> Vec<&str> {
        self.report.labels().collect()
    }

    /// Metric value; `None` when the label or metric is absent.
    pub fn metric(&self, label: &str, metric: &str) -> Option<&MetricValue> {
        self.report.metric(label, metric)
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.report.accuracy()
    }

    /// Re-sort labels descending by a numeric metric. Stable; labels
    /// without the metric keep their relative order after all others.
    pub fn sort_by_metric(&mut self, metric: &str) {
        self.report.sort_labels_by(|_, a, _, b| {
            let a = a.get(metric).and_then(MetricValue::as_number);
            let b = b.get(metric).and_then(MetricValue::as_number);
            compare_descending(a, b)
        });
    }
}

/// Descending order over optional numbers, absent values last.
pub(crate) fn compare_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockReportSource;
    use nlu_report_types::metric;

    #[test]
    fn labels_exclude_accuracy() {
        let source = MockReportSource::with_crossval_sample();
        let set =
            ResultSet::from_dir(&source, Path::new("results"), "cv", LabelType::Intents).unwrap();
        assert_eq!(
            set.labels(),
            vec!["greet", "bye", "affirm", "macro avg", "weighted avg"]
        );
        assert_eq!(set.accuracy(), Some(0.91));
        assert_eq!(set.label_type(), LabelType::Intents);
        assert_eq!(set.name(), "cv");
    }

    #[test]
    fn from_dir_uses_filename_convention() {
        let source = MockReportSource::with_crossval_sample();
        let set = ResultSet::from_dir(
            &source,
            Path::new("results"),
            "cv",
            LabelType::RetrievalIntents,
        )
        .unwrap();
        assert_eq!(set.labels(), vec!["faq/opening_hours", "faq/pricing"]);
    }

    #[test]
    fn missing_metric_is_distinct_from_zero() {
        let mut source = MockReportSource::new();
        source.add_file(
            "r/intent_report.json",
            r#"{"rare": {"support": 0}, "common": {"support": 9, "f1-score": 0.5}}"#,
        );
        let set = ResultSet::from_dir(&source, Path::new("r"), "r", LabelType::Intents).unwrap();
        assert_eq!(
            set.metric("rare", metric::SUPPORT),
            Some(&MetricValue::Number(0.0))
        );
        assert!(set.metric("rare", metric::F1_SCORE).is_none());
    }

    #[test]
    fn sort_by_support_descending() {
        let source = MockReportSource::with_crossval_sample();
        let mut set =
            ResultSet::from_dir(&source, Path::new("results"), "cv", LabelType::Intents).unwrap();
        set.sort_by_metric(metric::SUPPORT);
        assert_eq!(
            set.labels(),
            vec!["macro avg", "weighted avg", "bye", "greet", "affirm"]
        );
    }

    #[test]
    fn sort_is_stable_and_puts_missing_last() {
        let mut source = MockReportSource::new();
        source.add_file(
            "r/intent_report.json",
            r#"{"a": {"f1-score": 0.5}, "b": {"support": 3}, "c": {"support": 3}, "d": {"support": 7}}"#,
        );
        let mut set =
            ResultSet::from_dir(&source, Path::new("r"), "r", LabelType::Intents).unwrap();
        set.sort_by_metric(metric::SUPPORT);
        assert_eq!(set.labels(), vec!["d", "b", "c", "a"]);
    }
}
