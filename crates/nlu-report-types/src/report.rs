//! Classification report as written by an NLU evaluation run.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::metrics::{LabelMetrics, MetricValue, metrics_from_nullable};
use crate::names::ACCURACY_LABEL;

/// Per-label report: label → metric → value, plus the scalar accuracy.
///
/// On disk the accuracy sits next to the label rows as
/// `"accuracy": 0.75`; it is split off on load so it can never be
/// enumerated as a label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    labels: IndexMap<String, LabelMetrics>,
    accuracy: Option<f64>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label names in report order. Never contains `accuracy`.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    pub fn metrics(&self, label: &str) -> Option<&LabelMetrics> {
        self.labels.get(label)
    }

    pub fn metric(&self, label: &str, metric: &str) -> Option<&MetricValue> {
        self.labels.get(label)?.get(metric)
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    pub fn set_accuracy(&mut self, accuracy: Option<f64>) {
        self.accuracy = accuracy;
    }

    /// Insert or replace a label row. `accuracy` is rejected silently.
    pub fn insert_label(&mut self, label: impl Into<String>, metrics: LabelMetrics) {
        let label = label.into();
        if label != ACCURACY_LABEL {
            self.labels.insert(label, metrics);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabelMetrics)> {
        self.labels.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Reorder label rows with a stable sort.
    pub fn sort_labels_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&str, &LabelMetrics, &str, &LabelMetrics) -> std::cmp::Ordering,
    {
        self.labels.sort_by(|ka, va, kb, vb| compare(ka, va, kb, vb));
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Label(IndexMap<String, Option<MetricValue>>),
    Scalar(serde_json::Value),
}

impl<'de> Deserialize<'de> for Report {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, RawEntry>::deserialize(deserializer)?;
        let mut report = Report::new();
        for (key, entry) in raw {
            match entry {
                RawEntry::Scalar(value) if key == ACCURACY_LABEL => {
                    report.accuracy = value.as_f64();
                }
                RawEntry::Label(metrics) if key != ACCURACY_LABEL => {
                    report.labels.insert(key, metrics_from_nullable(metrics));
                }
                RawEntry::Scalar(value) if value.is_object() => {
                    return Err(serde::de::Error::custom(format!(
                        "label {key:?} has metric values that are neither numbers nor confusion maps"
                    )));
                }
                // Other top-level scalars carry no per-label data.
                _ => {}
            }
        }
        Ok(report)
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.labels.len() + usize::from(self.accuracy.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (label, metrics) in &self.labels {
            map.serialize_entry(label, metrics)?;
        }
        if let Some(accuracy) = self.accuracy {
            map.serialize_entry(ACCURACY_LABEL, &accuracy)?;
        }
        map.end()
    }
}
