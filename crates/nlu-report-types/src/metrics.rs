//! Per-label metric values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Metrics of a single label, in report order.
pub type LabelMetrics = IndexMap<String, MetricValue>;

/// Value of one metric for one label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// `support`, `precision`, `recall`, `f1-score` and any other scalar.
    Number(f64),
    /// `confused_with`: confused label → number of confusions.
    Confusion(IndexMap<String, f64>),
}

impl MetricValue {
    /// Numeric value, or `None` for a confusion mapping.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Confusion(_) => None,
        }
    }

    pub fn as_confusion(&self) -> Option<&IndexMap<String, f64>> {
        match self {
            Self::Confusion(map) => Some(map),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serialize_number(*n, serializer),
            Self::Confusion(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (label, count) in map {
                    out.serialize_entry(label, &Integral(*count))?;
                }
                out.end()
            }
        }
    }
}

/// Whole-valued numbers within the exactly representable range.
pub fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0
}

// Counts are written back as integers so persisted reports keep the
// evaluation tooling's shape.
fn serialize_number<S: Serializer>(n: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if is_integral(n) {
        serializer.serialize_i64(n as i64)
    } else {
        serializer.serialize_f64(n)
    }
}

struct Integral(f64);

impl Serialize for Integral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(self.0, serializer)
    }
}

/// Drop `null` metrics, which mean "no value" rather than a value.
pub fn metrics_from_nullable(raw: IndexMap<String, Option<MetricValue>>) -> LabelMetrics {
    raw.into_iter()
        .filter_map(|(metric, value)| value.map(|v| (metric, v)))
        .collect()
}
