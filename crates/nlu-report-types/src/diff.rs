//! Metric deltas between a result set and the baseline.

use serde::{Serialize, Serializer};

/// Which side of a comparison holds a value when a delta cannot be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingSide {
    /// Neither the baseline nor the compared result set has the value.
    Neither,
    /// Only the named result set has the value.
    OnlyIn(String),
}

/// Difference of one metric for one label: `compared - baseline`.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffValue {
    Delta(f64),
    Missing(MissingSide),
}

impl DiffValue {
    pub fn as_delta(&self) -> Option<f64> {
        match self {
            Self::Delta(d) => Some(*d),
            Self::Missing(_) => None,
        }
    }

    /// Non-zero deltas and every sentinel count as a change.
    pub fn is_change(&self) -> bool {
        match self {
            Self::Delta(d) => *d != 0.0,
            Self::Missing(_) => true,
        }
    }
}

impl std::fmt::Display for MissingSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Neither => f.write_str("Label not present in either report"),
            Self::OnlyIn(name) => write!(f, "Label only present in {name}"),
        }
    }
}

impl std::fmt::Display for DiffValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delta(d) => write!(f, "{d}"),
            Self::Missing(side) => side.fmt(f),
        }
    }
}

impl Serialize for DiffValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Delta(d) => serializer.serialize_f64(*d),
            Self::Missing(side) => serializer.collect_str(side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_text() {
        assert_eq!(
            DiffValue::Missing(MissingSide::Neither).to_string(),
            "Label not present in either report"
        );
        assert_eq!(
            DiffValue::Missing(MissingSide::OnlyIn("run-b".into())).to_string(),
            "Label only present in run-b"
        );
    }

    #[test]
    fn change_detection() {
        assert!(!DiffValue::Delta(0.0).is_change());
        assert!(DiffValue::Delta(-0.01).is_change());
        assert!(DiffValue::Missing(MissingSide::Neither).is_change());
    }

    #[test]
    fn serializes_as_number_or_string() {
        let json = serde_json::to_value([
            DiffValue::Delta(2.0),
            DiffValue::Missing(MissingSide::OnlyIn("b".into())),
        ])
        .unwrap();
        assert_eq!(json[0], 2.0);
        assert_eq!(json[1], "Label only present in b");
    }
}
