//! Well-known metric and label names used in NLU evaluation reports.

/// Metric names emitted by the evaluation tooling.
pub mod metric {
    /// Number of test examples carrying the label.
    pub const SUPPORT: &str = "support";
    pub const PRECISION: &str = "precision";
    pub const RECALL: &str = "recall";
    pub const F1_SCORE: &str = "f1-score";
    /// Mapping of confused label → count. Never diffed.
    pub const CONFUSED_WITH: &str = "confused_with";
}

/// Top-level scalar in every report; not a label row.
pub const ACCURACY_LABEL: &str = "accuracy";

/// Aggregate rows, in the order they are pinned at the top of a table.
pub const AGGREGATE_LABELS: [&str; 3] = ["macro avg", "micro avg", "weighted avg"];

/// Whether `label` is one of the aggregate rows.
pub fn is_aggregate_label(label: &str) -> bool {
    AGGREGATE_LABELS.contains(&label)
}
