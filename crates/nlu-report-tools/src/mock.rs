//! In-memory report source for tests, serving pre-loaded report files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, ReportResult};
use crate::source::ReportSource;

/// A mock report source that serves pre-loaded content by path.
pub struct MockReportSource {
    files: HashMap<PathBuf, String>,
}

impl MockReportSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Add a file with the given content.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Two intent runs: `results/baseline` and `results/candidate`.
    ///
    /// The candidate adds `bye`, raises `greet` and drops nothing; entity
    /// reports exist in both, response selection in neither.
    pub fn with_comparison_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "results/baseline/intent_report.json",
            r#"{"greet": {"support": 10, "f1-score": 0.80}, "accuracy": 0.75}"#,
        );
        m.add_file(
            "results/candidate/intent_report.json",
            r#"{"greet": {"support": 12, "f1-score": 0.85},
                "bye": {"support": 3, "f1-score": 0.60},
                "accuracy": 0.78}"#,
        );
        m.add_file(
            "results/baseline/DIETClassifier_report.json",
            r#"{"city": {"precision": 0.9, "recall": 0.8, "f1-score": 0.847, "support": 20},
                "date": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 5},
                "micro avg": {"precision": 0.92, "recall": 0.84, "f1-score": 0.878, "support": 25}}"#,
        );
        m.add_file(
            "results/candidate/DIETClassifier_report.json",
            r#"{"city": {"precision": 0.9, "recall": 0.8, "f1-score": 0.847, "support": 20},
                "date": {"precision": 0.8, "recall": 1.0, "f1-score": 0.889, "support": 5},
                "micro avg": {"precision": 0.88, "recall": 0.84, "f1-score": 0.86, "support": 25}}"#,
        );
        m
    }

    /// A single cross-validation results directory with all three reports.
    pub fn with_crossval_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "results/intent_report.json",
            r#"{
                "greet": {"precision": 0.95, "recall": 0.9, "f1-score": 0.923, "support": 50,
                          "confused_with": {"bye": 3, "affirm": 2}},
                "bye": {"precision": 0.88, "recall": 0.92, "f1-score": 0.9, "support": 80,
                        "confused_with": {"greet": 4}},
                "affirm": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 12,
                           "confused_with": {}},
                "accuracy": 0.91,
                "macro avg": {"precision": 0.94, "recall": 0.94, "f1-score": 0.941, "support": 142},
                "weighted avg": {"precision": 0.91, "recall": 0.91, "f1-score": 0.911, "support": 142}
            }"#,
        );
        m.add_file(
            "results/DIETClassifier_report.json",
            r#"{
                "city": {"precision": 0.9, "recall": 0.8, "f1-score": 0.847, "support": 20},
                "date": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 5},
                "micro avg": {"precision": 0.92, "recall": 0.84, "f1-score": 0.878, "support": 25}
            }"#,
        );
        m.add_file(
            "results/response_selection_report.json",
            r#"{
                "faq/opening_hours": {"precision": 1.0, "recall": 0.75, "f1-score": 0.857, "support": 4},
                "faq/pricing": {"precision": 0.6, "recall": 1.0, "f1-score": 0.75, "support": 3},
                "accuracy": 0.857
            }"#,
        );
        m
    }
}

impl Default for MockReportSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource for MockReportSource {
    fn read_to_string(&self, path: &Path) -> ReportResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ReportError::NotFound(path.display().to_string()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }
}
