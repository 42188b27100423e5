//! Report formatting configuration, loadable from TOML.

use std::path::Path;

use nlu_report_tools::TableFormat;
use nlu_report_types::{LabelType, metric};
use serde::Deserialize;

/// Top-level configuration. Every field has a default, so an empty file
/// (or no file at all) reproduces the built-in behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Output format. None infers it from the outfile extension.
    #[serde(default)]
    pub format: Option<TableFormat>,
    /// Metric rows are sorted by, descending.
    #[serde(default = "default_sort_metric")]
    pub sort_metric: String,
    #[serde(default)]
    pub intents: LabelTypeConfig,
    #[serde(default)]
    pub entities: LabelTypeConfig,
    #[serde(default)]
    pub retrieval_intents: LabelTypeConfig,
}

/// Per-label-type metric selection. Unset lists fall back to the label
/// type's defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelTypeConfig {
    #[serde(default)]
    pub diff_metrics: Option<Vec<String>>,
    #[serde(default)]
    pub display_metrics: Option<Vec<String>>,
}

fn default_title() -> String {
    "NLU Cross-Validation Results".to_string()
}

fn default_sort_metric() -> String {
    metric::SUPPORT.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            format: None,
            sort_metric: default_sort_metric(),
            intents: LabelTypeConfig::default(),
            entities: LabelTypeConfig::default(),
            retrieval_intents: LabelTypeConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn label_type(&self, label_type: LabelType) -> &LabelTypeConfig {
        match label_type {
            LabelType::Intents => &self.intents,
            LabelType::Entities => &self.entities,
            LabelType::RetrievalIntents => &self.retrieval_intents,
        }
    }

    pub fn diff_metrics(&self, label_type: LabelType) -> Vec<String> {
        self.label_type(label_type)
            .diff_metrics
            .clone()
            .unwrap_or_else(|| to_owned(label_type.default_diff_metrics()))
    }

    pub fn display_metrics(&self, label_type: LabelType) -> Vec<String> {
        self.label_type(label_type)
            .display_metrics
            .clone()
            .unwrap_or_else(|| to_owned(label_type.default_display_metrics()))
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
