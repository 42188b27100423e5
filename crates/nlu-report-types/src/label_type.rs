use serde::{Deserialize, Serialize};

use crate::names::metric;

/// The three kinds of report produced by an NLU evaluation run.
///
/// Each kind comes from a different classifier evaluation and has its own
/// on-disk filename, so a combination may only ever mix result sets of one
/// kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelType {
    /// Intent classification (`intent_report.json`).
    Intents,
    /// Entity extraction (`DIETClassifier_report.json`).
    Entities,
    /// Retrieval intents / response selection (`response_selection_report.json`).
    RetrievalIntents,
}

impl LabelType {
    /// All label types, in the order their sections are written.
    pub const ALL: [LabelType; 3] = [Self::Intents, Self::Entities, Self::RetrievalIntents];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intents => "intents",
            Self::Entities => "entities",
            Self::RetrievalIntents => "retrieval_intents",
        }
    }

    /// Conventional report filename inside a results directory.
    pub fn report_filename(&self) -> &'static str {
        match self {
            Self::Intents => "intent_report.json",
            Self::Entities => "DIETClassifier_report.json",
            Self::RetrievalIntents => "response_selection_report.json",
        }
    }

    /// Header of the label column in rendered tables.
    pub fn row_header(&self) -> &'static str {
        match self {
            Self::Intents => "intent",
            Self::Entities => "entity",
            Self::RetrievalIntents => "retrieval_intent",
        }
    }

    pub fn section_title(&self) -> &'static str {
        match self {
            Self::Intents => "Intent Prediction Results",
            Self::Entities => "Entity Extraction Results",
            Self::RetrievalIntents => "Response Selection Results",
        }
    }

    /// Key of this kind's table in a persisted combined report.
    pub fn combined_report_key(&self) -> &'static str {
        match self {
            Self::Intents => "combined_intent_report",
            Self::Entities => "combined_entity_report",
            Self::RetrievalIntents => "combined_response_selection_report",
        }
    }

    pub fn default_diff_metrics(&self) -> &'static [&'static str] {
        match self {
            Self::Intents => &[metric::SUPPORT, metric::F1_SCORE],
            Self::Entities | Self::RetrievalIntents => &[
                metric::SUPPORT,
                metric::F1_SCORE,
                metric::PRECISION,
                metric::RECALL,
            ],
        }
    }

    pub fn default_display_metrics(&self) -> &'static [&'static str] {
        match self {
            Self::Intents => &[metric::SUPPORT, metric::F1_SCORE, metric::CONFUSED_WITH],
            Self::Entities | Self::RetrievalIntents => &[
                metric::SUPPORT,
                metric::F1_SCORE,
                metric::PRECISION,
                metric::RECALL,
            ],
        }
    }
}

impl std::fmt::Display for LabelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a label type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown label type: {0} (expected intents, entities or retrieval_intents)")]
pub struct ParseLabelTypeError(pub String);

impl std::str::FromStr for LabelType {
    type Err = ParseLabelTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "intents" | "intent" => Ok(Self::Intents),
            "entities" | "entity" => Ok(Self::Entities),
            "retrieval_intents" | "retrieval_intent" | "response_selection" => {
                Ok(Self::RetrievalIntents)
            }
            _ => Err(ParseLabelTypeError(s.to_string())),
        }
    }
}
