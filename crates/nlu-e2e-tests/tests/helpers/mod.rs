//! Shared test harness for E2E tests.
//!
//! Writes report directories into a temp dir and runs `nlu-results`
//! commands through the same parsing and dispatch as the binary.

#![allow(dead_code)]

use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use nlu_report_cli::cli::Cli;
use nlu_report_cli::commands;
use nlu_report_cli::config::ReportConfig;
use nlu_report_types::LabelType;

pub const MAIN_INTENTS: &str = r#"{
    "greet": {"precision": 0.9, "recall": 0.9, "f1-score": 0.9, "support": 40,
              "confused_with": {"bye": 2}},
    "bye": {"precision": 0.8, "recall": 0.8, "f1-score": 0.8, "support": 30,
            "confused_with": {}},
    "affirm": {"precision": 0.95, "recall": 0.95, "f1-score": 0.95, "support": 20,
               "confused_with": {}},
    "accuracy": 0.88,
    "weighted avg": {"precision": 0.88, "recall": 0.88, "f1-score": 0.88, "support": 90}
}"#;

pub const BRANCH_INTENTS: &str = r#"{
    "greet": {"precision": 0.92, "recall": 0.92, "f1-score": 0.92, "support": 40,
              "confused_with": {"bye": 1}},
    "bye": {"precision": 0.8, "recall": 0.8, "f1-score": 0.8, "support": 30,
            "confused_with": {}},
    "affirm": {"precision": 0.95, "recall": 0.95, "f1-score": 0.95, "support": 20,
               "confused_with": {}},
    "deny": {"precision": 0.5, "recall": 0.5, "f1-score": 0.5, "support": 6,
             "confused_with": {"affirm": 3}},
    "accuracy": 0.9,
    "weighted avg": {"precision": 0.89, "recall": 0.89, "f1-score": 0.89, "support": 96}
}"#;

pub const MAIN_ENTITIES: &str = r#"{
    "city": {"precision": 0.9, "recall": 0.8, "f1-score": 0.847, "support": 20},
    "date": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 5},
    "micro avg": {"precision": 0.92, "recall": 0.84, "f1-score": 0.878, "support": 25}
}"#;

pub const BRANCH_ENTITIES: &str = r#"{
    "city": {"precision": 0.9, "recall": 0.8, "f1-score": 0.847, "support": 20},
    "date": {"precision": 0.8, "recall": 1.0, "f1-score": 0.889, "support": 5},
    "micro avg": {"precision": 0.88, "recall": 0.84, "f1-score": 0.86, "support": 25}
}"#;

pub const BRANCH_RESPONSES: &str = r#"{
    "faq/pricing": {"precision": 0.6, "recall": 1.0, "f1-score": 0.75, "support": 3},
    "accuracy": 0.75
}"#;

/// Temp workspace holding result directories and outputs.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    /// Two runs, `main` and `branch`. Only `branch` has a response
    /// selection report.
    pub fn with_two_runs() -> Self {
        let h = Self::empty();
        h.write_report("main", LabelType::Intents, MAIN_INTENTS);
        h.write_report("main", LabelType::Entities, MAIN_ENTITIES);
        h.write_report("branch", LabelType::Intents, BRANCH_INTENTS);
        h.write_report("branch", LabelType::Entities, BRANCH_ENTITIES);
        h.write_report("branch", LabelType::RetrievalIntents, BRANCH_RESPONSES);
        h
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write `content` as the conventional report file of `run`.
    pub fn write_report(&self, run: &str, label_type: LabelType, content: &str) -> PathBuf {
        let dir = self.path(run);
        std::fs::create_dir_all(&dir).expect("create run dir");
        let path = dir.join(label_type.report_filename());
        std::fs::write(&path, content).expect("write report");
        path
    }

    pub fn write_file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel)).expect("read output")
    }

    /// Absolute path of `rel` as a command-line argument.
    pub fn arg(&self, rel: &str) -> String {
        self.path(rel).display().to_string()
    }

    /// `path=name` argument for a run directory.
    pub fn input(&self, run: &str) -> String {
        format!("{}={run}", self.path(run).display())
    }

    /// `path=name` argument for a single report file of a run.
    pub fn report_input(&self, run: &str, label_type: LabelType, name: &str) -> String {
        format!(
            "{}={name}",
            self.path(run).join(label_type.report_filename()).display()
        )
    }

    /// Parse `args` as `nlu-results <args>` and run the command.
    pub fn run(&self, args: &[&str]) -> anyhow::Result<()> {
        let argv = std::iter::once("nlu-results").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv)?;
        let config = ReportConfig::load(cli.config.as_deref())?;
        commands::run(&config, &cli.command)
    }
}

/// First-column labels of the table under `## {title}` in a Markdown document.
pub fn section_labels(markdown: &str, title: &str) -> Vec<String> {
    let heading = format!("## {title}\n");
    let Some(start) = markdown.find(&heading) else {
        return Vec::new();
    };
    markdown[start + heading.len()..]
        .lines()
        .skip_while(|line| line.is_empty())
        .take_while(|line| line.starts_with('|'))
        .skip(2)
        .filter_map(|line| line.split('|').nth(1))
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Header cells of the table under `## {title}`.
pub fn section_headers(markdown: &str, title: &str) -> Vec<String> {
    let heading = format!("## {title}\n");
    let Some(start) = markdown.find(&heading) else {
        return Vec::new();
    };
    markdown[start + heading.len()..]
        .lines()
        .find(|line| line.starts_with('|'))
        .map(|line| {
            line.trim_matches('|')
                .split(" | ")
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Cells of the row for `label` under `## {title}`.
pub fn section_row(markdown: &str, title: &str, label: &str) -> Vec<String> {
    let heading = format!("## {title}\n");
    let Some(start) = markdown.find(&heading) else {
        return Vec::new();
    };
    markdown[start + heading.len()..]
        .lines()
        .skip_while(|line| line.is_empty())
        .take_while(|line| line.starts_with('|'))
        .map(|line| {
            line.trim_matches('|')
                .split(" | ")
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<_>>()
        })
        .find(|cells| cells.first().map(String::as_str) == Some(label))
        .unwrap_or_default()
}
