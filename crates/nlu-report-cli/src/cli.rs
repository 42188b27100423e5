//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use nlu_report_tools::TableFormat;
use nlu_report_types::LabelType;

use crate::inputs::InputSpec;

/// Compare and format NLU evaluation results
#[derive(Debug, Parser)]
#[command(name = "nlu-results")]
#[command(version)]
#[command(
    about = "Compare and format NLU evaluation results",
    long_about = r#"
Loads the JSON reports written by an NLU test or cross-validation run
(intent_report.json, DIETClassifier_report.json,
response_selection_report.json), combines several runs, diffs them against
a baseline and writes Markdown or HTML tables.

EXAMPLES:
  nlu-results compare results/main=main results/branch=branch --only-changed
  nlu-results compare --label-type intents old/intent_report.json=old new/intent_report.json=new
  nlu-results format results --outfile results.md
"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Combine several result sets and diff them against a baseline
    Compare(CompareArgs),

    /// Format the reports of a single results directory
    Format(FormatArgs),
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Result sets as `path[=name]`; a path is a results directory, or a
    /// report file when --label-type is given
    #[arg(default_value = "results")]
    pub inputs: Vec<InputSpec>,

    /// File to write the tables to
    #[arg(short, long, default_value = "formatted_compared_results.html")]
    pub outfile: PathBuf,

    /// Output format (default: from the outfile extension)
    #[arg(short, long)]
    pub format: Option<TableFormat>,

    /// Append to the outfile instead of overwriting it
    #[arg(long)]
    pub append: bool,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Only process this label type (intents, entities, retrieval_intents)
    #[arg(long)]
    pub label_type: Option<LabelType>,

    /// Result set to diff against (default: the first one)
    #[arg(long)]
    pub baseline: Option<String>,

    /// Metrics to diff, comma separated
    #[arg(long, value_delimiter = ',')]
    pub diff_metrics: Option<Vec<String>>,

    /// Metrics to display, comma separated
    #[arg(long, value_delimiter = ',')]
    pub display_metrics: Option<Vec<String>>,

    /// Metric to sort rows by, descending
    #[arg(long)]
    pub sort_metric: Option<String>,

    /// Only show labels whose metrics changed
    #[arg(long)]
    pub only_changed: bool,

    /// Also write the combined report as JSON to this path
    #[arg(long)]
    pub combined_out: Option<PathBuf>,

    /// Start from a previously written combined report
    #[arg(long)]
    pub previous: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Results directory of a single evaluation run
    #[arg(default_value = "results")]
    pub dir: PathBuf,

    /// File to write the tables to
    #[arg(short, long, default_value = "results.md")]
    pub outfile: PathBuf,

    /// Output format (default: from the outfile extension)
    #[arg(short, long)]
    pub format: Option<TableFormat>,

    /// Append to the outfile instead of overwriting it
    #[arg(long)]
    pub append: bool,

    /// Metric to sort rows by, descending
    #[arg(long)]
    pub sort_metric: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_defaults() {
        let cli = Cli::try_parse_from(["nlu-results", "compare"]).unwrap();
        let Commands::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.inputs.len(), 1);
        assert_eq!(args.inputs[0].name, "results");
        assert_eq!(
            args.outfile,
            PathBuf::from("formatted_compared_results.html")
        );
        assert!(!args.only_changed);
        assert!(args.diff_metrics.is_none());
    }

    #[test]
    fn compare_full_flags() {
        let cli = Cli::try_parse_from([
            "nlu-results",
            "-v",
            "compare",
            "runs/a=main",
            "runs/b=branch",
            "--label-type",
            "entities",
            "--diff-metrics",
            "support,recall",
            "--format",
            "markdown",
            "--only-changed",
            "--baseline",
            "branch",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.inputs[1].name, "branch");
        assert_eq!(args.label_type, Some(LabelType::Entities));
        assert_eq!(
            args.diff_metrics,
            Some(vec!["support".to_string(), "recall".to_string()])
        );
        assert_eq!(args.format, Some(TableFormat::Markdown));
        assert_eq!(args.baseline.as_deref(), Some("branch"));
        assert!(args.only_changed);
    }

    #[test]
    fn bad_label_type_rejected() {
        let result =
            Cli::try_parse_from(["nlu-results", "compare", "--label-type", "slots"]);
        assert!(result.is_err());
    }

    #[test]
    fn format_defaults() {
        let cli = Cli::try_parse_from(["nlu-results", "format"]).unwrap();
        let Commands::Format(args) = cli.command else {
            panic!("expected format");
        };
        assert_eq!(args.dir, PathBuf::from("results"));
        assert_eq!(args.outfile, PathBuf::from("results.md"));
    }
}
