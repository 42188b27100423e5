use anyhow::Context;
use nlu_report_tools::{
    CombinedReport, FileReportSource, load_from_combined_json_report, write_combined_json_report,
};

use super::resolve_format;
use crate::cli::CompareArgs;
use crate::config::ReportConfig;
use crate::output::write_output;
use crate::pipeline::{self, CompareOptions};

pub fn run(config: &ReportConfig, args: &CompareArgs) -> anyhow::Result<()> {
    let source = FileReportSource;

    let previous = match &args.previous {
        Some(path) => Some(
            load_from_combined_json_report(&source, path)
                .with_context(|| format!("failed to load previous results {}", path.display()))?,
        ),
        None => None,
    };

    let options = CompareOptions {
        inputs: args.inputs.clone(),
        label_type: args.label_type,
        baseline: args.baseline.clone(),
        diff_metrics: args.diff_metrics.clone(),
        display_metrics: args.display_metrics.clone(),
        sort_metric: args.sort_metric.clone(),
        only_changed: args.only_changed,
        title: args.title.clone(),
        previous,
    };
    tracing::info!(
        inputs = options.inputs.len(),
        baseline = ?options.baseline,
        only_changed = options.only_changed,
        "comparing result sets"
    );

    let outcome = pipeline::compare(&source, &options, config)?;

    let format = resolve_format(args.format, config, &args.outfile);
    write_output(&args.outfile, &outcome.document.render(format), args.append)?;

    if let Some(path) = &args.combined_out {
        let reports: Vec<&CombinedReport> = outcome.combined.iter().collect();
        write_combined_json_report(path, &reports)?;
    }
    Ok(())
}
