use nlu_report_tools::FileReportSource;

use super::resolve_format;
use crate::cli::FormatArgs;
use crate::config::ReportConfig;
use crate::output::write_output;
use crate::pipeline;

pub fn run(config: &ReportConfig, args: &FormatArgs) -> anyhow::Result<()> {
    tracing::info!(dir = %args.dir.display(), "formatting results");
    let document =
        pipeline::format_results(&FileReportSource, &args.dir, args.sort_metric.as_deref(), config)?;
    if document.sections.is_empty() {
        tracing::warn!(dir = %args.dir.display(), "no reports found");
    }

    let format = resolve_format(args.format, config, &args.outfile);
    write_output(&args.outfile, &document.render(format), args.append)
}
