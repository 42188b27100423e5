//! Subcommand handlers.

pub mod compare;
pub mod format;

use std::path::Path;

use nlu_report_tools::TableFormat;

use crate::cli::Commands;
use crate::config::ReportConfig;

/// Dispatch a parsed subcommand.
pub fn run(config: &ReportConfig, command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Compare(args) => compare::run(config, args),
        Commands::Format(args) => format::run(config, args),
    }
}

/// Flag, then config, then the outfile extension.
pub(crate) fn resolve_format(
    flag: Option<TableFormat>,
    config: &ReportConfig,
    outfile: &Path,
) -> TableFormat {
    flag.or(config.format)
        .unwrap_or_else(|| TableFormat::from_extension(outfile))
}
