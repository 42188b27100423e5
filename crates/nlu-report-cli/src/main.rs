//! `nlu-results`: compare and format NLU evaluation reports.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nlu_report_cli::cli::Cli;
use nlu_report_cli::commands;
use nlu_report_cli::config::ReportConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "nlu-results starting");

    let config = ReportConfig::load(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        tracing::info!(path = %path.display(), "config loaded");
    }

    commands::run(&config, &cli.command)
}
