use anyhow::{Context, Result};
use apriori_miner::cli::{Cli, OutputFormat};
use apriori_miner::config::MinerConfig;
use apriori_miner::csv_output::CsvOutput;
use apriori_miner::html_output::HtmlOutput;
use apriori_miner::json_output::JsonOutput;
use apriori_miner::report::MiningReport;
use apriori_miner::text_output::TextOutput;
use apriori_miner::transactions;
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Defaults, then the config file, then command-line flags
fn resolve_config(args: &Cli) -> Result<MinerConfig> {
    let base = match &args.config {
        Some(path) => MinerConfig::from_file(path)?,
        None => MinerConfig::default(),
    };

    let config = base.with_overrides(args.min_support, args.format, args.levels);
    config.validate()?;
    Ok(config)
}

/// Name shown in reports: the file name, or the whole path if it has none
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn render(report: &MiningReport, config: &MinerConfig) -> Result<String> {
    let rendered = match config.format {
        OutputFormat::Text => TextOutput::new(report, config.show_levels).to_text(),
        OutputFormat::Json => {
            JsonOutput::from_report(report, config.show_levels).to_json()? + "\n"
        }
        OutputFormat::Csv => CsvOutput::new(report).to_csv(),
        OutputFormat::Html => HtmlOutput::new(report, config.show_levels).to_html(),
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = resolve_config(&args)?;
    let transactions = transactions::load_transactions(&args.input_file)?;

    let report = MiningReport::generate(
        display_name(&args.input_file),
        &transactions,
        config.min_support,
    );
    let rendered = render(&report, &config)?;

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }

    Ok(())
}
