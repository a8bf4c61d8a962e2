//! CLI argument parsing for apriori-miner

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
    /// Standalone HTML report
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "apriori-miner")]
#[command(version)]
#[command(about = "Mine maximal frequent itemsets with the Apriori algorithm", long_about = None)]
pub struct Cli {
    /// Input CSV file, one transaction per line of comma-separated item ids
    #[arg(short = 'i', long = "input-file", value_name = "FILE")]
    pub input_file: PathBuf,

    /// Minimum support count (number of transactions, >= 1)
    #[arg(short = 'm', long = "min-support", value_name = "COUNT")]
    pub min_support: Option<usize>,

    /// Output format (overrides the config file)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Show candidate and frequent counts for every level
    #[arg(long = "levels")]
    pub levels: bool,

    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable debug tracing output on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
