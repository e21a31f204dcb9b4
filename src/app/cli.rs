use super::config::LogLevel;
use crate::logger::BackendKind;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How extracted entries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line (default)
    #[default]
    Ndjson,
    /// A single pretty-printed JSON array
    JsonArray,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fault tree JSON file ("-" reads stdin)
    #[arg(long, short, default_value = "-")]
    pub input: PathBuf,

    /// Output format for extracted entries
    #[arg(long, value_enum, default_value = "ndjson")]
    pub format: OutputFormat,

    /// Hand the fault to the configured backend instead of printing entries
    #[arg(long)]
    pub emit: bool,

    /// Logging backend used with --emit
    #[arg(long, value_enum)]
    pub backend: Option<BackendKind>,

    /// Levels of the fault tree to inspect (1-10)
    #[arg(long, allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Level of the tool's own diagnostics
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Configuration file path (optional)
    #[arg(long, env = "ERRMARK_CONFIG")]
    pub config_file: Option<PathBuf>,
}
