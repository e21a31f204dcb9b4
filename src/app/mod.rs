//! The `errmark` command line tool.
//!
//! Reads a fault tree as JSON, then either prints the extracted log entries
//! or hands the fault to the configured backend.

pub mod cli;
pub mod config;
pub mod env_helpers;
pub mod tracing;

pub use cli::{Cli, OutputFormat};
pub use config::{Config, LogLevel};

use crate::chain::extract;
use crate::domain::Fault;
use crate::logger::get_logger_with;
use crate::serialization::EntrySerializer;
use anyhow::Context;
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

const LOGGER_NAME: &str = "errmark";

pub fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli).context("failed to load configuration")?;
    tracing::init_tracing(config.log_level).context("failed to initialize tracing")?;
    ::tracing::info!(
        backend = config.backend.as_str(),
        max_depth = %config.max_depth,
        "Loaded settings"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out)
}

/// Runs one invocation against already loaded configuration.
pub fn execute(cli: &Cli, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let fault = read_fault(&cli.input)?;

    if cli.emit {
        let settings = config.log_settings();
        let logger = get_logger_with(LOGGER_NAME, Some(&settings));
        logger.log_fault(&fault);
        ::tracing::info!(backend = logger.backend_name(), "Fault handed to backend");
        return Ok(());
    }

    let entries = extract(Some(&fault), config.max_depth);
    let serializer = EntrySerializer::new();
    let rendered = match cli.format {
        OutputFormat::Ndjson => serializer.serialize_ndjson(&entries)?,
        OutputFormat::JsonArray => {
            let mut array = serializer.serialize_json_array(&entries)?;
            array.push('\n');
            array
        }
    };

    out.write_all(rendered.as_bytes())
        .context("failed to write log entries")?;
    out.flush()?;
    Ok(())
}

/// Reads a fault tree from `path`, or from stdin when `path` is `-`.
pub fn read_fault(path: &Path) -> anyhow::Result<Fault> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read fault from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read fault from {}", path.display()))?
    };

    serde_json::from_str(&raw).context("input is not a valid fault tree")
}
