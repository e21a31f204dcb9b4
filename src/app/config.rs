use super::cli::Cli;
use super::env_helpers::load_env_var;
use crate::domain::{ConfigError, MaxDepth};
use crate::logger::BackendKind;
use crate::settings::LogSettings;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Verbosity of the tool's own diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <LogLevel as ValueEnum>::from_str(s.trim(), true)
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// File, environment and CLI configuration, merged in that order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend used when handing faults to a logger
    pub backend: BackendKind,
    /// Levels of a fault tree inspected during extraction
    pub max_depth: MaxDepth,
    pub log_level: LogLevel,
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Overrides fields from `ERRMARK_BACKEND`, `ERRMARK_MAX_DEPTH` and
    /// `ERRMARK_LOG_LEVEL` when they are set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        load_env_var("ERRMARK_BACKEND", &mut self.backend)?;
        load_env_var("ERRMARK_MAX_DEPTH", &mut self.max_depth)?;
        load_env_var("ERRMARK_LOG_LEVEL", &mut self.log_level)?;
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) -> Result<(), ConfigError> {
        if let Some(backend) = cli.backend {
            self.backend = backend;
        }
        if let Some(depth) = cli.max_depth {
            self.max_depth = MaxDepth::new(depth)?;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.apply_cli(cli)?;
        Ok(config)
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings::new(self.backend.build(), self.max_depth)
    }
}
