use super::Logger;
use super::dummy::DummyBackend;
use super::json_lines::JsonLinesBackend;
use super::tracing_sink::TracingBackend;
use crate::domain::{ConfigError, MaxDepth};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Produces loggers by name.
pub trait LoggingBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn logger(&self, name: &str, max_depth: MaxDepth) -> Box<dyn Logger>;
}

/// Built-in backends selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Discard everything (default)
    #[default]
    Dummy,
    /// Emit `tracing` events
    Tracing,
    /// Write JSON lines to stdout
    Json,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Dummy => "dummy",
            BackendKind::Tracing => "tracing",
            BackendKind::Json => "json",
        }
    }

    pub fn build(&self) -> Arc<dyn LoggingBackend> {
        match self {
            BackendKind::Dummy => Arc::new(DummyBackend),
            BackendKind::Tracing => Arc::new(TracingBackend),
            BackendKind::Json => Arc::new(JsonLinesBackend::stdout()),
        }
    }
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dummy" => Ok(BackendKind::Dummy),
            "tracing" => Ok(BackendKind::Tracing),
            "json" => Ok(BackendKind::Json),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}
