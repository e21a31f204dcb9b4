use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log entry.
///
/// This is the vocabulary application code logs against. It is distinct from
/// `app::config::LogLevel`, which only configures the tool's own diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Severity given to faults nobody annotated.
    pub const UNKNOWN: Severity = Severity::Error;

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

/// Business-facing profile of the same three tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessTier {
    /// Defined by a business rule, e.g. a declined payment.
    Expected,
    /// Known to happen occasionally, e.g. a flaky upstream.
    Anticipated,
    Unknown,
}

impl From<BusinessTier> for Severity {
    fn from(tier: BusinessTier) -> Self {
        match tier {
            BusinessTier::Expected => Severity::Info,
            BusinessTier::Anticipated => Severity::Warn,
            BusinessTier::Unknown => Severity::UNKNOWN,
        }
    }
}
