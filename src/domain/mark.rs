use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Business context attached to a fault at the point it was raised or caught.
///
/// The timestamp is captured when the mark is created, not when it is logged.
/// A mark is immutable; re-marking a fault replaces the whole mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntryMark {
    timestamp: DateTime<Utc>,
    data: Value,
    severity: Severity,
}

impl LogEntryMark {
    pub fn new(severity: Severity, data: Value) -> Self {
        Self::at(Utc::now(), severity, data)
    }

    pub fn at(timestamp: DateTime<Utc>, severity: Severity, data: Value) -> Self {
        Self {
            timestamp,
            data,
            severity,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
