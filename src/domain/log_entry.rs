use super::fault::Fault;
use super::mark::LogEntryMark;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// What a log entry carries: caller context, or the fault itself when nobody
/// annotated it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Data(Value),
    Fault(Box<Fault>),
}

impl Payload {
    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Payload::Data(value) => Some(value),
            Payload::Fault(_) => None,
        }
    }

    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            Payload::Fault(fault) => Some(fault),
            Payload::Data(_) => None,
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Data(value)
    }
}

impl From<Fault> for Payload {
    fn from(fault: Fault) -> Self {
        Payload::Fault(Box::new(fault))
    }
}

/// A resolved record ready to be handed to a backend.
///
/// Entries produced by one extraction share the same `correlation_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub correlation_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub data: Payload,
    pub severity: Severity,
}

impl LogEntry {
    /// A standalone entry with its own correlation id.
    pub fn new(severity: Severity, data: Value) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            data: Payload::Data(data),
            severity,
        }
    }

    pub fn from_mark(correlation_id: Uuid, mark: &LogEntryMark) -> Self {
        Self {
            correlation_id,
            timestamp: mark.timestamp(),
            data: Payload::Data(mark.data().clone()),
            severity: mark.severity(),
        }
    }

    /// Entry standing in for a fault tree that was not fully marked.
    pub fn fallback(correlation_id: Uuid, root: &Fault, at: DateTime<Utc>) -> Self {
        Self {
            correlation_id,
            timestamp: at,
            data: Payload::from(root.clone()),
            severity: Severity::UNKNOWN,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.data, Payload::Fault(_))
    }
}
