use super::{Logger, LoggingBackend};
use crate::domain::{LogEntry, MaxDepth, Payload, Severity};
use tracing::{error, info, warn};

/// Backend writing each entry as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl LoggingBackend for TracingBackend {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn logger(&self, name: &str, max_depth: MaxDepth) -> Box<dyn Logger> {
        Box::new(TracingLogger::new(name, max_depth))
    }
}

#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
    max_depth: MaxDepth,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>, max_depth: MaxDepth) -> Self {
        Self {
            name: name.into(),
            max_depth,
        }
    }
}

fn render(payload: &Payload) -> String {
    match serde_json::to_string(payload) {
        Ok(json) => json,
        Err(e) => format!("<unserializable payload: {e}>"),
    }
}

impl Logger for TracingLogger {
    fn record(&self, entry: LogEntry) {
        let data = render(&entry.data);
        let timestamp = entry.timestamp.to_rfc3339();
        let id = entry.correlation_id;

        match entry.severity {
            Severity::Info => info!(
                logger = %self.name,
                correlation_id = %id,
                timestamp = %timestamp,
                data = %data,
                "log entry"
            ),
            Severity::Warn => warn!(
                logger = %self.name,
                correlation_id = %id,
                timestamp = %timestamp,
                data = %data,
                "log entry"
            ),
            Severity::Error => error!(
                logger = %self.name,
                correlation_id = %id,
                timestamp = %timestamp,
                data = %data,
                "log entry"
            ),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn backend_name(&self) -> &'static str {
        "tracing"
    }

    fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }
}
