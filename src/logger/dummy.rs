use super::{Logger, LoggingBackend};
use crate::domain::{LogEntry, MaxDepth};

/// Backend used when nothing else is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyBackend;

impl LoggingBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "dummy"
    }

    fn logger(&self, name: &str, max_depth: MaxDepth) -> Box<dyn Logger> {
        Box::new(DummyLogger::new(name, max_depth))
    }
}

/// Accepts every entry and discards it.
#[derive(Debug, Clone)]
pub struct DummyLogger {
    name: String,
    max_depth: MaxDepth,
}

impl DummyLogger {
    pub fn new(name: impl Into<String>, max_depth: MaxDepth) -> Self {
        Self {
            name: name.into(),
            max_depth,
        }
    }
}

impl Logger for DummyLogger {
    fn record(&self, _entry: LogEntry) {}

    fn name(&self) -> &str {
        &self.name
    }

    fn backend_name(&self) -> &'static str {
        "dummy"
    }

    fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }
}
