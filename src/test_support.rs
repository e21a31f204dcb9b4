//! Shared test support utilities
//!
//! Capturing implementations of the `Logger`, `LoggingBackend` and
//! `MessageSink` seams for use in unit and integration tests.

use crate::domain::{LogEntry, MaxDepth, Severity};
use crate::logger::{Logger, LoggingBackend, MessageSink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Logger that keeps every recorded entry in memory.
///
/// Clones share the same store.
#[derive(Clone)]
pub struct MemoryLogger {
    name: String,
    max_depth: MaxDepth,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_max_depth(name, MaxDepth::default())
    }

    pub fn with_max_depth(name: impl Into<String>, max_depth: MaxDepth) -> Self {
        Self {
            name: name.into(),
            max_depth,
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn record(&self, entry: LogEntry) {
        self.entries.lock().push(entry);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }
}

/// Backend whose loggers all record into one shared store.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }
}

impl LoggingBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn logger(&self, name: &str, max_depth: MaxDepth) -> Box<dyn Logger> {
        Box::new(MemoryLogger {
            name: name.to_string(),
            max_depth,
            entries: self.entries.clone(),
        })
    }
}

/// Message sink capturing `(severity, message)` pairs.
#[derive(Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().clone()
    }
}

impl MessageSink for MemorySink {
    fn write(&self, severity: Severity, message: &str) {
        self.messages.lock().push((severity, message.to_string()));
    }
}
