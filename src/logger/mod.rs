//! Logger facade and the backends that perform the actual write.
//!
//! A backend implements a single recording primitive, [`Logger::record`].
//! Everything else on [`Logger`] is built on top of it.

pub mod backend;
pub mod dummy;
pub mod json_lines;
pub mod manager;
pub mod tracing_sink;

pub use backend::{BackendKind, LoggingBackend};
pub use dummy::{DummyBackend, DummyLogger};
pub use json_lines::{JsonLinesBackend, MessageSink, SerializingLogger, WriterSink};
pub use manager::{get_logger, get_logger_with};
pub use tracing_sink::{TracingBackend, TracingLogger};

use crate::chain::extract;
use crate::domain::{Fault, LogEntry, MaxDepth, Severity};
use serde_json::Value;

/// Level-tagged logging for application code.
///
/// `record` is fire-and-forget: implementations handle their own failures and
/// never report them to the caller.
pub trait Logger: Send + Sync {
    /// Writes one entry to the sink.
    fn record(&self, entry: LogEntry);

    fn name(&self) -> &str;

    /// Name of the backend that produced this logger.
    fn backend_name(&self) -> &'static str;

    fn max_depth(&self) -> MaxDepth {
        MaxDepth::default()
    }

    fn log(&self, severity: Severity, data: Value) {
        self.record(LogEntry::new(severity, data));
    }

    /// Records every entry extracted from `fault`, in extraction order.
    fn log_fault(&self, fault: &Fault) {
        for entry in extract(Some(fault), self.max_depth()) {
            self.record(entry);
        }
    }

    fn info(&self, data: Value) {
        self.log(Severity::Info, data);
    }

    fn warn(&self, data: Value) {
        self.log(Severity::Warn, data);
    }

    fn error(&self, data: Value) {
        self.log(Severity::Error, data);
    }
}
