use super::{Logger, LoggingBackend};
use crate::domain::{LogEntry, MaxDepth, Severity};
use crate::serialization::EntrySerializer;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Sink taking a pre-formatted message instead of a structured entry.
pub trait MessageSink: Send + Sync {
    fn write(&self, severity: Severity, message: &str);
}

/// Writes one message per line to any `Write`.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> MessageSink for WriterSink<W> {
    fn write(&self, _severity: Severity, message: &str) {
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{message}").and_then(|()| writer.flush()) {
            tracing::warn!(error = %e, "failed to write log line");
        }
    }
}

/// Adapts a [`MessageSink`] to the [`Logger`] contract by serializing each
/// entry to a JSON line.
#[derive(Clone)]
pub struct SerializingLogger {
    name: String,
    max_depth: MaxDepth,
    sink: Arc<dyn MessageSink>,
    serializer: EntrySerializer,
}

impl SerializingLogger {
    pub fn new(name: impl Into<String>, max_depth: MaxDepth, sink: Arc<dyn MessageSink>) -> Self {
        Self {
            name: name.into(),
            max_depth,
            sink,
            serializer: EntrySerializer::new(),
        }
    }
}

impl Logger for SerializingLogger {
    fn record(&self, entry: LogEntry) {
        match self.serializer.serialize_entry(&entry) {
            Ok(message) => self.sink.write(entry.severity, &message),
            Err(e) => {
                tracing::warn!(
                    logger = %self.name,
                    correlation_id = %entry.correlation_id,
                    error = %e,
                    "dropping log entry that failed to serialize"
                );
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }

    fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }
}

/// Backend handing out [`SerializingLogger`]s that share one sink.
#[derive(Clone)]
pub struct JsonLinesBackend {
    sink: Arc<dyn MessageSink>,
}

impl JsonLinesBackend {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }

    pub fn stdout() -> Self {
        Self::new(Arc::new(WriterSink::new(io::stdout())))
    }
}

impl LoggingBackend for JsonLinesBackend {
    fn name(&self) -> &'static str {
        "json"
    }

    fn logger(&self, name: &str, max_depth: MaxDepth) -> Box<dyn Logger> {
        Box::new(SerializingLogger::new(name, max_depth, self.sink.clone()))
    }
}
