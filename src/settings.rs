use crate::domain::{ConfigError, MaxDepth};
use crate::logger::{
    BackendKind, DummyBackend, JsonLinesBackend, LoggingBackend, TracingBackend,
};
use std::fmt;
use std::sync::Arc;

/// Runtime settings used to build loggers.
///
/// Defaults to the dummy backend and a max depth of 10.
#[derive(Clone)]
pub struct LogSettings {
    backend: Arc<dyn LoggingBackend>,
    max_depth: MaxDepth,
}

impl LogSettings {
    pub fn new(backend: Arc<dyn LoggingBackend>, max_depth: MaxDepth) -> Self {
        Self { backend, max_depth }
    }

    pub fn backend(&self) -> &dyn LoggingBackend {
        self.backend.as_ref()
    }

    pub fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }

    pub fn set_backend(&mut self, backend: impl LoggingBackend + 'static) {
        self.backend = Arc::new(backend);
    }

    pub fn set_backend_kind(&mut self, kind: BackendKind) {
        self.backend = kind.build();
    }

    pub fn use_tracing_backend(&mut self) {
        self.set_backend(TracingBackend);
    }

    pub fn use_json_lines_backend(&mut self) {
        self.set_backend(JsonLinesBackend::stdout());
    }

    /// Rejects depths outside 1..=10, leaving the current value untouched.
    pub fn set_max_depth(&mut self, depth: i64) -> Result<(), ConfigError> {
        self.max_depth = MaxDepth::new(depth)?;
        Ok(())
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self::new(Arc::new(DummyBackend), MaxDepth::default())
    }
}

impl fmt::Debug for LogSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSettings")
            .field("backend", &self.backend.name())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
