use crate::domain::LogEntry;
use std::io::Write;
use thiserror::Error;

// Rough per-entry size used to pre-size output buffers
const ESTIMATED_ENTRY_SIZE: usize = 256;

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON serialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error during serialization: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Batch is empty")]
    EmptyBatch,
}

/// Renders log entries as JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntrySerializer;

impl EntrySerializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize_entry(&self, entry: &LogEntry) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(entry)?)
    }

    /// One JSON object per line, newline terminated.
    pub fn serialize_ndjson(&self, entries: &[LogEntry]) -> Result<String, SerializationError> {
        if entries.is_empty() {
            return Err(SerializationError::EmptyBatch);
        }

        let mut buffer = Vec::with_capacity(entries.len().saturating_mul(ESTIMATED_ENTRY_SIZE));
        for entry in entries {
            serde_json::to_writer(&mut buffer, entry)?;
            buffer.write_all(b"\n")?;
        }

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn serialize_json_array(&self, entries: &[LogEntry]) -> Result<String, SerializationError> {
        if entries.is_empty() {
            return Err(SerializationError::EmptyBatch);
        }

        Ok(serde_json::to_string_pretty(entries)?)
    }
}
