//! Turning a fault tree into log entries.
//!
//! `walker` collects entries from marks, `assembler` adds the correlation id
//! and the fallback entry for trees that were not fully marked.

pub mod assembler;
pub mod walker;

pub use assembler::extract;
pub use walker::{Walk, walk};

use crate::domain::{Fault, LogEntry, MaxDepth};

impl Fault {
    /// Log entries for this fault, inspecting up to the default depth.
    pub fn log_entries(&self) -> Vec<LogEntry> {
        extract(Some(self), MaxDepth::default())
    }

    pub fn log_entries_within(&self, max_depth: MaxDepth) -> Vec<LogEntry> {
        extract(Some(self), max_depth)
    }
}
