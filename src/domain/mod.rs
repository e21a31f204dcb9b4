//! Domain layer for errmark.
//!
//! Contains the canonical types shared across all modules:
//! - `Fault`: the error tree marks are attached to
//! - `LogEntryMark`: the annotation stored on a fault
//! - `LogEntry`: the resolved record handed to a backend
//! - `Severity` / `BusinessTier`: the public severity vocabulary
//! - `MaxDepth`: the validated traversal bound

pub mod error;
pub mod fault;
pub mod log_entry;
pub mod mark;
pub mod max_depth;
pub mod severity;

pub use error::{ConfigError, MarkError};
pub use fault::{Fault, FaultShape};
pub use log_entry::{LogEntry, Payload};
pub use mark::LogEntryMark;
pub use max_depth::MaxDepth;
pub use severity::{BusinessTier, Severity};
