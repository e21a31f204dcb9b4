#![warn(rust_2018_idioms)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::missing_errors_doc,      // Errors are documented on the enums
    clippy::module_name_repetitions, // e.g. LoggingBackend in logger module
    clippy::must_use_candidate
)]

//! Attach business context to errors where they are raised, then recover it
//! as correlated log entries where they are finally handled.
//!
//! ```
//! use errmark::{Fault, Payload, Severity};
//! use serde_json::json;
//!
//! let fault = Fault::with_inner(
//!     "checkout failed",
//!     Fault::new("card declined").mark_as_warn(json!({ "order": 42 })),
//! );
//!
//! let entries = fault.log_entries();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].severity, Severity::Warn);
//! assert_eq!(entries[0].data, Payload::from(json!({ "order": 42 })));
//! ```

pub mod app;
pub mod chain;
pub mod domain;
pub mod logger;
pub mod marking;
pub mod serialization;
pub mod settings;
pub mod test_support;

// Re-export main types for easy access
pub use chain::{Walk, extract, walk};
pub use domain::{
    BusinessTier, ConfigError, Fault, FaultShape, LogEntry, LogEntryMark, MarkError, MaxDepth,
    Payload, Severity,
};
pub use logger::{Logger, LoggingBackend, get_logger, get_logger_with};
pub use marking::MarkResultExt;
pub use settings::LogSettings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
