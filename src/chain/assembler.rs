use super::walker::walk;
use crate::domain::{Fault, LogEntry, MaxDepth};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Extracts the log entries for a fault tree.
///
/// All entries share one fresh correlation id. When some branch within
/// `max_depth` carries no mark, exactly one fallback entry is appended whose
/// payload is `root` itself. A missing root yields no entries.
pub fn extract(root: Option<&Fault>, max_depth: MaxDepth) -> Vec<LogEntry> {
    match root {
        Some(root) => assemble(root, max_depth, Uuid::new_v4(), Utc::now),
        None => Vec::new(),
    }
}

/// `now` is only consulted when a fallback entry is needed, after the walk.
pub(crate) fn assemble(
    root: &Fault,
    max_depth: MaxDepth,
    correlation_id: Uuid,
    now: impl FnOnce() -> DateTime<Utc>,
) -> Vec<LogEntry> {
    let walk = walk(root, max_depth, correlation_id);
    let mut entries = walk.entries;

    if !walk.fully_marked {
        tracing::debug!(
            %correlation_id,
            fault = %root,
            marked_entries = entries.len(),
            "fault tree not fully marked, adding fallback entry"
        );
        entries.push(LogEntry::fallback(correlation_id, root, now()));
    }

    entries
}
