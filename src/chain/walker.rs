use crate::domain::{Fault, FaultShape, LogEntry, MaxDepth};
use uuid::Uuid;

/// Result of walking one subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    /// Entries from marks, in pre-order.
    pub entries: Vec<LogEntry>,
    /// Every branch of the subtree, within the depth bound, carried a mark.
    pub fully_marked: bool,
}

impl Walk {
    fn beyond_bound() -> Self {
        Self {
            entries: Vec::new(),
            fully_marked: false,
        }
    }
}

/// Collects an entry for every mark reachable from `root` within `max_depth`.
///
/// A node's own mark comes before the entries of its causes; aggregate causes
/// are visited in declared order. Does not add a fallback entry.
pub fn walk(root: &Fault, max_depth: MaxDepth, correlation_id: Uuid) -> Walk {
    visit(root, 1, max_depth, correlation_id)
}

fn visit(node: &Fault, level: usize, max_depth: MaxDepth, correlation_id: Uuid) -> Walk {
    if level > max_depth.get() {
        tracing::debug!(level, max_depth = %max_depth, fault = %node, "depth bound reached");
        return Walk::beyond_bound();
    }

    let mut entries = Vec::new();
    let marked = match node.log_entry_mark() {
        Some(mark) => {
            entries.push(LogEntry::from_mark(correlation_id, mark));
            true
        }
        None => false,
    };

    let causes_marked = match node.shape() {
        FaultShape::Aggregate { causes } => {
            // An aggregate with no causes counts as an unmarked leaf.
            let mut all = !causes.is_empty();
            for cause in causes {
                let child = visit(cause, level + 1, max_depth, correlation_id);
                entries.extend(child.entries);
                all &= child.fully_marked;
            }
            all
        }
        FaultShape::Simple { inner: Some(inner) } => {
            let child = visit(inner, level + 1, max_depth, correlation_id);
            entries.extend(child.entries);
            child.fully_marked
        }
        FaultShape::Simple { inner: None } => false,
    };

    Walk {
        entries,
        fully_marked: marked || causes_marked,
    }
}
