use super::mark::LogEntryMark;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// How a fault relates to the faults that caused it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum FaultShape {
    /// At most one inner cause.
    Simple {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        inner: Option<Box<Fault>>,
    },
    /// Several independent causes, in declared order.
    Aggregate {
        #[serde(default)]
        causes: Vec<Fault>,
    },
}

/// An error carrying an optional mark and its causes.
///
/// Faults form an owned tree, so a cause graph can be arbitrarily deep but
/// never cyclic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fault {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mark: Option<LogEntryMark>,
    #[serde(flatten)]
    shape: FaultShape,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mark: None,
            shape: FaultShape::Simple { inner: None },
        }
    }

    pub fn with_inner(message: impl Into<String>, inner: Fault) -> Self {
        Self {
            message: message.into(),
            mark: None,
            shape: FaultShape::Simple {
                inner: Some(Box::new(inner)),
            },
        }
    }

    pub fn aggregate(message: impl Into<String>, causes: impl IntoIterator<Item = Fault>) -> Self {
        Self {
            message: message.into(),
            mark: None,
            shape: FaultShape::Aggregate {
                causes: causes.into_iter().collect(),
            },
        }
    }

    /// Converts any error and its `source()` chain into a chain of unmarked
    /// simple faults.
    pub fn capture(error: &(dyn Error + 'static)) -> Self {
        let inner = error.source().map(Fault::capture);
        match inner {
            Some(inner) => Fault::with_inner(error.to_string(), inner),
            None => Fault::new(error.to_string()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn shape(&self) -> &FaultShape {
        &self.shape
    }

    pub fn inner(&self) -> Option<&Fault> {
        match &self.shape {
            FaultShape::Simple { inner } => inner.as_deref(),
            FaultShape::Aggregate { .. } => None,
        }
    }

    /// Causes of an aggregate fault; empty for simple faults.
    pub fn causes(&self) -> &[Fault] {
        match &self.shape {
            FaultShape::Aggregate { causes } => causes,
            FaultShape::Simple { .. } => &[],
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self.shape, FaultShape::Aggregate { .. })
    }

    pub(crate) fn mark_slot(&self) -> Option<&LogEntryMark> {
        self.mark.as_ref()
    }

    pub(crate) fn set_mark(&mut self, mark: LogEntryMark) {
        self.mark = Some(mark);
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner().map(|inner| inner as &(dyn Error + 'static))
    }
}
