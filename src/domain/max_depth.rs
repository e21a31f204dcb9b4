use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on how many levels of a fault tree are inspected.
///
/// The root sits at level 1. Out-of-range values are rejected when the
/// setting is built, so a walk never has to validate its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct MaxDepth(u8);

impl MaxDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: MaxDepth = MaxDepth(10);

    pub fn new(depth: i64) -> Result<Self, ConfigError> {
        if depth < i64::from(Self::MIN) || depth > i64::from(Self::MAX) {
            return Err(ConfigError::MaxDepthOutOfRange {
                value: depth,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(MaxDepth(depth as u8))
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for MaxDepth {
    type Error = ConfigError;

    fn try_from(depth: i64) -> Result<Self, Self::Error> {
        MaxDepth::new(depth)
    }
}

impl From<MaxDepth> for i64 {
    fn from(depth: MaxDepth) -> Self {
        i64::from(depth.0)
    }
}

impl FromStr for MaxDepth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let depth = s
            .trim()
            .parse::<i64>()
            .map_err(|e| ConfigError::EnvError(format!("Invalid max depth '{s}': {e}")))?;
        MaxDepth::new(depth)
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
