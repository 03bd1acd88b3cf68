//! Element identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of an element inside one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub i64);

impl ElementId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<i64> for ElementId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
