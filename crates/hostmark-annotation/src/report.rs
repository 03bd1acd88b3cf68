//! Summary of a committed annotation pass.

use serde::Serialize;

use crate::plan::HostFault;

/// Counts per outcome plus every tolerated host fault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationReport {
    pub transaction_name: String,
    pub visited: usize,
    pub classified: usize,
    pub unclassified: usize,
    pub unlinked: usize,
    pub writes: usize,
    pub host_faults: Vec<HostFault>,
    pub duration_ms: u64,
}

impl AnnotationReport {
    pub fn is_clean(&self) -> bool {
        self.host_faults.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
