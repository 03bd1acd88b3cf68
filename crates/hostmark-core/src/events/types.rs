//! Event payload types.

use serde::Serialize;

use crate::types::ElementId;

/// Which of the three annotation outcomes applied to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Classified,
    Unclassified,
    Unlinked,
}

/// Payload for `on_pass_started`.
#[derive(Debug, Clone)]
pub struct PassStartedEvent {
    pub transaction_name: String,
    pub element_count: usize,
}

/// Payload for `on_element_annotated`. Emitted while planning, before any write.
#[derive(Debug, Clone)]
pub struct ElementAnnotatedEvent {
    pub element: ElementId,
    pub outcome: OutcomeKind,
}

/// Payload for `on_host_fault`.
#[derive(Debug, Clone)]
pub struct HostFaultEvent {
    pub element: ElementId,
    pub message: String,
}

/// Payload for `on_pass_committed`.
#[derive(Debug, Clone)]
pub struct PassCommittedEvent {
    pub transaction_name: String,
    pub elements_written: usize,
    pub duration_ms: u64,
}

/// Payload for `on_pass_rolled_back`.
#[derive(Debug, Clone)]
pub struct PassRolledBackEvent {
    pub transaction_name: String,
    pub error_code: &'static str,
    pub message: String,
}
