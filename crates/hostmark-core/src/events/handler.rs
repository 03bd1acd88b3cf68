//! AnnotationEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing an annotation pass.
///
/// Handlers only override the events they care about.
pub trait AnnotationEventHandler: Send + Sync {
    fn on_pass_started(&self, _event: &PassStartedEvent) {}
    fn on_element_annotated(&self, _event: &ElementAnnotatedEvent) {}
    fn on_host_fault(&self, _event: &HostFaultEvent) {}
    fn on_pass_committed(&self, _event: &PassCommittedEvent) {}
    fn on_pass_rolled_back(&self, _event: &PassRolledBackEvent) {}
}
