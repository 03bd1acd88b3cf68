//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::AnnotationEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn AnnotationEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn AnnotationEventHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event. Isolation needs unwinding; under
    /// `panic = "abort"` a panicking handler ends the process.
    fn emit<F: Fn(&dyn AnnotationEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("annotation event handler panicked");
            }
        }
    }

    /// Emit `on_pass_started` to all handlers.
    pub fn emit_pass_started(&self, event: &PassStartedEvent) {
        self.emit(|h| h.on_pass_started(event));
    }

    /// Emit `on_element_annotated` to all handlers.
    pub fn emit_element_annotated(&self, event: &ElementAnnotatedEvent) {
        self.emit(|h| h.on_element_annotated(event));
    }

    /// Emit `on_host_fault` to all handlers.
    pub fn emit_host_fault(&self, event: &HostFaultEvent) {
        self.emit(|h| h.on_host_fault(event));
    }

    /// Emit `on_pass_committed` to all handlers.
    pub fn emit_pass_committed(&self, event: &PassCommittedEvent) {
        self.emit(|h| h.on_pass_committed(event));
    }

    /// Emit `on_pass_rolled_back` to all handlers.
    pub fn emit_pass_rolled_back(&self, event: &PassRolledBackEvent) {
        self.emit(|h| h.on_pass_rolled_back(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
