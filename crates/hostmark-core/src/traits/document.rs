//! The document seam: element enumeration, host resolution, attribute
//! storage and the transaction boundary.

use crate::errors::DocumentError;
use crate::types::{AttributeWrite, ElementId, HostElement, ReinforcementElement};

/// A transactional document holding hosts and reinforcement elements.
pub trait Document {
    /// Every reinforcement element in the document, in a stable order.
    fn reinforcement_elements(&self) -> Result<Vec<ReinforcementElement>, DocumentError>;

    /// Resolve the host of `element`.
    ///
    /// `Ok(None)` means the element is not attached to anything.
    /// `Err` means a reference exists but cannot be followed.
    fn resolve_host(
        &self,
        element: &ReinforcementElement,
    ) -> Result<Option<HostElement>, DocumentError>;

    /// Read a named string attribute. Fails with `AttributeNotFound` when the
    /// name is not part of the element's schema.
    fn get_attribute(&self, element: ElementId, name: &str)
        -> Result<Option<String>, DocumentError>;

    /// Apply every write inside one transaction named `transaction_name`.
    /// Either all writes become visible or none do.
    fn apply_atomically(
        &mut self,
        transaction_name: &str,
        writes: &[AttributeWrite],
    ) -> Result<(), DocumentError>;
}
