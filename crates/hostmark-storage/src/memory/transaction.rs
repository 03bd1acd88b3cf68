//! RAII transaction over an `InMemoryDocument`.

use hostmark_core::errors::DocumentError;
use hostmark_core::types::ElementId;

use super::InMemoryDocument;

/// Open transaction on an in-memory document.
///
/// Every `set_attribute` records the slot's previous value. Dropping the
/// transaction without `commit` restores those values in reverse order.
pub struct DocumentTransaction<'a> {
    document: &'a mut InMemoryDocument,
    name: String,
    undo: Vec<(ElementId, String, Option<String>)>,
    committed: bool,
}

impl<'a> DocumentTransaction<'a> {
    pub(super) fn start(document: &'a mut InMemoryDocument, name: &str) -> Self {
        tracing::debug!(transaction = name, "transaction started");
        Self {
            document,
            name: name.to_string(),
            undo: Vec::new(),
            committed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of writes made so far.
    pub fn pending_writes(&self) -> usize {
        self.undo.len()
    }

    pub fn set_attribute(
        &mut self,
        element: ElementId,
        name: &str,
        value: Option<String>,
    ) -> Result<(), DocumentError> {
        let slot = self.document.slot_mut(element, name)?;
        let previous = std::mem::replace(slot, value);
        self.undo.push((element, name.to_string(), previous));
        Ok(())
    }

    pub fn commit(mut self) {
        self.committed = true;
        tracing::debug!(
            transaction = %self.name,
            writes = self.undo.len(),
            "transaction committed"
        );
    }

    /// Discard every write made through this transaction.
    pub fn rollback(self) {}
}

impl Drop for DocumentTransaction<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        let writes = self.undo.len();
        while let Some((element, name, previous)) = self.undo.pop() {
            // Slots were validated when the write was recorded.
            if let Ok(slot) = self.document.slot_mut(element, &name) {
                *slot = previous;
            }
        }
        tracing::debug!(transaction = %self.name, writes, "transaction rolled back");
    }
}
