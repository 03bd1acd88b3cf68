//! In-memory document model.

mod transaction;

pub use transaction::DocumentTransaction;

use std::collections::BTreeMap;

use hostmark_core::errors::DocumentError;
use hostmark_core::types::{
    AttributeWrite, Category, ElementId, HostElement, ReinforcementElement,
};
use hostmark_core::Document;

/// A reinforcement element together with its attribute slots.
/// Only names present in `attributes` exist on the element's schema.
#[derive(Debug, Clone)]
struct StoredReinforcement {
    element: ReinforcementElement,
    attributes: BTreeMap<String, Option<String>>,
}

/// Document kept entirely in memory, ordered by element id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    hosts: BTreeMap<ElementId, HostElement>,
    reinforcements: BTreeMap<ElementId, StoredReinforcement>,
    /// Host ids whose lookup fails as if the stored element were damaged.
    damaged_hosts: BTreeMap<ElementId, String>,
    next_id: i64,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        id
    }

    /// Add a host element and return its id.
    pub fn add_host(&mut self, category: Option<Category>, mark: Option<&str>) -> ElementId {
        let id = self.allocate_id();
        self.hosts.insert(id, HostElement::new(id, category, mark));
        id
    }

    /// Add a reinforcement element whose schema contains `attribute_names`.
    pub fn add_reinforcement(&mut self, host: Option<ElementId>, attribute_names: &[&str]) -> ElementId {
        let id = self.allocate_id();
        let attributes = attribute_names
            .iter()
            .map(|name| (name.to_string(), None))
            .collect();
        self.reinforcements.insert(
            id,
            StoredReinforcement {
                element: ReinforcementElement { id, host },
                attributes,
            },
        );
        id
    }

    /// Make every lookup of `host` fail with `reason`.
    pub fn damage_host(&mut self, host: ElementId, reason: impl Into<String>) {
        self.damaged_hosts.insert(host, reason.into());
    }

    pub fn remove_host(&mut self, host: ElementId) -> Option<HostElement> {
        self.hosts.remove(&host)
    }

    pub fn host_mut(&mut self, host: ElementId) -> Option<&mut HostElement> {
        self.hosts.get_mut(&host)
    }

    /// Open a transaction. Writes made through it are undone on drop unless
    /// `commit` is called.
    pub fn transaction(&mut self, name: &str) -> DocumentTransaction<'_> {
        DocumentTransaction::start(self, name)
    }

    fn slot_mut(
        &mut self,
        element: ElementId,
        name: &str,
    ) -> Result<&mut Option<String>, DocumentError> {
        let stored = self
            .reinforcements
            .get_mut(&element)
            .ok_or_else(|| not_a_reinforcement(element))?;
        stored
            .attributes
            .get_mut(name)
            .ok_or_else(|| DocumentError::AttributeNotFound {
                element,
                name: name.to_string(),
            })
    }
}

fn not_a_reinforcement(id: ElementId) -> DocumentError {
    DocumentError::NotAReinforcement { id }
}

impl Document for InMemoryDocument {
    fn reinforcement_elements(&self) -> Result<Vec<ReinforcementElement>, DocumentError> {
        Ok(self
            .reinforcements
            .values()
            .map(|stored| stored.element.clone())
            .collect())
    }

    fn resolve_host(
        &self,
        element: &ReinforcementElement,
    ) -> Result<Option<HostElement>, DocumentError> {
        let Some(host_id) = element.host else {
            return Ok(None);
        };
        if let Some(reason) = self.damaged_hosts.get(&host_id) {
            return Err(DocumentError::CorruptReference {
                element: element.id,
                reason: reason.clone(),
            });
        }
        match self.hosts.get(&host_id) {
            Some(host) => Ok(Some(host.clone())),
            None => Err(DocumentError::CorruptReference {
                element: element.id,
                reason: format!("host {host_id} does not exist"),
            }),
        }
    }

    fn get_attribute(&self, element: ElementId, name: &str) -> Result<Option<String>, DocumentError> {
        let stored = self
            .reinforcements
            .get(&element)
            .ok_or_else(|| not_a_reinforcement(element))?;
        stored
            .attributes
            .get(name)
            .cloned()
            .ok_or_else(|| DocumentError::AttributeNotFound {
                element,
                name: name.to_string(),
            })
    }

    fn apply_atomically(
        &mut self,
        transaction_name: &str,
        writes: &[AttributeWrite],
    ) -> Result<(), DocumentError> {
        let mut tx = self.transaction(transaction_name);
        for write in writes {
            tx.set_attribute(write.element, &write.name, write.value.clone())?;
        }
        tx.commit();
        Ok(())
    }
}
