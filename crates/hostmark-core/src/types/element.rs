//! Element records read from and written to a document.

use serde::{Deserialize, Serialize};

use super::{Category, ElementId};

/// A dependent element that may be attached to exactly one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReinforcementElement {
    pub id: ElementId,
    /// Non-owning reference to the host. May be absent, or may point at
    /// nothing if the document is inconsistent.
    pub host: Option<ElementId>,
}

impl ReinforcementElement {
    pub fn hosted(id: ElementId, host: ElementId) -> Self {
        Self {
            id,
            host: Some(host),
        }
    }

    pub fn unhosted(id: ElementId) -> Self {
        Self { id, host: None }
    }
}

/// The structural element a reinforcement element is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostElement {
    pub id: ElementId,
    pub category: Option<Category>,
    /// Author-assigned mark. Null and empty are both legitimate values.
    pub mark: Option<String>,
}

impl HostElement {
    pub fn new(id: ElementId, category: Option<Category>, mark: Option<&str>) -> Self {
        Self {
            id,
            category,
            mark: mark.map(str::to_string),
        }
    }
}

/// One named string attribute assignment, handed to a document for
/// atomic application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeWrite {
    pub element: ElementId,
    pub name: String,
    pub value: Option<String>,
}

impl AttributeWrite {
    pub fn new(element: ElementId, name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            element,
            name: name.into(),
            value,
        }
    }
}
