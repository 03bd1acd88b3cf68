//! Annotation pass configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CATEGORY_ATTRIBUTE, DEFAULT_MARK_ATTRIBUTE, DEFAULT_TRANSACTION_NAME,
};

/// Configuration for the annotation pass.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Attribute receiving the host category label. Default: `baseCategoryLabel`.
    pub category_attribute: Option<String>,
    /// Attribute receiving the host mark. Default: `baseMark`.
    pub mark_attribute: Option<String>,
    /// Name of the transaction wrapping the pass.
    pub transaction_name: Option<String>,
    /// Label overrides keyed by canonical category name (`Doors = "Дверь"`).
    pub category_labels: BTreeMap<String, String>,
}

impl AnnotationConfig {
    pub fn effective_category_attribute(&self) -> &str {
        self.category_attribute
            .as_deref()
            .unwrap_or(DEFAULT_CATEGORY_ATTRIBUTE)
    }

    pub fn effective_mark_attribute(&self) -> &str {
        self.mark_attribute.as_deref().unwrap_or(DEFAULT_MARK_ATTRIBUTE)
    }

    pub fn effective_transaction_name(&self) -> &str {
        self.transaction_name
            .as_deref()
            .unwrap_or(DEFAULT_TRANSACTION_NAME)
    }
}
