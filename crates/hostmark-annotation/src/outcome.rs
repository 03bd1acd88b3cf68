//! The three-way outcome policy.

use hostmark_core::constants::{NOT_LINKED, UNDETERMINED_CATEGORY};
use hostmark_core::events::types::OutcomeKind;
use hostmark_core::types::HostElement;
use serde::Serialize;

use crate::classifier::CategoryLookupTable;

/// What happened when an element's host was looked up and classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnnotationOutcome {
    /// Host found and its category has a label.
    Classified { label: String, mark: Option<String> },
    /// Host found but its category is absent or has no label.
    Unclassified,
    /// No host, or the host reference could not be followed.
    Unlinked,
}

impl AnnotationOutcome {
    /// Pick the outcome for an element given its resolved host, if any.
    pub fn decide(host: Option<&HostElement>, table: &CategoryLookupTable) -> Self {
        let Some(host) = host else {
            return Self::Unlinked;
        };
        match table.classify(host.category) {
            Some(label) => Self::Classified {
                label: label.to_string(),
                mark: host.mark.clone(),
            },
            None => Self::Unclassified,
        }
    }

    /// The outcome without its payload, as reported in events.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Classified { .. } => OutcomeKind::Classified,
            Self::Unclassified => OutcomeKind::Unclassified,
            Self::Unlinked => OutcomeKind::Unlinked,
        }
    }

    /// The pair of values to write. A classified host's mark is carried
    /// verbatim, null and empty included; the sentinels fill both fields.
    pub fn result(&self) -> AnnotationResult {
        match self {
            Self::Classified { label, mark } => AnnotationResult {
                category_label: label.clone(),
                mark_label: mark.clone(),
            },
            Self::Unclassified => AnnotationResult::sentinel(UNDETERMINED_CATEGORY),
            Self::Unlinked => AnnotationResult::sentinel(NOT_LINKED),
        }
    }
}

/// Values for the two target attributes of one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationResult {
    pub category_label: String,
    pub mark_label: Option<String>,
}

impl AnnotationResult {
    fn sentinel(text: &str) -> Self {
        Self {
            category_label: text.to_string(),
            mark_label: Some(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use hostmark_core::types::{Category, ElementId};

    use super::*;

    fn host(category: Option<Category>, mark: Option<&str>) -> HostElement {
        HostElement::new(ElementId(7), category, mark)
    }

    #[test]
    fn classified_host_carries_label_and_mark() {
        let outcome = AnnotationOutcome::decide(
            Some(&host(Some(Category::Doors), Some("D-101"))),
            &CategoryLookupTable::default(),
        );
        assert_eq!(outcome.kind(), OutcomeKind::Classified);
        assert_eq!(
            outcome.result(),
            AnnotationResult {
                category_label: "Door".to_string(),
                mark_label: Some("D-101".to_string()),
            }
        );
    }

    #[test]
    fn classified_host_with_null_mark_writes_null() {
        let outcome = AnnotationOutcome::decide(
            Some(&host(Some(Category::Walls), None)),
            &CategoryLookupTable::default(),
        );
        assert_eq!(outcome.result().mark_label, None);
    }

    #[test]
    fn unmapped_category_fills_both_fields_with_same_sentinel() {
        let outcome = AnnotationOutcome::decide(
            Some(&host(Some(Category::GenericModels), Some("H-9"))),
            &CategoryLookupTable::default(),
        );
        let result = outcome.result();
        assert_eq!(result.category_label, UNDETERMINED_CATEGORY);
        assert_eq!(result.mark_label.as_deref(), Some(UNDETERMINED_CATEGORY));
    }

    #[test]
    fn missing_host_is_unlinked() {
        let outcome = AnnotationOutcome::decide(None, &CategoryLookupTable::default());
        assert_eq!(outcome, AnnotationOutcome::Unlinked);
        assert_eq!(outcome.result().category_label, NOT_LINKED);
        assert_eq!(outcome.result().mark_label.as_deref(), Some(NOT_LINKED));
    }
}
