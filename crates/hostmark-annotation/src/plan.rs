//! Computed, not yet applied, annotations for a whole document.

use hostmark_core::events::types::OutcomeKind;
use hostmark_core::types::{AttributeWrite, ElementId};
use serde::Serialize;

use crate::outcome::{AnnotationOutcome, AnnotationResult};
use crate::pass::AttributeNames;

/// One element's planned annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedAnnotation {
    pub element: ElementId,
    pub outcome: AnnotationOutcome,
    pub result: AnnotationResult,
}

/// A host reference that could not be followed and was treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostFault {
    pub element: ElementId,
    pub error_code: &'static str,
    pub message: String,
}

/// Every element's annotation, in document order, plus tolerated faults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationPlan {
    pub entries: Vec<PlannedAnnotation>,
    pub host_faults: Vec<HostFault>,
}

impl AnnotationPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.kind() == kind)
            .count()
    }

    pub fn get(&self, element: ElementId) -> Option<&PlannedAnnotation> {
        self.entries.iter().find(|e| e.element == element)
    }

    /// Two writes per element, category label first, then mark.
    pub fn writes(&self, names: &AttributeNames) -> Vec<AttributeWrite> {
        self.entries
            .iter()
            .flat_map(|entry| {
                [
                    AttributeWrite::new(
                        entry.element,
                        names.category.as_str(),
                        Some(entry.result.category_label.clone()),
                    ),
                    AttributeWrite::new(
                        entry.element,
                        names.mark.as_str(),
                        entry.result.mark_label.clone(),
                    ),
                ]
            })
            .collect()
    }
}
