//! Document access errors.

use super::error_code::{self, HostmarkErrorCode};
use super::StorageError;
use crate::types::ElementId;

/// Errors raised by a `Document` implementation.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("element {id} not found")]
    ElementNotFound { id: ElementId },

    #[error("element {id} is not a reinforcement element")]
    NotAReinforcement { id: ElementId },

    #[error("host reference of {element} is unusable: {reason}")]
    CorruptReference { element: ElementId, reason: String },

    #[error("attribute '{name}' does not exist on {element}")]
    AttributeNotFound { element: ElementId, name: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DocumentError {
    /// The element this error is about, when there is one.
    pub fn element(&self) -> Option<ElementId> {
        match self {
            Self::ElementNotFound { id } | Self::NotAReinforcement { id } => Some(*id),
            Self::CorruptReference { element, .. } | Self::AttributeNotFound { element, .. } => {
                Some(*element)
            }
            Self::Storage(_) => None,
        }
    }
}

impl HostmarkErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ElementNotFound { .. } => error_code::ELEMENT_NOT_FOUND,
            Self::NotAReinforcement { .. } => error_code::NOT_A_REINFORCEMENT,
            Self::CorruptReference { .. } => error_code::CORRUPT_REFERENCE,
            Self::AttributeNotFound { .. } => error_code::ATTRIBUTE_NOT_FOUND,
            Self::Storage(e) => e.error_code(),
        }
    }
}
