//! Annotation pass errors.

use super::error_code::HostmarkErrorCode;
use super::{ConfigError, DocumentError, StorageError};
use crate::types::ElementId;

/// Errors that abort an annotation pass.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AnnotationError {
    /// Elements implicated in the failure, for reporting back to the caller.
    pub fn elements(&self) -> Vec<ElementId> {
        match self {
            Self::Document(e) => e.element().into_iter().collect(),
            Self::Storage(_) | Self::Config(_) => Vec::new(),
        }
    }
}

impl HostmarkErrorCode for AnnotationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Document(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
