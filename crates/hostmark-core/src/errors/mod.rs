//! Error handling for hostmark.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod annotation_error;
pub mod config_error;
pub mod document_error;
pub mod error_code;
pub mod storage_error;

pub use annotation_error::AnnotationError;
pub use config_error::ConfigError;
pub use document_error::DocumentError;
pub use error_code::HostmarkErrorCode;
pub use storage_error::StorageError;
