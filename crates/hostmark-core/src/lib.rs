//! # hostmark-core
//!
//! Foundation crate for host metadata propagation.
//! Defines element types, the `Document` seam, errors, config, events,
//! tracing setup and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::HostmarkConfig;
pub use errors::{AnnotationError, DocumentError};
pub use traits::Document;
pub use types::{AttributeWrite, Category, ElementId, HostElement, ReinforcementElement};
