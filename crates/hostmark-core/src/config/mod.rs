//! Configuration system for hostmark.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod annotation_config;
pub mod hostmark_config;
pub mod storage_config;

pub use annotation_config::AnnotationConfig;
pub use hostmark_config::{CliOverrides, HostmarkConfig};
pub use storage_config::StorageConfig;
