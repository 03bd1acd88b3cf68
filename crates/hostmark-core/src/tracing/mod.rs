//! Tracing setup for hostmark.

pub mod setup;

pub use setup::init_tracing;
