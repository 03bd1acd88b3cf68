//! Seams implemented outside this crate.

pub mod document;

pub use document::Document;
