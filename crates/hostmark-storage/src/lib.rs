//! # hostmark-storage
//!
//! Document models implementing `hostmark_core::Document`:
//! an in-memory document with undo-log transactions, and a SQLite-backed
//! document with migrations and `BEGIN IMMEDIATE` atomic writes.

pub mod connection;
pub mod memory;
pub mod migrations;
pub mod queries;
pub mod sqlite_document;

pub use memory::{DocumentTransaction, InMemoryDocument};
pub use sqlite_document::SqliteDocument;
