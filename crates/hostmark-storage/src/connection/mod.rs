//! Connection setup: open, apply pragmas, run migrations.

pub mod pragmas;
pub mod writer;

use std::path::Path;

use hostmark_core::config::StorageConfig;
use hostmark_core::errors::StorageError;
use rusqlite::Connection;

use self::pragmas::apply_pragmas;
use crate::migrations;

/// Open a database file, apply pragmas, run migrations.
pub fn open(path: &Path, config: &StorageConfig) -> Result<Connection, StorageError> {
    let conn = Connection::open(path).map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    prepare(conn, config)
}

/// Open an in-memory database (for testing).
pub fn open_in_memory(config: &StorageConfig) -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    prepare(conn, config)
}

fn prepare(conn: Connection, config: &StorageConfig) -> Result<Connection, StorageError> {
    apply_pragmas(&conn, config.effective_busy_timeout_ms())?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}
