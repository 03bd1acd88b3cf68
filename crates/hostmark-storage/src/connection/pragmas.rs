//! PRAGMA configuration applied to every SQLite connection.

use hostmark_core::errors::StorageError;
use rusqlite::Connection;

/// WAL journal, NORMAL sync, foreign keys on, caller-chosen busy timeout.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> Result<(), StorageError> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA temp_store = MEMORY;
        "
    ))
    .map_err(|e| StorageError::SqliteError {
        message: format!("failed to apply pragmas: {e}"),
    })
}

/// Run `PRAGMA integrity_check` and fail unless it reports `ok`.
pub fn verify_integrity(conn: &Connection) -> Result<(), StorageError> {
    let result: String = conn
        .pragma_query_value(None, "integrity_check", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    if result.eq_ignore_ascii_case("ok") {
        Ok(())
    } else {
        Err(StorageError::CorruptionDetected { details: result })
    }
}
