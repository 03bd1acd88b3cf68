//! Queries for the element_attributes table.

use hostmark_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

/// Add `name` to an element's schema with no value.
pub fn define(conn: &Connection, element_id: i64, name: &str) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR IGNORE INTO element_attributes (element_id, name, value)
         VALUES (?1, ?2, NULL)",
        params![element_id, name],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

/// `None` when the attribute is not in the schema, `Some(value)` otherwise.
pub fn get_value(
    conn: &Connection,
    element_id: i64,
    name: &str,
) -> Result<Option<Option<String>>, StorageError> {
    conn.prepare_cached(
        "SELECT value FROM element_attributes WHERE element_id = ?1 AND name = ?2",
    )
    .and_then(|mut stmt| {
        stmt.query_row(params![element_id, name], |row| row.get(0))
            .optional()
    })
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Overwrite an existing attribute. Returns the number of rows touched;
/// zero means the attribute is not in the element's schema.
pub fn update_value(
    conn: &Connection,
    element_id: i64,
    name: &str,
    value: Option<&str>,
) -> Result<usize, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "UPDATE element_attributes SET value = ?3 WHERE element_id = ?1 AND name = ?2",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    stmt.execute(params![element_id, name, value])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
