//! Queries for the elements table.

use hostmark_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

pub const KIND_HOST: &str = "host";
pub const KIND_REINFORCEMENT: &str = "reinforcement";

/// A raw element row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRow {
    pub id: i64,
    pub kind: String,
    pub category: Option<String>,
    pub mark: Option<String>,
    pub host_id: Option<i64>,
}

/// Insert a host element. `category` is stored as given, known or not.
pub fn insert_host(
    conn: &Connection,
    category: Option<&str>,
    mark: Option<&str>,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO elements (kind, category, mark) VALUES (?1, ?2, ?3)",
        params![KIND_HOST, category, mark],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(conn.last_insert_rowid())
}

/// Insert a reinforcement element.
pub fn insert_reinforcement(conn: &Connection, host_id: Option<i64>) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO elements (kind, host_id) VALUES (?1, ?2)",
        params![KIND_REINFORCEMENT, host_id],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(conn.last_insert_rowid())
}

pub fn get(conn: &Connection, id: i64) -> Result<Option<ElementRow>, StorageError> {
    conn.prepare_cached(
        "SELECT id, kind, category, mark, host_id FROM elements WHERE id = ?1",
    )
    .and_then(|mut stmt| stmt.query_row(params![id], map_row).optional())
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Every reinforcement element, ordered by id.
pub fn query_reinforcements(conn: &Connection) -> Result<Vec<ElementRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, kind, category, mark, host_id FROM elements
             WHERE kind = ?1 ORDER BY id ASC",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![KIND_REINFORCEMENT], map_row)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

pub fn update_host(
    conn: &Connection,
    id: i64,
    category: Option<&str>,
    mark: Option<&str>,
) -> Result<usize, StorageError> {
    conn.execute(
        "UPDATE elements SET category = ?2, mark = ?3 WHERE id = ?1 AND kind = ?4",
        params![id, category, mark, KIND_HOST],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

pub fn delete(conn: &Connection, id: i64) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM elements WHERE id = ?1", params![id])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ElementRow> {
    Ok(ElementRow {
        id: row.get(0)?,
        kind: row.get(1)?,
        category: row.get(2)?,
        mark: row.get(3)?,
        host_id: row.get(4)?,
    })
}
