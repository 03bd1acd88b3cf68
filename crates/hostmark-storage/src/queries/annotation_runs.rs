//! Queries for the annotation_runs history table.

use hostmark_core::errors::StorageError;
use rusqlite::{params, Connection};

pub const STATUS_COMMITTED: &str = "committed";
pub const STATUS_ROLLED_BACK: &str = "rolled_back";

#[derive(Debug, Clone)]
pub struct AnnotationRunRow {
    pub id: i64,
    pub transaction_name: String,
    pub started_at: i64,
    pub write_count: i64,
    pub status: String,
    pub error: Option<String>,
}

pub fn insert(
    conn: &Connection,
    transaction_name: &str,
    write_count: usize,
    status: &str,
    error: Option<&str>,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO annotation_runs (transaction_name, write_count, status, error)
         VALUES (?1, ?2, ?3, ?4)",
        params![transaction_name, write_count as i64, status, error],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(conn.last_insert_rowid())
}

/// Most recent runs first.
pub fn query_recent(conn: &Connection, limit: usize) -> Result<Vec<AnnotationRunRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, transaction_name, started_at, write_count, status, error
             FROM annotation_runs ORDER BY id DESC LIMIT ?1",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(AnnotationRunRow {
                id: row.get(0)?,
                transaction_name: row.get(1)?,
                started_at: row.get(2)?,
                write_count: row.get(3)?,
                status: row.get(4)?,
                error: row.get(5)?,
            })
        })
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
