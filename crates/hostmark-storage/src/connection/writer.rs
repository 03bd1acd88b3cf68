//! Write transactions: BEGIN IMMEDIATE with rollback on early return.

use hostmark_core::errors::StorageError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Execute `f` inside a BEGIN IMMEDIATE transaction.
///
/// The write lock is taken at transaction start. If `f` returns `Err`, the
/// transaction is rolled back when it goes out of scope and the error is
/// returned unchanged.
pub fn with_immediate_transaction<F, T, E>(conn: &Connection, f: F) -> Result<T, E>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, E>,
    E: From<StorageError>,
{
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(|e| {
        StorageError::SqliteError {
            message: format!("failed to begin immediate transaction: {e}"),
        }
    })?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("failed to commit: {e}"),
    })?;

    Ok(result)
}
