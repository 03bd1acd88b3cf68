//! Storage-layer errors for SQLite operations.

use super::error_code::{self, HostmarkErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("database corruption detected: {details}")]
    CorruptionDetected { details: String },
}

impl HostmarkErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::CorruptionDetected { .. } => error_code::DB_CORRUPT,
        }
    }
}
