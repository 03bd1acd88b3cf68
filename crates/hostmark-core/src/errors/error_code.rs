//! HostmarkErrorCode trait for structured error reporting at the command boundary.

/// Every error enum implements this to provide a stable error code string
/// alongside its human-readable message.
pub trait HostmarkErrorCode {
    /// Returns the error code string (e.g., "ATTRIBUTE_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const ELEMENT_NOT_FOUND: &str = "ELEMENT_NOT_FOUND";
pub const NOT_A_REINFORCEMENT: &str = "NOT_A_REINFORCEMENT";
pub const CORRUPT_REFERENCE: &str = "CORRUPT_REFERENCE";
pub const ATTRIBUTE_NOT_FOUND: &str = "ATTRIBUTE_NOT_FOUND";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const DB_CORRUPT: &str = "DB_CORRUPT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
