//! Registry reconciliation error types
//!
//! A reconciliation pass has exactly one way to fail: the persistence layer
//! rejected a read or a write. The error is never handled locally; it aborts
//! the pass and the enclosing transaction rolls back.
//!
//! # Examples
//!
//! ```rust
//! use pipeline_registry::errors::ReconcileError;
//! use sea_orm::DbErr;
//!
//! let err = ReconcileError::from(DbErr::Custom("disk I/O error".to_string()));
//! assert_eq!(err.error_code(), "DATABASE_ERROR");
//! ```

use sea_orm::DbErr;
use thiserror::Error;

/// Registry reconciliation errors
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// Lookup, constraint violation, or lost connection
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ReconcileError {
    /// Get error code for CLI and log output
    pub fn error_code(&self) -> &'static str {
        match self {
            ReconcileError::Database(_) => "DATABASE_ERROR",
        }
    }
}

// Migrations speak `DbErr`; surface the original error unchanged where possible.
impl From<ReconcileError> for DbErr {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::Database(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = ReconcileError::from(DbErr::Custom("constraint failed".to_string()));
        let message = err.to_string();
        assert!(message.starts_with("Database error: "));
        assert!(message.contains("constraint failed"));
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_converts_back_into_db_err() {
        let err = ReconcileError::Database(DbErr::RecordNotFound("s1".to_string()));
        let db_err: DbErr = err.into();
        assert!(matches!(db_err, DbErr::RecordNotFound(id) if id == "s1"));
    }
}
