//! # Store Errors
//!
//! The store has exactly one failure category as far as callers are
//! concerned: the query did not complete. Variants only exist to keep the
//! underlying cause in logs.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver, connection, pool or statement failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// In-memory store lock was poisoned by a panicking writer
    #[error("Store lock poisoned")]
    Poisoned,

    /// Failure injected or reported by a non-SQL backend
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_unavailable_display() {
        let err = StoreError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "Store unavailable: connection refused");
    }
}
