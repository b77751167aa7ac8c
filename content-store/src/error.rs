/// Error types for the content store
use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

/// Classify driver errors so `?` in repositories surfaces constraint
/// failures as their own variants.
///
/// PostgreSQL unique violations (23505) become `Conflict`; referential
/// integrity violations (23503) become `ForeignKey`, whether raised by
/// an insert with a dangling reference or a delete that dependents
/// still restrict.
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unique constraint");
                tracing::debug!(constraint, "unique violation");
                return StoreError::Conflict(constraint.to_string());
            }
            if db_err.is_foreign_key_violation() {
                let constraint = db_err.constraint().unwrap_or("foreign key");
                tracing::debug!(constraint, "foreign key violation");
                return StoreError::ForeignKey(constraint.to_string());
            }
        }
        StoreError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_pass_through() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_display_includes_context() {
        let err = StoreError::Validation("title must be 1-255 characters".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: title must be 1-255 characters"
        );

        let err = StoreError::NotFound("post 42".to_string());
        assert_eq!(err.to_string(), "Not found: post 42");
    }
}
