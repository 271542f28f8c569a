//! Database error types.

use thiserror::Error;

/// Errors returned by the hotel, stay and guest stores.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connection or query failure
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique key already taken
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    /// Row rejected by a CHECK or foreign key constraint
    #[error("invalid {entity}: {message}")]
    Constraint {
        entity: &'static str,
        message: String,
    },
}

impl DatabaseError {
    /// Classify an error from an INSERT or UPDATE on `entity`.
    pub(crate) fn from_write(err: sqlx::Error, entity: &'static str, id: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity,
                    id: id.to_string(),
                };
            }
            if db_err.is_check_violation() || db_err.is_foreign_key_violation() {
                return DatabaseError::Constraint {
                    entity,
                    message: db_err.message().to_string(),
                };
            }
        }
        DatabaseError::Sqlx(err)
    }
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
