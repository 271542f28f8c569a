//! Error types for PMS operations.

use database::DatabaseError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the external PMS API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested reservation or guest does not exist in the PMS.
    #[error("not found in PMS: {0}")]
    NotFound(String),

    /// The PMS could not be reached or refused the call.
    #[error("PMS unavailable: {0}")]
    Unavailable(String),

    /// The PMS answered with something that is not usable.
    #[error("malformed PMS response: {0}")]
    Malformed(String),
}

/// Errors that can occur while handling webhooks and syncs.
#[derive(Debug, Error)]
pub enum PmsError {
    /// A required key is absent (hotel id, reservation id, phone, name, ...).
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A payload could not be interpreted.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A call to the PMS API failed.
    #[error("external API error: {0}")]
    ExternalApi(#[from] ApiError),

    /// A referenced record does not exist locally.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A field is present but invalid.
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    /// Storage failure.
    #[error(transparent)]
    Database(DatabaseError),
}

impl From<ValidationError> for PmsError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Missing(field) => PmsError::MissingField(field),
            other => PmsError::Validation(other),
        }
    }
}

impl From<DatabaseError> for PmsError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { entity, id } => PmsError::NotFound { entity, id },
            other => PmsError::Database(other),
        }
    }
}

/// Result type for PMS operations.
pub type Result<T> = std::result::Result<T, PmsError>;
