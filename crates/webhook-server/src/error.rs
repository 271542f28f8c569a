//! Error types for the webhook server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use database::DatabaseError;
use pms_core::PmsError;
use thiserror::Error;

/// Errors that can occur while serving requests.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No PMS registered under this name.
    #[error("Unknown PMS: {0}")]
    UnknownPms(String),

    /// Database error.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Webhook or sync could not be processed.
    #[error("{0}")]
    Pms(#[from] PmsError),

    /// Request body is invalid.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::UnknownPms(_) => StatusCode::NOT_FOUND,
            ServerError::Database(DatabaseError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ServerError::Database(DatabaseError::AlreadyExists { .. }) => StatusCode::CONFLICT,
            ServerError::Database(_) | ServerError::Pms(PmsError::Database(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::Pms(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, ServerError>;
