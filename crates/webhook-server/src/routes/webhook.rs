//! PMS webhook and manual sync routes.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use crate::error::{Result, ServerError};
use crate::state::AppState;

/// Receive a webhook from a PMS.
///
/// Responds 200 once every event was reconciled, 400 with a summary when
/// some events failed.
pub async fn receive_webhook(
    State(state): State<AppState>,
    Path(pms_name): Path<String>,
    body: Bytes,
) -> Result<Response> {
    let pms = state
        .registry
        .get(&pms_name)
        .ok_or_else(|| ServerError::UnknownPms(pms_name.clone()))?;

    info!(pms = %pms_name, bytes = body.len(), "Webhook received");

    let payload = pms.clean_webhook_payload(&body);
    let report = pms.handle_webhook(&payload).await?;

    if report.is_success() {
        Ok((StatusCode::OK, "Thanks for the update.").into_response())
    } else {
        Ok((StatusCode::BAD_REQUEST, Json(report.summary())).into_response())
    }
}

/// Run tomorrow's sync for one PMS immediately.
pub async fn run_sync(
    State(state): State<AppState>,
    Path(pms_name): Path<String>,
) -> Result<Response> {
    let pms = state
        .registry
        .get(&pms_name)
        .ok_or_else(|| ServerError::UnknownPms(pms_name.clone()))?;

    info!(pms = %pms_name, "Manual sync requested");

    let report = pms.update_tomorrows_stays().await?;
    let status = if report.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    Ok((status, Json(report.summary())).into_response())
}
