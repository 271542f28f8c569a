//! Route handlers for the webhook server.

pub mod health;
pub mod hotels;
pub mod stats;
pub mod webhook;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // PMS endpoints, with and without trailing slash
        .route("/webhook/:pms_name", post(webhook::receive_webhook))
        .route("/webhook/:pms_name/", post(webhook::receive_webhook))
        .route("/sync/:pms_name", post(webhook::run_sync))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/stats", get(stats::stats_api))
        .route("/api/hotels", get(hotels::list_hotels).post(hotels::create_hotel))
        .route("/api/stays/:stay_id/breakfast", get(hotels::stay_breakfast))
}
