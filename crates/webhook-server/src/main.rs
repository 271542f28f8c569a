//! HTTP service receiving PMS webhooks and running the nightly stay sync.
//!
//! Webhooks arrive at `/webhook/<pms>/`; every referenced reservation is
//! fetched from the PMS and reconciled into the Stay and Guest tables.

mod config;
mod error;
mod routes;
mod scheduler;
mod state;

use std::sync::Arc;

use database::Database;
use mock_pms::MockPmsApi;
use pms_core::PmsApi;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting webhook server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // PMS API
    let api: Arc<dyn PmsApi> = match &config.fixtures_path {
        Some(path) => {
            info!(path = %path.display(), "Loading PMS fixtures");
            Arc::new(MockPmsApi::load(path)?)
        }
        None => Arc::new(MockPmsApi::new()),
    };

    let registry = Arc::new(pms_systems::default_registry(
        db.clone(),
        api,
        config.phone_validation,
    ));
    info!(
        pms = ?registry.names(),
        phone_validation = ?config.phone_validation,
        "PMS registry ready"
    );

    if config.nightly_sync {
        scheduler::spawn_nightly_sync(registry.clone());
    }

    // Build application state
    let state = AppState::new(db, registry);

    // Build router
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Webhook server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
