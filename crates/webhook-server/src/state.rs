//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use pms_systems::PmsRegistry;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Registered PMS vendors.
    pub registry: Arc<PmsRegistry>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, registry: Arc<PmsRegistry>) -> Self {
        Self { db, registry }
    }
}
