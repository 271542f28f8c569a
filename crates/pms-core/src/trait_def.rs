//! The Pms trait definition.

use async_trait::async_trait;
use database::Stay;
use serde_json::{Map, Value};

use crate::error::PmsError;
use crate::payload;
use crate::types::BatchReport;

/// A property management system vendor.
///
/// Every vendor exposes the same capabilities; they differ in payload shape
/// and in how reservation data is fetched. This trait is object-safe and is
/// used as `Arc<dyn Pms>` in the registry.
#[async_trait]
pub trait Pms: Send + Sync {
    /// Vendor name used for lookup (e.g., "mews").
    fn name(&self) -> &str;

    /// Turn a raw webhook body into a JSON object.
    ///
    /// Never fails: empty or invalid bodies yield an empty map.
    fn clean_webhook_payload(&self, payload: &[u8]) -> Map<String, Value> {
        payload::clean_json_object(payload)
    }

    /// Handle a cleaned webhook body, reconciling every event it references.
    ///
    /// Returns an error when the batch as a whole cannot be processed (no
    /// hotel id, unknown hotel). Per-event failures are collected in the
    /// report instead.
    async fn handle_webhook(&self, webhook_data: &Map<String, Value>)
        -> Result<BatchReport, PmsError>;

    /// Reconcile all reservations checking in tomorrow.
    async fn update_tomorrows_stays(&self) -> Result<BatchReport, PmsError>;

    /// Whether the stay includes breakfast, or `None` if that cannot be
    /// determined.
    async fn stay_has_breakfast(&self, stay: &Stay) -> Option<bool>;
}
