//! PMS vendor implementations, reservation reconciler and vendor registry.
//!
//! This crate provides a [`PmsRegistry`] for looking up PMS implementations
//! by vendor name, and the implementations themselves. Each implementation
//! fetches reservation and guest data through a [`pms_core::PmsApi`] and
//! hands it to the [`Reconciler`], which validates it and upserts the Stay and
//! Guest rows in one transaction.
//!
//! # Vendors
//!
//! - [`Mews`] - webhook events of the form `{"HotelId", "Events": [{"Value": {"ReservationId"}}]}`
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pms_systems::default_registry;
//! use pms_core::PhoneValidation;
//!
//! let registry = default_registry(db, Arc::new(api), PhoneValidation::Strict);
//! let pms = registry.get("mews").unwrap();
//!
//! let payload = pms.clean_webhook_payload(body);
//! let report = pms.handle_webhook(&payload).await?;
//! assert!(report.is_success());
//! ```

mod mews;
mod reconciler;
mod registry;

pub use mews::Mews;
pub use reconciler::{Reconciled, Reconciler};
pub use registry::PmsRegistry;

use std::sync::Arc;

use database::Database;
use pms_core::{PhoneValidation, PmsApi};

/// Create a registry with all built-in vendors registered.
pub fn default_registry(
    db: Database,
    api: Arc<dyn PmsApi>,
    phone_validation: PhoneValidation,
) -> PmsRegistry {
    let mut registry = PmsRegistry::new();

    registry.register(Mews::new(api, db, phone_validation));

    registry
}
