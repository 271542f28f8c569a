//! Core traits and types for PMS reservation sync.
//!
//! This crate provides the shared interface between PMS vendor
//! implementations and the services that drive them. It defines:
//!
//! - [`Pms`] - The trait every PMS vendor implements
//! - [`PmsApi`] - The external API a vendor fetches reservation data from
//! - [`WebhookPayload`], [`ReservationDetails`], [`GuestDetails`] - Wire types
//! - [`PmsError`] - The error taxonomy, and [`BatchReport`] for per-event outcomes
//! - Validation helpers for phone numbers, names and dates, and the
//!   country to [`Language`] mapping
//!
//! # Example
//!
//! ```rust
//! use pms_core::{language_for_country, validate_phone, Language, PhoneValidation};
//!
//! assert_eq!(language_for_country(Some("de")), Language::German);
//! assert!(validate_phone(Some("+31612345678"), PhoneValidation::Strict).is_ok());
//! ```

mod api;
mod error;
mod language;
pub mod payload;
mod trait_def;
mod types;
mod validation;

pub use api::PmsApi;
pub use error::{ApiError, PmsError, Result};
pub use language::{language_for_country, Language, COUNTRY_LANGUAGES};
pub use trait_def::Pms;
pub use types::{
    BatchReport, BatchSummary, EventFailure, GuestDetails, ReservationDetails, ReservationStub,
    WebhookPayload,
};
pub use validation::{parse_date, validate_name, validate_phone, PhoneValidation, ValidationError};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
