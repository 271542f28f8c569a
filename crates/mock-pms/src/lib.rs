//! In-memory PMS API for tests and local runs.
//!
//! [`MockPmsApi`] implements [`pms_core::PmsApi`] on top of in-memory maps.
//! It can be filled programmatically or loaded from a JSON fixture file, and
//! supports failure injection for exercising error paths.
//!
//! For a real vendor, implement [`pms_core::PmsApi`] against its HTTP API.
//!
//! # Example
//!
//! ```rust
//! use mock_pms::MockPmsApi;
//! use pms_core::PmsApi;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = MockPmsApi::new();
//!     api.insert_guest("g1", json!({"Name": "Jan", "Phone": "+31612345678"})).await;
//!
//!     let body = api.get_guest_details("g1").await.unwrap();
//!     assert!(body.contains("Jan"));
//! }
//! ```

mod api;
mod error;

pub use api::{Arrival, Fixtures, MockPmsApi};
pub use error::FixtureError;
