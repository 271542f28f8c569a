//! The external PMS API consumed by vendor implementations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ApiError;

/// Read access to a PMS.
///
/// Responses are the raw JSON bodies the PMS returns; parsing is left to the
/// vendor implementation, which treats malformed bodies as empty.
#[async_trait]
pub trait PmsApi: Send + Sync {
    /// List reservations checking in between `start` (inclusive) and `end`
    /// (exclusive), as a JSON array of `{"ReservationId", "HotelId"}` stubs.
    async fn get_reservations_between_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, ApiError>;

    /// Fetch a reservation as a JSON object.
    async fn get_reservation_details(&self, reservation_id: &str) -> Result<String, ApiError>;

    /// Fetch a guest as a JSON object.
    async fn get_guest_details(&self, guest_id: &str) -> Result<String, ApiError>;
}
