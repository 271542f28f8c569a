//! In-memory PMS API.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use pms_core::{ApiError, PmsApi};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::FixtureError;

/// A reservation listed by date, as stored in the mock.
#[derive(Debug, Clone, Deserialize)]
pub struct Arrival {
    /// Check-in date used for date-range queries.
    pub check_in: NaiveDate,
    /// Stub returned to callers, normally `{"ReservationId", "HotelId"}`.
    pub stub: Value,
}

/// Fixture file contents.
///
/// ```json
/// {
///     "reservations": {"r-1": {"GuestId": "g-1", "CheckInDate": "2024-05-01", ...}},
///     "guests": {"g-1": {"Name": "Jan", "Phone": "+31612345678", "Country": "nl"}},
///     "arrivals": [{"check_in": "2024-05-01", "stub": {"ReservationId": "r-1", "HotelId": "h-1"}}]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub reservations: HashMap<String, Value>,
    pub guests: HashMap<String, Value>,
    pub arrivals: Vec<Arrival>,
}

#[derive(Debug, Default)]
struct State {
    reservations: HashMap<String, String>,
    guests: HashMap<String, String>,
    arrivals: Vec<Arrival>,
    failing: HashSet<String>,
    unavailable: bool,
}

/// A [`PmsApi`] backed by in-memory maps.
///
/// Bodies are stored as raw strings so tests can serve malformed JSON.
/// Ids registered with [`MockPmsApi::fail_on`] answer with
/// [`ApiError::Unavailable`].
#[derive(Debug, Default)]
pub struct MockPmsApi {
    state: RwLock<State>,
}

impl MockPmsApi {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-populated from fixtures.
    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        let state = State {
            reservations: fixtures
                .reservations
                .into_iter()
                .map(|(id, body)| (id, body.to_string()))
                .collect(),
            guests: fixtures
                .guests
                .into_iter()
                .map(|(id, body)| (id, body.to_string()))
                .collect(),
            arrivals: fixtures.arrivals,
            ..State::default()
        };

        Self {
            state: RwLock::new(state),
        }
    }

    /// Load fixtures from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = std::fs::read_to_string(path)?;
        let fixtures: Fixtures = serde_json::from_str(&contents)?;
        Ok(Self::from_fixtures(fixtures))
    }

    /// Add or replace a reservation.
    pub async fn insert_reservation(&self, reservation_id: impl Into<String>, details: Value) {
        self.insert_raw_reservation(reservation_id, details.to_string())
            .await;
    }

    /// Add or replace a reservation with a raw response body.
    pub async fn insert_raw_reservation(
        &self,
        reservation_id: impl Into<String>,
        body: impl Into<String>,
    ) {
        let mut state = self.state.write().await;
        state.reservations.insert(reservation_id.into(), body.into());
    }

    /// Add or replace a guest.
    pub async fn insert_guest(&self, guest_id: impl Into<String>, details: Value) {
        let mut state = self.state.write().await;
        state.guests.insert(guest_id.into(), details.to_string());
    }

    /// Add a reservation stub listed under the given check-in date.
    pub async fn insert_arrival(&self, check_in: NaiveDate, stub: Value) {
        let mut state = self.state.write().await;
        state.arrivals.push(Arrival { check_in, stub });
    }

    /// Make every call for this reservation or guest id fail.
    pub async fn fail_on(&self, id: impl Into<String>) {
        let mut state = self.state.write().await;
        state.failing.insert(id.into());
    }

    /// Make every call fail (or succeed again).
    pub async fn set_unavailable(&self, unavailable: bool) {
        let mut state = self.state.write().await;
        state.unavailable = unavailable;
    }
}

impl State {
    fn check(&self, id: &str) -> Result<(), ApiError> {
        if self.unavailable {
            return Err(ApiError::Unavailable("mock PMS is down".to_string()));
        }
        if self.failing.contains(id) {
            return Err(ApiError::Unavailable(format!("injected failure for {}", id)));
        }
        Ok(())
    }
}

#[async_trait]
impl PmsApi for MockPmsApi {
    async fn get_reservations_between_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, ApiError> {
        let state = self.state.read().await;
        state.check("")?;

        let stubs: Vec<&Value> = state
            .arrivals
            .iter()
            .filter(|a| a.check_in >= start && a.check_in < end)
            .map(|a| &a.stub)
            .collect();

        debug!(%start, %end, count = stubs.len(), "Listing reservations");
        serde_json::to_string(&stubs).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn get_reservation_details(&self, reservation_id: &str) -> Result<String, ApiError> {
        let state = self.state.read().await;
        state.check(reservation_id)?;

        state
            .reservations
            .get(reservation_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("reservation {}", reservation_id)))
    }

    async fn get_guest_details(&self, guest_id: &str) -> Result<String, ApiError> {
        let state = self.state.read().await;
        state.check(guest_id)?;

        state
            .guests
            .get(guest_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("guest {}", guest_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[tokio::test]
    async fn test_reservation_lookup() {
        let api = MockPmsApi::new();
        api.insert_reservation("r-1", json!({"GuestId": "g-1"})).await;

        let body = api.get_reservation_details("r-1").await.unwrap();
        assert_eq!(body, r#"{"GuestId":"g-1"}"#);

        let missing = api.get_reservation_details("r-2").await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_arrivals_filtered_by_range() {
        let api = MockPmsApi::new();
        api.insert_arrival(date(1), json!({"ReservationId": "r-1"})).await;
        api.insert_arrival(date(2), json!({"ReservationId": "r-2"})).await;
        api.insert_arrival(date(3), json!({"ReservationId": "r-3"})).await;

        let body = api
            .get_reservations_between_dates(date(2), date(3))
            .await
            .unwrap();
        assert_eq!(body, r#"[{"ReservationId":"r-2"}]"#);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let api = MockPmsApi::new();
        api.insert_guest("g-1", json!({"Name": "Jan"})).await;
        api.fail_on("g-1").await;
        assert!(matches!(
            api.get_guest_details("g-1").await,
            Err(ApiError::Unavailable(_))
        ));

        api.set_unavailable(true).await;
        assert!(api
            .get_reservations_between_dates(date(1), date(2))
            .await
            .is_err());
    }

    #[test]
    fn test_fixtures_shape() {
        let fixtures: Fixtures = serde_json::from_value(json!({
            "guests": {"g-1": {"Name": "Jan"}},
            "arrivals": [{"check_in": "2024-05-01", "stub": {"ReservationId": "r-1"}}]
        }))
        .unwrap();

        assert!(fixtures.reservations.is_empty());
        assert_eq!(fixtures.arrivals[0].check_in, date(1));
    }
}
