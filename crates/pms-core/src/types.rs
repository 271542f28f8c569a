//! Wire types exchanged with the PMS and the reports returned to callers.
//!
//! Field names follow the PMS's PascalCase JSON. Every field is optional:
//! PMS data is frequently incomplete and missing values are reported as
//! [`PmsError::MissingField`] where they matter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PmsError;

/// Inbound webhook body.
///
/// ```json
/// {
///     "HotelId": "851df8c8-90f2-4c4a-8e01-a4fc46b25178",
///     "IntegrationId": "c8bee838-7fb1-4f4e-8fac-ac87008b2f90",
///     "Events": [
///         {"Name": "ReservationUpdated", "Value": {"ReservationId": "5a9469b7-..."}}
///     ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebhookPayload {
    pub hotel_id: Option<String>,
    pub integration_id: Option<String>,
    /// Kept as raw values so one malformed event cannot reject the batch.
    pub events: Option<Vec<Value>>,
}

impl WebhookPayload {
    /// Extract `Value.ReservationId` from a raw event, if present and non-blank.
    pub fn reservation_id(event: &Value) -> Option<&str> {
        event
            .get("Value")?
            .get("ReservationId")?
            .as_str()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Entry returned when listing reservations by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationStub {
    pub reservation_id: Option<String>,
    pub hotel_id: Option<String>,
}

/// Full reservation as returned by the PMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationDetails {
    pub guest_id: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub status: Option<String>,
    pub breakfast_included: Option<bool>,
}

/// Guest as returned by the PMS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuestDetails {
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Country or locale code (e.g., "nl", "de-AT").
    pub country: Option<String>,
}

/// One reservation that could not be reconciled.
#[derive(Debug)]
pub struct EventFailure {
    /// Reservation id, when the event carried one.
    pub reservation_id: Option<String>,
    pub error: PmsError,
}

/// Outcome of a webhook batch or sync run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Reservation ids reconciled successfully.
    pub reconciled: Vec<String>,
    /// Entries skipped because they lacked identifying data.
    pub skipped: usize,
    /// Entries that failed; their writes were rolled back.
    pub failures: Vec<EventFailure>,
}

impl BatchReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully reconciled reservation.
    pub fn record_success(&mut self, reservation_id: impl Into<String>) {
        self.reconciled.push(reservation_id.into());
    }

    /// Record a skipped entry.
    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Record a failed reservation.
    pub fn record_failure(&mut self, reservation_id: Option<String>, error: PmsError) {
        self.failures.push(EventFailure {
            reservation_id,
            error,
        });
    }

    /// True when no entry failed. Skips do not count as failures.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Serializable summary for API responses and logs.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            reconciled: self.reconciled.len(),
            skipped: self.skipped,
            failed: self.failures.len(),
            errors: self
                .failures
                .iter()
                .map(|f| match &f.reservation_id {
                    Some(id) => format!("{}: {}", id, f.error),
                    None => f.error.to_string(),
                })
                .collect(),
        }
    }
}

/// Counts and error messages of a [`BatchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub reconciled: usize,
    pub skipped: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_payload_shape() {
        let payload: WebhookPayload = serde_json::from_value(json!({
            "HotelId": "h-1",
            "Events": [
                {"Name": "ReservationUpdated", "Value": {"ReservationId": "r-1"}},
                {"Name": "ReservationUpdated", "Value": {}},
                "garbage"
            ]
        }))
        .unwrap();

        assert_eq!(payload.hotel_id.as_deref(), Some("h-1"));
        let ids: Vec<_> = payload
            .events
            .unwrap()
            .iter()
            .map(|e| WebhookPayload::reservation_id(e).map(str::to_string))
            .collect();
        assert_eq!(ids, vec![Some("r-1".to_string()), None, None]);
    }

    #[test]
    fn test_reservation_details_shape() {
        let details: ReservationDetails = serde_json::from_value(json!({
            "GuestId": "g1",
            "CheckInDate": "2024-05-01",
            "CheckOutDate": "2024-05-03",
            "Status": "Confirmed",
            "BreakfastIncluded": true,
            "Unrelated": 1
        }))
        .unwrap();

        assert_eq!(details.guest_id.as_deref(), Some("g1"));
        assert_eq!(details.breakfast_included, Some(true));
    }

    #[test]
    fn test_report_summary() {
        let mut report = BatchReport::new();
        report.record_success("r-1");
        report.record_skip();
        assert!(report.is_success());

        report.record_failure(Some("r-2".to_string()), PmsError::MissingField("Phone"));
        report.record_failure(None, PmsError::MissingField("ReservationId"));
        assert!(!report.is_success());

        let summary = report.summary();
        assert_eq!(summary.reconciled, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(
            summary.errors,
            vec![
                "r-2: missing field: Phone".to_string(),
                "missing field: ReservationId".to_string()
            ]
        );
    }
}
