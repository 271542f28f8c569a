//! Mews PMS integration.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use database::{hotel, Database, Hotel, Stay};
use pms_core::payload::{clean_json_array, from_map, parse_lenient};
use pms_core::{
    BatchReport, GuestDetails, PhoneValidation, Pms, PmsApi, PmsError, ReservationDetails,
    ReservationStub, WebhookPayload,
};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::reconciler::{Reconciled, Reconciler};

/// Mews webhook and sync handling.
///
/// Every reservation is reconciled on its own: a failing event is logged and
/// reported, and the remaining events of the batch are still processed.
pub struct Mews {
    api: Arc<dyn PmsApi>,
    db: Database,
    reconciler: Reconciler,
}

impl Mews {
    /// Create a Mews integration reading from `api` and writing to `db`.
    pub fn new(api: Arc<dyn PmsApi>, db: Database, phone_validation: PhoneValidation) -> Self {
        let reconciler = Reconciler::new(db.clone(), phone_validation);
        Self {
            api,
            db,
            reconciler,
        }
    }

    /// Reconcile all reservations checking in on `date`.
    ///
    /// Stubs without a reservation id or hotel id are skipped. Fails as a
    /// whole only when the reservation listing itself cannot be fetched.
    pub async fn update_stays_checking_in(&self, date: NaiveDate) -> Result<BatchReport, PmsError> {
        let end = date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| PmsError::MalformedPayload(format!("no day after {}", date)))?;

        let raw = self.api.get_reservations_between_dates(date, end).await?;
        let stubs = clean_json_array(raw.as_bytes());
        info!(%date, count = stubs.len(), "Updating stays checking in");

        let mut report = BatchReport::new();
        for item in stubs {
            let stub: ReservationStub = serde_json::from_value(item).unwrap_or_default();

            let (reservation_id, hotel_id) =
                match (non_blank(stub.reservation_id), non_blank(stub.hotel_id)) {
                    (Some(reservation_id), Some(hotel_id)) => (reservation_id, hotel_id),
                    (reservation_id, hotel_id) => {
                        info!(
                            ?reservation_id,
                            ?hotel_id,
                            "Skipping stay with missing information"
                        );
                        report.record_skip();
                        continue;
                    }
                };

            match self.sync_stub(&hotel_id, &reservation_id).await {
                Ok(_) => report.record_success(reservation_id),
                Err(e) => {
                    warn!(%hotel_id, %reservation_id, error = %e, "Failed to update stay");
                    report.record_failure(Some(reservation_id), e);
                }
            }
        }

        log_report("sync", &report);
        Ok(report)
    }

    async fn sync_stub(
        &self,
        hotel_id: &str,
        reservation_id: &str,
    ) -> Result<Reconciled, PmsError> {
        let hotel = hotel::get_hotel_by_pms_id(self.db.pool(), hotel_id).await?;
        self.process_reservation(&hotel, reservation_id).await
    }

    /// Fetch a reservation and its guest from the PMS and reconcile them.
    async fn process_reservation(
        &self,
        hotel: &Hotel,
        reservation_id: &str,
    ) -> Result<Reconciled, PmsError> {
        let raw = self.api.get_reservation_details(reservation_id).await?;
        let reservation: ReservationDetails = parse_lenient(raw.as_bytes())?;

        let guest_id = reservation
            .guest_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(PmsError::MissingField("GuestId"))?;

        let raw = self.api.get_guest_details(guest_id).await?;
        let guest: GuestDetails = parse_lenient(raw.as_bytes())?;

        self.reconciler
            .reconcile(hotel, reservation_id, &reservation, &guest)
            .await
    }
}

#[async_trait]
impl Pms for Mews {
    fn name(&self) -> &str {
        "mews"
    }

    async fn handle_webhook(
        &self,
        webhook_data: &Map<String, Value>,
    ) -> Result<BatchReport, PmsError> {
        let payload: WebhookPayload = from_map(webhook_data.clone())?;

        let hotel_id = non_blank(payload.hotel_id).ok_or(PmsError::MissingField("HotelId"))?;
        let hotel = hotel::get_hotel_by_pms_id(self.db.pool(), &hotel_id).await?;
        let events = payload.events.ok_or(PmsError::MissingField("Events"))?;

        info!(hotel = %hotel_id, events = events.len(), "Handling webhook");

        let mut report = BatchReport::new();
        for event in &events {
            let Some(reservation_id) = WebhookPayload::reservation_id(event) else {
                warn!(hotel = %hotel_id, "Event without ReservationId");
                report.record_failure(None, PmsError::MissingField("ReservationId"));
                continue;
            };

            match self.process_reservation(&hotel, reservation_id).await {
                Ok(_) => report.record_success(reservation_id),
                Err(e) => {
                    warn!(hotel = %hotel_id, reservation_id, error = %e, "Failed to process event");
                    report.record_failure(Some(reservation_id.to_string()), e);
                }
            }
        }

        log_report("webhook", &report);
        Ok(report)
    }

    async fn update_tomorrows_stays(&self) -> Result<BatchReport, PmsError> {
        let today = Local::now().date_naive();
        let tomorrow = today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| PmsError::MalformedPayload(format!("no day after {}", today)))?;
        self.update_stays_checking_in(tomorrow).await
    }

    async fn stay_has_breakfast(&self, stay: &Stay) -> Option<bool> {
        let raw = match self.api.get_reservation_details(&stay.pms_reservation_id).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    reservation_id = %stay.pms_reservation_id,
                    error = %e,
                    "Could not check breakfast"
                );
                return None;
            }
        };

        // An empty or unparsable body reads as a reservation without breakfast.
        match parse_lenient::<ReservationDetails>(raw.as_bytes()) {
            Ok(reservation) => Some(reservation.breakfast_included.unwrap_or(false)),
            Err(e) => {
                warn!(
                    reservation_id = %stay.pms_reservation_id,
                    error = %e,
                    "Unexpected breakfast flag"
                );
                None
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn log_report(kind: &str, report: &BatchReport) {
    let summary = report.summary();
    if report.is_success() {
        info!(
            kind,
            reconciled = summary.reconciled,
            skipped = summary.skipped,
            "Batch complete"
        );
    } else {
        warn!(
            kind,
            reconciled = summary.reconciled,
            skipped = summary.skipped,
            failed = summary.failed,
            errors = ?summary.errors,
            "Batch completed with failures"
        );
    }
}
