//! Turns PMS reservation and guest data into Stay and Guest rows.

use database::{guest, stay, Database, DatabaseError, Guest, GuestUpsert, Hotel, Stay, StayUpsert};
use pms_core::{
    language_for_country, parse_date, validate_name, validate_phone, GuestDetails, PhoneValidation,
    PmsError, ReservationDetails,
};
use tracing::debug;

/// Rows written for one reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub stay: Stay,
    pub guest: Guest,
}

/// Validates PMS data and upserts the Stay and Guest for one reservation.
///
/// All validation happens before any write. The writes themselves run in a
/// single transaction: either the stay, the guest and the link between them
/// are committed together, or nothing is.
#[derive(Debug, Clone)]
pub struct Reconciler {
    db: Database,
    phone_validation: PhoneValidation,
}

impl Reconciler {
    /// Create a reconciler writing to `db`.
    pub fn new(db: Database, phone_validation: PhoneValidation) -> Self {
        Self {
            db,
            phone_validation,
        }
    }

    /// Reconcile one reservation.
    pub async fn reconcile(
        &self,
        hotel: &Hotel,
        reservation_id: &str,
        reservation: &ReservationDetails,
        guest_details: &GuestDetails,
    ) -> Result<Reconciled, PmsError> {
        let phone = validate_phone(guest_details.phone.as_deref(), self.phone_validation)?;
        let name = validate_name(guest_details.name.as_deref())?;
        let language = language_for_country(guest_details.country.as_deref());

        let checkin = parse_date("CheckInDate", reservation.check_in_date.as_deref())?;
        let checkout = parse_date("CheckOutDate", reservation.check_out_date.as_deref())?;
        let status = reservation
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(PmsError::MissingField("Status"))?;

        let stay_values = StayUpsert {
            hotel_id: hotel.id,
            pms_reservation_id: reservation_id.to_string(),
            pms_guest_id: reservation.guest_id.clone(),
            checkin,
            checkout,
            status: status.to_string(),
        };
        let guest_values = GuestUpsert {
            phone,
            name,
            language: language.as_str().to_string(),
        };

        let mut tx = self.db.begin().await?;
        let stay = stay::upsert_stay(&mut *tx, &stay_values).await?;
        let guest = guest::upsert_guest(&mut *tx, &guest_values).await?;
        stay::link_guest(&mut *tx, stay.id, guest.id).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        debug!(
            hotel = %hotel.pms_hotel_id,
            reservation_id,
            stay_id = stay.id,
            guest_id = guest.id,
            language = %language,
            "Reservation reconciled"
        );

        let stay = stay::get_stay(self.db.pool(), stay.id).await?;
        Ok(Reconciled { stay, guest })
    }
}
