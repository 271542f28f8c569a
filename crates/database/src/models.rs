//! Database models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A hotel, identified by its id in the property management system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    /// Internal row id.
    pub id: i64,
    /// Hotel id in the PMS (e.g., "851df8c8-90f2-4c4a-8e01-a4fc46b25178")
    pub pms_hotel_id: String,
    /// Display name
    pub name: String,
    /// PMS vendor handling this hotel (e.g., "mews")
    pub pms: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Fields required to register a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHotel {
    pub pms_hotel_id: String,
    pub name: String,
    pub pms: String,
}

/// A single reservation at a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Stay {
    /// Internal row id.
    pub id: i64,
    /// Hotel the reservation belongs to.
    pub hotel_id: i64,
    /// Linked guest, set once the reservation has been reconciled.
    pub guest_id: Option<i64>,
    /// Reservation id in the PMS.
    pub pms_reservation_id: String,
    /// Guest id in the PMS.
    pub pms_guest_id: Option<String>,
    /// Check-in date.
    pub checkin: NaiveDate,
    /// Check-out date.
    pub checkout: NaiveDate,
    /// Reservation status as reported by the PMS (e.g., "Confirmed").
    pub status: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Values written when upserting a stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayUpsert {
    pub hotel_id: i64,
    pub pms_reservation_id: String,
    pub pms_guest_id: Option<String>,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub status: String,
}

/// A guest, identified by phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Guest {
    /// Internal row id.
    pub id: i64,
    /// Phone number, unique across guests.
    pub phone: String,
    /// Guest name.
    pub name: String,
    /// Preferred language (e.g., "Dutch", "Unknown")
    pub language: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Values written when upserting a guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestUpsert {
    pub phone: String,
    pub name: String,
    pub language: String,
}
