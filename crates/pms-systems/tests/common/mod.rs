#![allow(dead_code)]

use std::sync::Arc;

use database::{hotel, Database, Hotel, NewHotel};
use mock_pms::MockPmsApi;
use pms_core::PhoneValidation;
use pms_systems::Mews;
use serde_json::{json, Value};

pub const HOTEL_ID: &str = "851df8c8-90f2-4c4a-8e01-a4fc46b25178";

pub struct Harness {
    pub db: Database,
    pub api: Arc<MockPmsApi>,
    pub hotel: Hotel,
    pub mews: Mews,
}

pub async fn harness() -> Harness {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.migrate().await.unwrap();

    let hotel = hotel::create_hotel(
        db.pool(),
        &NewHotel {
            pms_hotel_id: HOTEL_ID.to_string(),
            name: "Canal House".to_string(),
            pms: "mews".to_string(),
        },
    )
    .await
    .unwrap();

    let api = Arc::new(MockPmsApi::new());
    let mews = Mews::new(api.clone(), db.clone(), PhoneValidation::Strict);

    Harness {
        db,
        api,
        hotel,
        mews,
    }
}

pub fn reservation(guest_id: &str, status: &str) -> Value {
    json!({
        "GuestId": guest_id,
        "CheckInDate": "2024-05-01",
        "CheckOutDate": "2024-05-03",
        "Status": status,
        "BreakfastIncluded": true
    })
}

pub fn guest(name: &str, phone: &str, country: &str) -> Value {
    json!({"Name": name, "Phone": phone, "Country": country})
}

pub fn webhook(hotel_id: &str, reservation_ids: &[&str]) -> Vec<u8> {
    let events: Vec<Value> = reservation_ids
        .iter()
        .map(|id| json!({"Name": "ReservationUpdated", "Value": {"ReservationId": id}}))
        .collect();

    json!({
        "HotelId": hotel_id,
        "IntegrationId": "c8bee838-7fb1-4f4e-8fac-ac87008b2f90",
        "Events": events
    })
    .to_string()
    .into_bytes()
}
