//! Nightly sync of reservations checking in on a given date.

mod common;

use chrono::NaiveDate;
use common::{guest, harness, reservation, HOTEL_ID};
use database::stay;
use pms_core::PmsError;
use serde_json::json;

fn may(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

#[tokio::test]
async fn test_sync_skips_incomplete_stubs() {
    let h = harness().await;
    h.api.insert_reservation("r-1", reservation("g1", "Confirmed")).await;
    h.api.insert_guest("g1", guest("Jan", "+31612345678", "nl")).await;
    h.api.insert_reservation("r-2", reservation("g2", "Confirmed")).await;
    h.api.insert_guest("g2", guest("Emma", "+442071838750", "gb")).await;

    h.api.insert_arrival(may(1), json!({"HotelId": HOTEL_ID})).await;
    h.api.insert_arrival(may(1), json!({"ReservationId": "r-1", "HotelId": HOTEL_ID})).await;
    h.api.insert_arrival(may(1), json!({"ReservationId": "r-x"})).await;
    h.api.insert_arrival(may(1), json!("garbage")).await;
    h.api.insert_arrival(may(1), json!({"ReservationId": "r-2", "HotelId": HOTEL_ID})).await;
    // Outside the window.
    h.api.insert_arrival(may(2), json!({"ReservationId": "r-3", "HotelId": HOTEL_ID})).await;

    let report = h.mews.update_stays_checking_in(may(1)).await.unwrap();

    assert!(report.is_success());
    assert_eq!(report.skipped, 3);
    assert_eq!(report.reconciled, vec!["r-1".to_string(), "r-2".to_string()]);
    assert_eq!(stay::count_stays(h.db.pool()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_sync_isolates_failures() {
    let h = harness().await;
    h.api.insert_reservation("r-1", reservation("g1", "Confirmed")).await;
    h.api.insert_guest("g1", guest("", "+31612345678", "nl")).await;
    h.api.insert_reservation("r-2", reservation("g2", "Confirmed")).await;
    h.api.insert_guest("g2", guest("Emma", "+442071838750", "gb")).await;

    h.api
        .insert_arrival(may(1), json!({"ReservationId": "r-0", "HotelId": "other-hotel"}))
        .await;
    h.api.insert_arrival(may(1), json!({"ReservationId": "r-1", "HotelId": HOTEL_ID})).await;
    h.api.insert_arrival(may(1), json!({"ReservationId": "r-2", "HotelId": HOTEL_ID})).await;

    let report = h.mews.update_stays_checking_in(may(1)).await.unwrap();

    assert!(!report.is_success());
    assert_eq!(report.reconciled, vec!["r-2".to_string()]);
    assert_eq!(report.failures.len(), 2);
    assert!(matches!(report.failures[0].error, PmsError::NotFound { .. }));
    assert!(matches!(report.failures[1].error, PmsError::MissingField("Name")));
    assert_eq!(stay::count_stays(h.db.pool()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_sync_fails_when_listing_fails() {
    let h = harness().await;
    h.api.set_unavailable(true).await;

    let result = h.mews.update_stays_checking_in(may(1)).await;
    assert!(matches!(result, Err(PmsError::ExternalApi(_))));
}
