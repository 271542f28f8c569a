//! Hotel and stay routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::{Hotel, NewHotel};
use serde::Serialize;

use crate::error::{Result, ServerError};
use crate::state::AppState;

/// Breakfast lookup response.
#[derive(Serialize)]
pub struct BreakfastResponse {
    pub stay_id: i64,
    /// `null` when the PMS cannot tell.
    pub breakfast: Option<bool>,
}

/// List hotels.
pub async fn list_hotels(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>> {
    let hotels = database::hotel::list_hotels(state.db.pool()).await?;
    Ok(Json(hotels))
}

/// Register a hotel.
pub async fn create_hotel(
    State(state): State<AppState>,
    Json(req): Json<NewHotel>,
) -> Result<(StatusCode, Json<Hotel>)> {
    if req.pms_hotel_id.trim().is_empty() {
        return Err(ServerError::BadRequest("pms_hotel_id is required".to_string()));
    }
    if !state.registry.has_pms(&req.pms) {
        return Err(ServerError::UnknownPms(req.pms));
    }

    let hotel = database::hotel::create_hotel(state.db.pool(), &req).await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

/// Ask the hotel's PMS whether a stay includes breakfast.
pub async fn stay_breakfast(
    State(state): State<AppState>,
    Path(stay_id): Path<i64>,
) -> Result<Json<BreakfastResponse>> {
    let pool = state.db.pool();
    let stay = database::stay::get_stay(pool, stay_id).await?;
    let hotel = database::hotel::get_hotel(pool, stay.hotel_id).await?;

    let pms = state
        .registry
        .get(&hotel.pms)
        .ok_or_else(|| ServerError::UnknownPms(hotel.pms.clone()))?;

    Ok(Json(BreakfastResponse {
        stay_id,
        breakfast: pms.stay_has_breakfast(&stay).await,
    }))
}
