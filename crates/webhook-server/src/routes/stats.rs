//! Statistics route.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Record counts.
#[derive(Clone, Serialize)]
pub struct Stats {
    pub hotel_count: i64,
    pub stay_count: i64,
    pub guest_count: i64,
    pub languages: Vec<LanguageStats>,
}

/// Statistics for a language.
#[derive(Clone, Serialize)]
pub struct LanguageStats {
    pub language: String,
    pub guest_count: i64,
}

/// Get statistics as JSON.
pub async fn stats_api(State(state): State<AppState>) -> Result<Json<Stats>> {
    let pool = state.db.pool();

    let hotel_count = database::hotel::count_hotels(pool).await?;
    let stay_count = database::stay::count_stays(pool).await?;
    let guest_count = database::guest::count_guests(pool).await?;
    let languages = database::guest::count_guests_by_language(pool)
        .await?
        .into_iter()
        .map(|(language, count)| LanguageStats {
            language,
            guest_count: count,
        })
        .collect();

    Ok(Json(Stats {
        hotel_count,
        stay_count,
        guest_count,
        languages,
    }))
}
