//! Hotel CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Hotel, NewHotel};

/// Register a new hotel.
pub async fn create_hotel(pool: &SqlitePool, hotel: &NewHotel) -> Result<Hotel> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO hotels (pms_hotel_id, name, pms)
        VALUES (?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&hotel.pms_hotel_id)
    .bind(&hotel.name)
    .bind(hotel.pms.to_lowercase())
    .fetch_one(pool)
    .await
    .map_err(|e| DatabaseError::from_write(e, "Hotel", &hotel.pms_hotel_id))?;

    get_hotel(pool, id).await
}

/// Get a hotel by internal id.
pub async fn get_hotel(pool: &SqlitePool, id: i64) -> Result<Hotel> {
    sqlx::query_as::<_, Hotel>(
        r#"
        SELECT id, pms_hotel_id, name, pms, created_at
        FROM hotels
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Hotel",
        id: id.to_string(),
    })
}

/// Get a hotel by its PMS hotel id.
pub async fn get_hotel_by_pms_id(pool: &SqlitePool, pms_hotel_id: &str) -> Result<Hotel> {
    sqlx::query_as::<_, Hotel>(
        r#"
        SELECT id, pms_hotel_id, name, pms, created_at
        FROM hotels
        WHERE pms_hotel_id = ?
        "#,
    )
    .bind(pms_hotel_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Hotel",
        id: pms_hotel_id.to_string(),
    })
}

/// List all hotels.
pub async fn list_hotels(pool: &SqlitePool) -> Result<Vec<Hotel>> {
    let hotels = sqlx::query_as::<_, Hotel>(
        r#"
        SELECT id, pms_hotel_id, name, pms, created_at
        FROM hotels
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(hotels)
}

/// Count total hotels.
pub async fn count_hotels(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM hotels
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
