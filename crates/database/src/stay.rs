//! Stay storage.
//!
//! Writes take a `SqliteConnection` so callers can group them in a single
//! transaction (`&mut *tx`).

use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};

use crate::error::{DatabaseError, Result};
use crate::models::{Stay, StayUpsert};

const STAY_COLUMNS: &str = "id, hotel_id, guest_id, pms_reservation_id, pms_guest_id, \
     checkin, checkout, status, created_at, updated_at";

/// Create or update a stay keyed by `(pms_reservation_id, hotel_id)`.
///
/// The row is only touched when a value actually changed, so replaying the
/// same reservation leaves `updated_at` alone.
pub async fn upsert_stay(conn: &mut SqliteConnection, stay: &StayUpsert) -> Result<Stay> {
    sqlx::query(
        r#"
        INSERT INTO stays (hotel_id, pms_reservation_id, pms_guest_id, checkin, checkout, status)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(pms_reservation_id, hotel_id) DO UPDATE SET
            pms_guest_id = excluded.pms_guest_id,
            checkin = excluded.checkin,
            checkout = excluded.checkout,
            status = excluded.status,
            updated_at = datetime('now')
        WHERE stays.pms_guest_id IS NOT excluded.pms_guest_id
           OR stays.checkin IS NOT excluded.checkin
           OR stays.checkout IS NOT excluded.checkout
           OR stays.status IS NOT excluded.status
        "#,
    )
    .bind(stay.hotel_id)
    .bind(&stay.pms_reservation_id)
    .bind(&stay.pms_guest_id)
    .bind(stay.checkin)
    .bind(stay.checkout)
    .bind(&stay.status)
    .execute(&mut *conn)
    .await
    .map_err(|e| DatabaseError::from_write(e, "Stay", &stay.pms_reservation_id))?;

    fetch_by_reservation(&mut *conn, stay.hotel_id, &stay.pms_reservation_id)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "Stay",
            id: stay.pms_reservation_id.clone(),
        })
}

/// Link a guest to a stay.
pub async fn link_guest(conn: &mut SqliteConnection, stay_id: i64, guest_id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE stays
        SET guest_id = ?, updated_at = datetime('now')
        WHERE id = ? AND guest_id IS NOT ?
        "#,
    )
    .bind(guest_id)
    .bind(stay_id)
    .bind(guest_id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        // Either already linked or missing; only the latter is an error.
        let exists = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stays WHERE id = ?")
            .bind(stay_id)
            .fetch_one(&mut *conn)
            .await?;
        if exists == 0 {
            return Err(DatabaseError::NotFound {
                entity: "Stay",
                id: stay_id.to_string(),
            });
        }
    }

    Ok(())
}

/// Get a stay by internal id.
pub async fn get_stay(pool: &SqlitePool, id: i64) -> Result<Stay> {
    sqlx::query_as::<_, Stay>(&format!("SELECT {STAY_COLUMNS} FROM stays WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "Stay",
            id: id.to_string(),
        })
}

/// Get a stay by hotel and PMS reservation id.
pub async fn get_stay_by_reservation(
    pool: &SqlitePool,
    hotel_id: i64,
    pms_reservation_id: &str,
) -> Result<Option<Stay>> {
    fetch_by_reservation(pool, hotel_id, pms_reservation_id).await
}

/// List all stays of a hotel, ordered by check-in date.
pub async fn list_stays_for_hotel(pool: &SqlitePool, hotel_id: i64) -> Result<Vec<Stay>> {
    let stays = sqlx::query_as::<_, Stay>(&format!(
        "SELECT {STAY_COLUMNS} FROM stays WHERE hotel_id = ? ORDER BY checkin, id"
    ))
    .bind(hotel_id)
    .fetch_all(pool)
    .await?;

    Ok(stays)
}

/// Count total stays.
pub async fn count_stays(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stays")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

async fn fetch_by_reservation<'e, E>(
    executor: E,
    hotel_id: i64,
    pms_reservation_id: &str,
) -> Result<Option<Stay>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let stay = sqlx::query_as::<_, Stay>(&format!(
        "SELECT {STAY_COLUMNS} FROM stays WHERE hotel_id = ? AND pms_reservation_id = ?"
    ))
    .bind(hotel_id)
    .bind(pms_reservation_id)
    .fetch_optional(executor)
    .await?;

    Ok(stay)
}
