//! Guest storage.

use sqlx::{SqliteConnection, SqlitePool};

use crate::error::{DatabaseError, Result};
use crate::models::{Guest, GuestUpsert};

/// Create or update a guest keyed by phone number.
pub async fn upsert_guest(conn: &mut SqliteConnection, guest: &GuestUpsert) -> Result<Guest> {
    sqlx::query(
        r#"
        INSERT INTO guests (phone, name, language)
        VALUES (?, ?, ?)
        ON CONFLICT(phone) DO UPDATE SET
            name = excluded.name,
            language = excluded.language,
            updated_at = datetime('now')
        WHERE guests.name IS NOT excluded.name
           OR guests.language IS NOT excluded.language
        "#,
    )
    .bind(&guest.phone)
    .bind(&guest.name)
    .bind(&guest.language)
    .execute(&mut *conn)
    .await
    .map_err(|e| DatabaseError::from_write(e, "Guest", &guest.phone))?;

    sqlx::query_as::<_, Guest>(
        r#"
        SELECT id, phone, name, language, created_at, updated_at
        FROM guests
        WHERE phone = ?
        "#,
    )
    .bind(&guest.phone)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Guest",
        id: guest.phone.clone(),
    })
}

/// Get a guest by internal id.
pub async fn get_guest(pool: &SqlitePool, id: i64) -> Result<Guest> {
    sqlx::query_as::<_, Guest>(
        r#"
        SELECT id, phone, name, language, created_at, updated_at
        FROM guests
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Guest",
        id: id.to_string(),
    })
}

/// Get a guest by phone number.
pub async fn get_guest_by_phone(pool: &SqlitePool, phone: &str) -> Result<Option<Guest>> {
    let guest = sqlx::query_as::<_, Guest>(
        r#"
        SELECT id, phone, name, language, created_at, updated_at
        FROM guests
        WHERE phone = ?
        "#,
    )
    .bind(phone)
    .fetch_optional(pool)
    .await?;

    Ok(guest)
}

/// Count total guests.
pub async fn count_guests(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM guests
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Count guests grouped by language.
pub async fn count_guests_by_language(pool: &SqlitePool) -> Result<Vec<(String, i64)>> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT language, COUNT(*) as count
        FROM guests
        GROUP BY language
        ORDER BY count DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
