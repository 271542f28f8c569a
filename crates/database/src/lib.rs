//! SQLite persistence layer for hotels, stays and guests.
//!
//! This crate provides async database operations for the records that PMS
//! reconciliation writes, using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{Database, NewHotel, hotel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:pms.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Register a hotel
//!     let new_hotel = NewHotel {
//!         pms_hotel_id: "851df8c8-90f2-4c4a-8e01-a4fc46b25178".to_string(),
//!         name: "Hotel Amsterdam".to_string(),
//!         pms: "mews".to_string(),
//!     };
//!     hotel::create_hotel(db.pool(), &new_hotel).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod guest;
pub mod hotel;
pub mod models;
pub mod stay;

pub use error::{DatabaseError, Result};
pub use models::{Guest, GuestUpsert, Hotel, NewHotel, Stay, StayUpsert};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{SqlitePool, Transaction};
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/pms.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    ///
    /// In-memory databases are limited to a single connection, since every
    /// new connection would open a separate empty database.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let pool_size = if url.contains(":memory:") { 1 } else { pool_size };
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Start a transaction. Dropping it without `commit` rolls back.
    pub async fn begin(&self) -> Result<Transaction<'static, sqlx::Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    async fn test_hotel(db: &Database) -> Hotel {
        let new_hotel = NewHotel {
            pms_hotel_id: "hotel-1".to_string(),
            name: "Canal House".to_string(),
            pms: "Mews".to_string(),
        };
        hotel::create_hotel(db.pool(), &new_hotel).await.unwrap()
    }

    fn stay_upsert(hotel_id: i64, status: &str) -> StayUpsert {
        StayUpsert {
            hotel_id,
            pms_reservation_id: "res-1".to_string(),
            pms_guest_id: Some("g1".to_string()),
            checkin: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            checkout: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            status: status.to_string(),
        }
    }

    #[tokio::test]
    async fn test_hotel_crud() {
        let db = test_db().await;
        let created = test_hotel(&db).await;
        assert_eq!(created.pms, "mews");

        let fetched = hotel::get_hotel_by_pms_id(db.pool(), "hotel-1").await.unwrap();
        assert_eq!(fetched, created);

        let missing = hotel::get_hotel_by_pms_id(db.pool(), "nope").await;
        assert!(matches!(missing, Err(DatabaseError::NotFound { .. })));

        let duplicate = NewHotel {
            pms_hotel_id: "hotel-1".to_string(),
            name: "Other".to_string(),
            pms: "mews".to_string(),
        };
        let result = hotel::create_hotel(db.pool(), &duplicate).await;
        assert!(matches!(result, Err(DatabaseError::AlreadyExists { .. })));

        assert_eq!(hotel::list_hotels(db.pool()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_stay_upsert_is_idempotent() {
        let db = test_db().await;
        let hotel = test_hotel(&db).await;
        let mut conn = db.pool().acquire().await.unwrap();

        let first = stay::upsert_stay(&mut conn, &stay_upsert(hotel.id, "Confirmed"))
            .await
            .unwrap();
        let second = stay::upsert_stay(&mut conn, &stay_upsert(hotel.id, "Confirmed"))
            .await
            .unwrap();
        assert_eq!(first, second);

        let updated = stay::upsert_stay(&mut conn, &stay_upsert(hotel.id, "Canceled"))
            .await
            .unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.status, "Canceled");
        drop(conn);

        assert_eq!(stay::count_stays(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_guest_upsert_and_link() {
        let db = test_db().await;
        let hotel = test_hotel(&db).await;
        let mut conn = db.pool().acquire().await.unwrap();

        let stay = stay::upsert_stay(&mut conn, &stay_upsert(hotel.id, "Confirmed"))
            .await
            .unwrap();
        let guest = guest::upsert_guest(
            &mut conn,
            &GuestUpsert {
                phone: "+31612345678".to_string(),
                name: "Jan".to_string(),
                language: "Dutch".to_string(),
            },
        )
        .await
        .unwrap();
        stay::link_guest(&mut conn, stay.id, guest.id).await.unwrap();
        // Linking twice is a no-op.
        stay::link_guest(&mut conn, stay.id, guest.id).await.unwrap();

        let renamed = guest::upsert_guest(
            &mut conn,
            &GuestUpsert {
                phone: "+31612345678".to_string(),
                name: "Jan de Vries".to_string(),
                language: "Dutch".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(renamed.id, guest.id);

        let missing = stay::link_guest(&mut conn, 999, guest.id).await;
        assert!(matches!(missing, Err(DatabaseError::NotFound { .. })));
        drop(conn);

        let linked = stay::get_stay(db.pool(), stay.id).await.unwrap();
        assert_eq!(linked.guest_id, Some(guest.id));
        assert_eq!(guest::count_guests(db.pool()).await.unwrap(), 1);
        assert_eq!(
            guest::count_guests_by_language(db.pool()).await.unwrap(),
            vec![("Dutch".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_rolled_back_transaction_leaves_nothing() {
        let db = test_db().await;
        let hotel = test_hotel(&db).await;

        let mut tx = db.begin().await.unwrap();
        stay::upsert_stay(&mut *tx, &stay_upsert(hotel.id, "Confirmed"))
            .await
            .unwrap();
        tx.rollback().await.unwrap();

        let stay = stay::get_stay_by_reservation(db.pool(), hotel.id, "res-1")
            .await
            .unwrap();
        assert!(stay.is_none());
    }

    #[tokio::test]
    async fn test_constraint_violations() {
        let db = test_db().await;
        let mut conn = db.pool().acquire().await.unwrap();

        let blank_phone = guest::upsert_guest(
            &mut conn,
            &GuestUpsert {
                phone: "  ".to_string(),
                name: "Jan".to_string(),
                language: "Dutch".to_string(),
            },
        )
        .await;
        assert!(matches!(
            blank_phone,
            Err(DatabaseError::Constraint { entity: "Guest", .. })
        ));

        let unknown_hotel = stay::upsert_stay(&mut conn, &stay_upsert(42, "Confirmed")).await;
        assert!(matches!(
            unknown_hotel,
            Err(DatabaseError::Constraint { entity: "Stay", .. })
        ));
    }
}
