use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool, sqlite::SqlitePoolOptions};

use crate::cart::CartEntry;
use crate::error::AppError;
use crate::models::Course;

const CART_SLOT: &str = "cart";
const COURSES_SLOT: &str = "courses";

/// Durable storage for the two session snapshots: the cart ledger and the
/// catalog. Each slot is overwritten wholesale; a missing slot means "use
/// defaults".
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load_catalog(&self) -> Result<Option<Vec<Course>>, AppError>;
    async fn save_catalog(&self, courses: &[Course]) -> Result<(), AppError>;
    async fn load_cart(&self) -> Result<Option<Vec<CartEntry>>, AppError>;
    async fn save_cart(&self, entries: &[CartEntry]) -> Result<(), AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}

pub struct SqliteSnapshotStore {
    db: SqlitePool,
}

impl SqliteSnapshotStore {
    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let db = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Self::with_pool(db).await
    }

    pub async fn with_pool(db: SqlitePool) -> Result<Self, AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS snapshots (
                slot TEXT PRIMARY KEY,
                body TEXT NOT NULL,
                saved_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&db)
        .await?;
        Ok(Self { db })
    }

    async fn save_slot(&self, slot: &str, body: String) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO snapshots (slot, body, saved_at) VALUES (?, ?, ?)
             ON CONFLICT(slot) DO UPDATE SET body = excluded.body, saved_at = excluded.saved_at",
        )
        .bind(slot)
        .bind(body)
        .bind(now)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn load_slot(&self, slot: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT body FROM snapshots WHERE slot = ?")
            .bind(slot)
            .fetch_optional(&self.db)
            .await?;
        Ok(row.map(|r| r.get::<String, _>("body")))
    }
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    async fn load_catalog(&self) -> Result<Option<Vec<Course>>, AppError> {
        match self.load_slot(COURSES_SLOT).await? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    async fn save_catalog(&self, courses: &[Course]) -> Result<(), AppError> {
        self.save_slot(COURSES_SLOT, serde_json::to_string(courses)?)
            .await
    }

    async fn load_cart(&self) -> Result<Option<Vec<CartEntry>>, AppError> {
        match self.load_slot(CART_SLOT).await? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    async fn save_cart(&self, entries: &[CartEntry]) -> Result<(), AppError> {
        self.save_slot(CART_SLOT, serde_json::to_string(entries)?)
            .await
    }

    async fn clear(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM snapshots")
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

/// No-persistence mode: every load reports an empty store and saves vanish.
pub struct NoopSnapshotStore;

#[async_trait]
impl SnapshotStore for NoopSnapshotStore {
    async fn load_catalog(&self) -> Result<Option<Vec<Course>>, AppError> {
        Ok(None)
    }

    async fn save_catalog(&self, _courses: &[Course]) -> Result<(), AppError> {
        Ok(())
    }

    async fn load_cart(&self) -> Result<Option<Vec<CartEntry>>, AppError> {
        Ok(None)
    }

    async fn save_cart(&self, _entries: &[CartEntry]) -> Result<(), AppError> {
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        Ok(())
    }
}
