//! Model record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// One uploaded model file. The blob itself lives in the `models` storage
/// bucket under `original_file_path`; this row is metadata only. There is no
/// update or delete path, records persist indefinitely.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ModelRecord {
    pub id: Uuid,
    pub name: String,
    pub original_file_path: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl ModelRecord {
    pub async fn create(
        pool: &PgPool,
        name: &str,
        original_file_path: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, ModelRecord>(
            r#"
            INSERT INTO models (name, original_file_path, status)
            VALUES ($1, $2, 'uploaded')
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(original_file_path)
        .fetch_one(pool)
        .await
    }
}
