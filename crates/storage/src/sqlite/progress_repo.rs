use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use tracker_core::model::{LearningDocument, UserId};

use super::SqliteRepository;
use crate::repository::{ProgressRecord, ProgressRepository, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<ProgressRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT user_id, progress_data, updated_at
            FROM user_progress
            WHERE user_id = ?1
            ",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        match row {
            Some(row) => record_from_row(&row).map(Some),
            None => Ok(None),
        }
    }

    async fn upsert(
        &self,
        user_id: &UserId,
        document: &LearningDocument,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let progress_data = serde_json::to_string(document).map_err(ser)?;

        sqlx::query(
            r"
            INSERT INTO user_progress (user_id, progress_data, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(user_id) DO UPDATE SET
                progress_data = excluded.progress_data,
                updated_at = excluded.updated_at
            ",
        )
        .bind(user_id.as_str())
        .bind(progress_data)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM user_progress WHERE user_id = ?1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }
}

fn record_from_row(row: &SqliteRow) -> Result<ProgressRecord, StorageError> {
    let progress_data: String = row.try_get("progress_data").map_err(ser)?;
    let document: LearningDocument = serde_json::from_str(&progress_data).map_err(ser)?;

    Ok(ProgressRecord {
        user_id: UserId::new(row.try_get::<String, _>("user_id").map_err(ser)?),
        document,
        updated_at: row.try_get("updated_at").map_err(ser)?,
    })
}
