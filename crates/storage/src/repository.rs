use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use tracker_core::model::{LearningDocument, UserId};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of one user's saved progress: one row per user.
///
/// The document travels through here as an opaque value; repositories
/// serialize it wholesale and never look inside.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub user_id: UserId,
    pub document: LearningDocument,
    pub updated_at: DateTime<Utc>,
}

/// Repository contract for the per-user progress record.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the record for a user, if one exists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be read or decoded.
    async fn load(&self, user_id: &UserId) -> Result<Option<ProgressRecord>, StorageError>;

    /// Insert or update the record for a user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn upsert(
        &self,
        user_id: &UserId,
        document: &LearningDocument,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError>;

    /// Delete the record for a user. Deleting an absent record is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete cannot be executed.
    async fn delete(&self, user_id: &UserId) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<HashMap<UserId, ProgressRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<ProgressRecord>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(user_id).cloned())
    }

    async fn upsert(
        &self,
        user_id: &UserId,
        document: &LearningDocument,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(
            user_id.clone(),
            ProgressRecord {
                user_id: user_id.clone(),
                document: document.clone(),
                updated_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(user_id);
        Ok(())
    }
}

/// Aggregates the progress repository behind a trait object for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            progress: Arc::new(InMemoryRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::seed::seed_document;
    use tracker_core::time::fixed_now;

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryRepository>();
    }

    #[tokio::test]
    async fn round_trips_a_document() {
        let repo = InMemoryRepository::new();
        let user = UserId::new("user-a");
        assert!(repo.load(&user).await.unwrap().is_none());

        let mut doc = seed_document();
        let week_id = doc.months[0].weeks[0].id.clone();
        let task_id = doc.months[0].weeks[0].daily_tasks[0].id.clone();
        doc.toggle_daily_task(&week_id, &task_id);

        repo.upsert(&user, &doc, fixed_now()).await.unwrap();
        let record = repo.load(&user).await.unwrap().expect("record saved");
        assert_eq!(record.user_id, user);
        assert_eq!(record.document, doc);
        assert_eq!(record.updated_at, fixed_now());
    }

    #[tokio::test]
    async fn upsert_replaces_existing_record() {
        let repo = InMemoryRepository::new();
        let user = UserId::new("user-a");
        let doc = seed_document();
        repo.upsert(&user, &doc, fixed_now()).await.unwrap();

        let mut changed = doc.clone();
        changed.current_week = 7;
        let later = fixed_now() + chrono::Duration::seconds(90);
        repo.upsert(&user, &changed, later).await.unwrap();

        let record = repo.load(&user).await.unwrap().unwrap();
        assert_eq!(record.document.current_week, 7);
        assert_eq!(record.updated_at, later);
    }

    #[tokio::test]
    async fn delete_is_idempotent_and_scoped_to_user() {
        let repo = InMemoryRepository::new();
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");
        let doc = seed_document();
        repo.upsert(&alice, &doc, fixed_now()).await.unwrap();
        repo.upsert(&bob, &doc, fixed_now()).await.unwrap();

        repo.delete(&alice).await.unwrap();
        repo.delete(&alice).await.unwrap();

        assert!(repo.load(&alice).await.unwrap().is_none());
        assert!(repo.load(&bob).await.unwrap().is_some());
    }
}
