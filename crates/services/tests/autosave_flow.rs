//! End-to-end tests for the service layer: load fallbacks, the debounced
//! save pipeline, and reset. All of them run with paused time so the quiet
//! period elapses instantly and deterministically.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::sleep;

use services::{ProgressService, SyncEvent};
use storage::repository::{
    InMemoryRepository, ProgressRecord, ProgressRepository, StorageError,
};
use tracker_core::model::{LearningDocument, UserId};
use tracker_core::seed::seed_document;
use tracker_core::time::fixed_clock;

const QUIET: Duration = Duration::from_secs(1);

/// Wraps the in-memory repository to count writes and inject failures.
#[derive(Default)]
struct CountingRepo {
    inner: InMemoryRepository,
    upserts: AtomicUsize,
    deletes: AtomicUsize,
    fail_writes: AtomicBool,
}

#[async_trait]
impl ProgressRepository for CountingRepo {
    async fn load(&self, user_id: &UserId) -> Result<Option<ProgressRecord>, StorageError> {
        self.inner.load(user_id).await
    }

    async fn upsert(
        &self,
        user_id: &UserId,
        document: &LearningDocument,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        self.upserts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Connection("injected write failure".into()));
        }
        self.inner.upsert(user_id, document, updated_at).await
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), StorageError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(user_id).await
    }
}

/// Repository whose loads always fail.
struct BrokenLoadRepo;

#[async_trait]
impl ProgressRepository for BrokenLoadRepo {
    async fn load(&self, _user_id: &UserId) -> Result<Option<ProgressRecord>, StorageError> {
        Err(StorageError::Connection("database unreachable".into()))
    }

    async fn upsert(
        &self,
        _user_id: &UserId,
        _document: &LearningDocument,
        _updated_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        Ok(())
    }

    async fn delete(&self, _user_id: &UserId) -> Result<(), StorageError> {
        Ok(())
    }
}

fn user() -> UserId {
    UserId::new("test-user")
}

async fn start(
    repo: Arc<dyn ProgressRepository>,
) -> (ProgressService, UnboundedReceiver<SyncEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let service = ProgressService::start(repo, user(), fixed_clock(), tx, QUIET).await;
    (service, rx)
}

fn drain(rx: &mut UnboundedReceiver<SyncEvent>) -> Vec<SyncEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test(start_paused = true)]
async fn empty_repository_starts_from_seed_and_says_so() {
    let repo = Arc::new(CountingRepo::default());
    let (service, mut events) = start(repo).await;

    assert_eq!(service.document(), &seed_document());
    assert_eq!(drain(&mut events), vec![SyncEvent::StartedFromSeed]);
}

#[tokio::test(start_paused = true)]
async fn rapid_edits_coalesce_into_one_save() {
    let repo = Arc::new(CountingRepo::default());
    let (mut service, mut events) = start(repo.clone()).await;
    assert_eq!(drain(&mut events), vec![SyncEvent::StartedFromSeed]);

    let week_id = service.document().months[0].weeks[0].id.clone();
    let first = service.document().months[0].weeks[0].daily_tasks[0].id.clone();
    let second = service.document().months[0].weeks[0].daily_tasks[1].id.clone();

    assert!(service.toggle_daily_task(&week_id, &first));
    assert!(service.toggle_daily_task(&week_id, &second));
    assert!(service.update_daily_hours(&week_id, &first, 2.0));

    sleep(QUIET * 2).await;

    assert_eq!(repo.upserts.load(Ordering::SeqCst), 1);
    let record = repo.load(&user()).await.unwrap().expect("record saved");
    assert_eq!(&record.document, service.document());
    assert_eq!(drain(&mut events), vec![SyncEvent::Saved]);
}

#[tokio::test(start_paused = true)]
async fn edits_inside_the_quiet_period_restart_the_timer() {
    let repo = Arc::new(CountingRepo::default());
    let (mut service, _events) = start(repo.clone()).await;

    let week_id = service.document().months[0].weeks[0].id.clone();
    let task_id = service.document().months[0].weeks[0].daily_tasks[0].id.clone();

    service.toggle_daily_task(&week_id, &task_id);
    sleep(Duration::from_millis(600)).await;
    service.toggle_daily_task(&week_id, &task_id);
    sleep(Duration::from_millis(600)).await;

    // 1.2s of wall time, but never a full quiet second without an edit.
    assert_eq!(repo.upserts.load(Ordering::SeqCst), 0);

    sleep(Duration::from_millis(500)).await;
    assert_eq!(repo.upserts.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn noop_mutations_schedule_nothing() {
    let repo = Arc::new(CountingRepo::default());
    let (mut service, mut events) = start(repo.clone()).await;
    assert_eq!(drain(&mut events), vec![SyncEvent::StartedFromSeed]);

    let week_id = service.document().months[0].weeks[0].id.clone();
    let unknown = tracker_core::model::TaskId::new("task-missing");

    assert!(!service.toggle_daily_task(&week_id, &unknown));
    assert!(!service.update_notes(&week_id, &unknown, "nope"));

    sleep(QUIET * 2).await;
    assert_eq!(repo.upserts.load(Ordering::SeqCst), 0);
    assert!(drain(&mut events).is_empty());
}

#[tokio::test(start_paused = true)]
async fn reset_discards_pending_save_and_deletes_the_record() {
    let repo = Arc::new(CountingRepo::default());
    let (mut service, mut events) = start(repo.clone()).await;
    assert_eq!(drain(&mut events), vec![SyncEvent::StartedFromSeed]);

    let week_id = service.document().months[0].weeks[0].id.clone();
    let task_id = service.document().months[0].weeks[0].daily_tasks[0].id.clone();

    // An edit is waiting out its quiet period when the reset lands.
    service.toggle_daily_task(&week_id, &task_id);
    service.reset();

    sleep(QUIET * 2).await;

    assert_eq!(repo.upserts.load(Ordering::SeqCst), 0);
    assert_eq!(repo.deletes.load(Ordering::SeqCst), 1);
    assert!(repo.load(&user()).await.unwrap().is_none());
    assert_eq!(service.document(), &seed_document());
    assert_eq!(drain(&mut events), vec![SyncEvent::ResetComplete]);
}

#[tokio::test(start_paused = true)]
async fn existing_record_is_loaded_and_migrated() {
    let repo = Arc::new(CountingRepo::default());

    let mut saved = seed_document();
    let week_id = saved.months[0].weeks[0].id.clone();
    let task_id = saved.months[0].weeks[0].daily_tasks[0].id.clone();
    saved.toggle_daily_task(&week_id, &task_id);
    saved.schema_version = 0;
    repo.inner
        .upsert(&user(), &saved, fixed_clock().now())
        .await
        .unwrap();

    let (service, mut events) = start(repo).await;

    assert_eq!(drain(&mut events), vec![SyncEvent::Loaded]);
    let doc = service.document();
    assert_eq!(doc.schema_version, tracker_core::model::SCHEMA_VERSION);
    assert!(doc.week(&week_id).unwrap().daily_task(&task_id).unwrap().completed);
}

#[tokio::test(start_paused = true)]
async fn load_failure_falls_back_to_the_seed() {
    let (service, mut events) = start(Arc::new(BrokenLoadRepo)).await;

    assert_eq!(service.document(), &seed_document());
    assert_eq!(
        drain(&mut events),
        vec![SyncEvent::LoadFellBack {
            reason: "connection error: database unreachable".into()
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn save_failure_is_non_fatal_and_the_next_edit_retries() {
    let repo = Arc::new(CountingRepo::default());
    repo.fail_writes.store(true, Ordering::SeqCst);
    let (mut service, mut events) = start(repo.clone()).await;
    assert_eq!(drain(&mut events), vec![SyncEvent::StartedFromSeed]);

    let week_id = service.document().months[0].weeks[0].id.clone();
    let task_id = service.document().months[0].weeks[0].daily_tasks[0].id.clone();

    service.toggle_daily_task(&week_id, &task_id);
    sleep(QUIET * 2).await;

    assert_eq!(repo.upserts.load(Ordering::SeqCst), 1);
    assert!(repo.load(&user()).await.unwrap().is_none());
    assert_eq!(
        drain(&mut events),
        vec![SyncEvent::SaveFailed {
            reason: "connection error: injected write failure".into()
        }]
    );

    // The in-memory document kept the edit; once storage recovers, the next
    // change writes the full current state.
    repo.fail_writes.store(false, Ordering::SeqCst);
    service.toggle_daily_task(&week_id, &task_id);
    sleep(QUIET * 2).await;

    assert_eq!(repo.upserts.load(Ordering::SeqCst), 2);
    let record = repo.load(&user()).await.unwrap().expect("record saved");
    assert_eq!(&record.document, service.document());
    assert_eq!(drain(&mut events), vec![SyncEvent::Saved]);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_service_flushes_the_pending_save() {
    let repo = Arc::new(CountingRepo::default());
    let (mut service, _events) = start(repo.clone()).await;

    let week_id = service.document().months[0].weeks[0].id.clone();
    let task_id = service.document().months[0].weeks[0].daily_tasks[0].id.clone();
    service.toggle_daily_task(&week_id, &task_id);

    drop(service);
    sleep(QUIET).await;

    assert_eq!(repo.upserts.load(Ordering::SeqCst), 1);
    assert!(repo.load(&user()).await.unwrap().is_some());
}
