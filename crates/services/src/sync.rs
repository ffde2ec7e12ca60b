//! Debounced persistence worker.
//!
//! One worker task runs per session. Every document change enqueues a
//! snapshot; the worker waits for a quiet period with no further changes,
//! then upserts once with the newest snapshot. A reset command discards any
//! pending save and deletes the remote record instead. Saves are sequential:
//! the worker awaits each upsert, so writes reach storage in order.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::timeout;
use tracing::{debug, error};

use storage::repository::ProgressRepository;
use tracker_core::Clock;
use tracker_core::model::{LearningDocument, UserId};

use crate::events::SyncEvent;

/// Quiet period between the last change and the actual write.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_secs(1);

pub(crate) enum SyncCommand {
    Save(Box<LearningDocument>),
    Reset,
}

/// Sending side of the per-session sync worker.
///
/// Dropping the last handle closes the channel; the worker flushes a
/// pending save and exits.
#[derive(Clone)]
pub struct SyncHandle {
    tx: UnboundedSender<SyncCommand>,
}

impl SyncHandle {
    pub(crate) fn schedule_save(&self, document: &LearningDocument) {
        // Send failure means the worker is gone (shutdown); nothing to do.
        let _ = self.tx.send(SyncCommand::Save(Box::new(document.clone())));
    }

    pub(crate) fn reset(&self) {
        let _ = self.tx.send(SyncCommand::Reset);
    }
}

/// Spawns the sync worker for one user session.
#[must_use]
pub fn spawn(
    repo: Arc<dyn ProgressRepository>,
    user: UserId,
    clock: Clock,
    events: UnboundedSender<SyncEvent>,
    quiet_period: Duration,
) -> SyncHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(run(rx, repo, user, clock, events, quiet_period));
    SyncHandle { tx }
}

async fn run(
    mut rx: UnboundedReceiver<SyncCommand>,
    repo: Arc<dyn ProgressRepository>,
    user: UserId,
    clock: Clock,
    events: UnboundedSender<SyncEvent>,
    quiet_period: Duration,
) {
    while let Some(command) = rx.recv().await {
        match command {
            SyncCommand::Reset => delete_record(repo.as_ref(), &user, &events).await,
            SyncCommand::Save(document) => {
                let mut latest = *document;
                loop {
                    match timeout(quiet_period, rx.recv()).await {
                        // Another change landed inside the quiet period:
                        // keep only the newest snapshot and restart the
                        // timer.
                        Ok(Some(SyncCommand::Save(next))) => latest = *next,
                        // Reset discards the pending save entirely.
                        Ok(Some(SyncCommand::Reset)) => {
                            delete_record(repo.as_ref(), &user, &events).await;
                            break;
                        }
                        // Shutdown: flush the pending save, then exit.
                        Ok(None) => {
                            save(repo.as_ref(), &user, &latest, clock, &events).await;
                            return;
                        }
                        // Quiet period elapsed undisturbed.
                        Err(_) => {
                            save(repo.as_ref(), &user, &latest, clock, &events).await;
                            break;
                        }
                    }
                }
            }
        }
    }
}

async fn save(
    repo: &dyn ProgressRepository,
    user: &UserId,
    document: &LearningDocument,
    clock: Clock,
    events: &UnboundedSender<SyncEvent>,
) {
    match repo.upsert(user, document, clock.now()).await {
        Ok(()) => {
            debug!(user = %user, "progress saved");
            let _ = events.send(SyncEvent::Saved);
        }
        Err(err) => {
            error!(user = %user, %err, "failed to save progress");
            let _ = events.send(SyncEvent::SaveFailed {
                reason: err.to_string(),
            });
        }
    }
}

async fn delete_record(
    repo: &dyn ProgressRepository,
    user: &UserId,
    events: &UnboundedSender<SyncEvent>,
) {
    match repo.delete(user).await {
        Ok(()) => {
            debug!(user = %user, "progress record deleted");
            let _ = events.send(SyncEvent::ResetComplete);
        }
        Err(err) => {
            error!(user = %user, %err, "failed to delete progress record");
            let _ = events.send(SyncEvent::ResetFailed {
                reason: err.to_string(),
            });
        }
    }
}
