//! Session-scoped progress service.
//!
//! One `ProgressService` owns one user's in-memory document for the lifetime
//! of a session. Reads are answered from memory; every mutation applies to
//! the document first and then hands a snapshot to the sync worker, which
//! debounces the actual write. Mutations that change nothing schedule
//! nothing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{error, info};

use storage::repository::{ProgressRepository, Storage};
use tracker_core::Clock;
use tracker_core::model::{
    CourseProjectId, LearningDocument, MilestoneId, MilestoneItemId, MonthId, ReflectionField,
    TaskId, UserId, WeekId,
};
use tracker_core::MonthStatus;
use tracker_core::seed::seed_document;

use crate::error::ProgressServiceError;
use crate::events::SyncEvent;
use crate::sync::{self, SyncHandle};

pub struct ProgressService {
    document: LearningDocument,
    sync: SyncHandle,
}

impl ProgressService {
    /// Starts a session: loads the user's saved document (falling back to
    /// the seed when none exists or the load fails) and spawns the sync
    /// worker.
    pub async fn start(
        repo: Arc<dyn ProgressRepository>,
        user: UserId,
        clock: Clock,
        events: UnboundedSender<SyncEvent>,
        quiet_period: Duration,
    ) -> Self {
        let document = match repo.load(&user).await {
            Ok(Some(record)) => {
                let mut doc = record.document;
                if doc.migrate_in_place() {
                    info!(user = %user, "migrated saved progress to the current schema");
                }
                let _ = events.send(SyncEvent::Loaded);
                doc
            }
            Ok(None) => {
                info!(user = %user, "no saved progress found, starting from seed");
                let _ = events.send(SyncEvent::StartedFromSeed);
                seed_document()
            }
            Err(err) => {
                error!(user = %user, %err, "failed to load saved progress, starting from seed");
                let _ = events.send(SyncEvent::LoadFellBack {
                    reason: err.to_string(),
                });
                seed_document()
            }
        };

        let sync = sync::spawn(repo, user, clock, events, quiet_period);
        Self { document, sync }
    }

    /// Starts a session backed by `SQLite`, running migrations first.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the database cannot be opened or
    /// migrated. Later load/save failures are non-fatal and reported through
    /// `events` instead.
    pub async fn with_sqlite(
        database_url: &str,
        user: UserId,
        clock: Clock,
        events: UnboundedSender<SyncEvent>,
    ) -> Result<Self, ProgressServiceError> {
        let storage = Storage::sqlite(database_url).await?;
        Ok(Self::start(
            storage.progress,
            user,
            clock,
            events,
            sync::DEFAULT_QUIET_PERIOD,
        )
        .await)
    }

    // ─── Queries ───────────────────────────────────────────────────────────

    #[must_use]
    pub fn document(&self) -> &LearningDocument {
        &self.document
    }

    #[must_use]
    pub fn week_progress(&self, week_id: &WeekId) -> u32 {
        self.document.week_progress(week_id)
    }

    #[must_use]
    pub fn month_progress(&self, month_id: &MonthId) -> u32 {
        self.document.month_progress(month_id)
    }

    #[must_use]
    pub fn overall_progress(&self) -> u32 {
        self.document.overall_progress()
    }

    #[must_use]
    pub fn month_status(&self, month_id: &MonthId) -> MonthStatus {
        self.document.month_status(month_id)
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.document.total_hours()
    }

    // ─── Toggles ───────────────────────────────────────────────────────────

    pub fn toggle_daily_task(&mut self, week_id: &WeekId, task_id: &TaskId) -> bool {
        let changed = self.document.toggle_daily_task(week_id, task_id);
        self.save_if(changed)
    }

    pub fn toggle_project_task(&mut self, week_id: &WeekId, task_id: &TaskId) -> bool {
        let changed = self.document.toggle_project_task(week_id, task_id);
        self.save_if(changed)
    }

    pub fn toggle_milestone_item(
        &mut self,
        milestone_id: &MilestoneId,
        item_id: &MilestoneItemId,
    ) -> bool {
        let changed = self.document.toggle_milestone_item(milestone_id, item_id);
        self.save_if(changed)
    }

    pub fn toggle_course_project(&mut self, project_id: &CourseProjectId) -> bool {
        let changed = self.document.toggle_course_project(project_id);
        self.save_if(changed)
    }

    // ─── Field updates ─────────────────────────────────────────────────────

    pub fn update_daily_hours(&mut self, week_id: &WeekId, task_id: &TaskId, hours: f64) -> bool {
        let changed = self.document.update_daily_hours(week_id, task_id, hours);
        self.save_if(changed)
    }

    pub fn update_notes(
        &mut self,
        week_id: &WeekId,
        task_id: &TaskId,
        notes: impl Into<String>,
    ) -> bool {
        let changed = self.document.update_notes(week_id, task_id, notes);
        self.save_if(changed)
    }

    pub fn update_reflection(
        &mut self,
        week_id: &WeekId,
        field: ReflectionField,
        value: impl Into<String>,
    ) -> bool {
        let changed = self.document.update_reflection(week_id, field, value);
        self.save_if(changed)
    }

    pub fn update_milestone_title(
        &mut self,
        milestone_id: &MilestoneId,
        title: impl Into<String>,
    ) -> bool {
        let changed = self.document.update_milestone_title(milestone_id, title);
        self.save_if(changed)
    }

    // ─── Add / remove ──────────────────────────────────────────────────────

    pub fn add_daily_task(
        &mut self,
        week_id: &WeekId,
        topic: impl Into<String>,
        day: Option<String>,
    ) -> Option<TaskId> {
        let id = self.document.add_daily_task(week_id, topic, day);
        self.save_if(id.is_some());
        id
    }

    pub fn remove_daily_task(&mut self, week_id: &WeekId, task_id: &TaskId) -> bool {
        let changed = self.document.remove_daily_task(week_id, task_id);
        self.save_if(changed)
    }

    pub fn add_project_task(
        &mut self,
        week_id: &WeekId,
        description: impl Into<String>,
    ) -> Option<TaskId> {
        let id = self.document.add_project_task(week_id, description);
        self.save_if(id.is_some());
        id
    }

    pub fn remove_project_task(&mut self, week_id: &WeekId, task_id: &TaskId) -> bool {
        let changed = self.document.remove_project_task(week_id, task_id);
        self.save_if(changed)
    }

    pub fn add_milestone(&mut self, title: impl Into<String>, month: u32) -> MilestoneId {
        let id = self.document.add_milestone(title, month);
        self.save_if(true);
        id
    }

    pub fn remove_milestone(&mut self, milestone_id: &MilestoneId) -> bool {
        let changed = self.document.remove_milestone(milestone_id);
        self.save_if(changed)
    }

    pub fn add_milestone_item(
        &mut self,
        milestone_id: &MilestoneId,
        text: impl Into<String>,
    ) -> Option<MilestoneItemId> {
        let id = self.document.add_milestone_item(milestone_id, text);
        self.save_if(id.is_some());
        id
    }

    pub fn remove_milestone_item(
        &mut self,
        milestone_id: &MilestoneId,
        item_id: &MilestoneItemId,
    ) -> bool {
        let changed = self.document.remove_milestone_item(milestone_id, item_id);
        self.save_if(changed)
    }

    // ─── Reset ─────────────────────────────────────────────────────────────

    /// Replaces the document with a fresh seed and deletes the saved record.
    /// The reset discards any save still waiting out its quiet period.
    pub fn reset(&mut self) {
        self.document = seed_document();
        self.sync.reset();
    }

    fn save_if(&self, changed: bool) -> bool {
        if changed {
            self.sync.schedule_save(&self.document);
        }
        changed
    }
}
