use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ids::{CourseProjectId, MilestoneId, MilestoneItemId, TaskId, WeekId};
use crate::model::milestone::{Milestone, MilestoneItem};
use crate::model::month::{DailyTask, Month, ProjectTask, ReflectionField, Week};
use crate::model::origin::Origin;
use crate::model::project::CourseProject;
use crate::model::skill::SkillAssessment;

/// Current persisted document shape. Version 0 is the legacy shape without
/// origin tags; see [`LearningDocument::migrate_in_place`].
pub const SCHEMA_VERSION: u32 = 1;

/// One row of the weekly hours log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyHoursEntry {
    pub week: u32,
    pub target: f64,
    pub actual: f64,
    pub focus: String,
}

/// The full progress tree for one user.
///
/// This is the unit of persistence: the storage layer serializes it as one
/// opaque JSON document per user. All mutation goes through the methods
/// below; every mutation reports whether it actually changed anything so
/// callers can skip scheduling a save for no-op updates. Operations given
/// an unknown id are silent no-ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningDocument {
    #[serde(default)]
    pub schema_version: u32,
    pub start_date: NaiveDate,
    pub target_completion: NaiveDate,
    pub current_week: u32,
    pub months: Vec<Month>,
    pub milestones: Vec<Milestone>,
    pub skills: Vec<SkillAssessment>,
    pub weekly_hours_log: Vec<WeeklyHoursEntry>,
    #[serde(default)]
    pub course_projects: Vec<CourseProject>,
}

impl LearningDocument {
    // ─── Lookup helpers ────────────────────────────────────────────────────

    #[must_use]
    pub fn week(&self, week_id: &WeekId) -> Option<&Week> {
        self.months.iter().find_map(|m| m.week(week_id))
    }

    pub fn week_mut(&mut self, week_id: &WeekId) -> Option<&mut Week> {
        self.months.iter_mut().find_map(|m| m.week_mut(week_id))
    }

    pub fn milestone_mut(&mut self, milestone_id: &MilestoneId) -> Option<&mut Milestone> {
        self.milestones.iter_mut().find(|m| &m.id == milestone_id)
    }

    // ─── Toggles ───────────────────────────────────────────────────────────

    /// Flips `completed` on a daily task. Returns whether anything changed.
    pub fn toggle_daily_task(&mut self, week_id: &WeekId, task_id: &TaskId) -> bool {
        match self.week_mut(week_id).and_then(|w| w.daily_task_mut(task_id)) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Flips `completed` on a weekly-project task.
    pub fn toggle_project_task(&mut self, week_id: &WeekId, task_id: &TaskId) -> bool {
        match self.week_mut(week_id).and_then(|w| w.project_task_mut(task_id)) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Flips `completed` on a milestone item.
    pub fn toggle_milestone_item(
        &mut self,
        milestone_id: &MilestoneId,
        item_id: &MilestoneItemId,
    ) -> bool {
        match self.milestone_mut(milestone_id).and_then(|m| m.item_mut(item_id)) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Flips `completed` on a course project.
    pub fn toggle_course_project(&mut self, project_id: &CourseProjectId) -> bool {
        match self.course_projects.iter_mut().find(|p| &p.id == project_id) {
            Some(project) => {
                project.completed = !project.completed;
                true
            }
            None => false,
        }
    }

    // ─── Field updates ─────────────────────────────────────────────────────

    /// Sets logged hours on a daily task. Hours are taken as given; the
    /// caller is responsible for not passing negative values.
    pub fn update_daily_hours(&mut self, week_id: &WeekId, task_id: &TaskId, hours: f64) -> bool {
        match self.week_mut(week_id).and_then(|w| w.daily_task_mut(task_id)) {
            Some(task) => {
                task.hours = hours;
                true
            }
            None => false,
        }
    }

    /// Sets the free-text notes on a daily task.
    pub fn update_notes(
        &mut self,
        week_id: &WeekId,
        task_id: &TaskId,
        notes: impl Into<String>,
    ) -> bool {
        match self.week_mut(week_id).and_then(|w| w.daily_task_mut(task_id)) {
            Some(task) => {
                task.notes = notes.into();
                true
            }
            None => false,
        }
    }

    /// Sets one of the three named reflection fields on a week.
    pub fn update_reflection(
        &mut self,
        week_id: &WeekId,
        field: ReflectionField,
        value: impl Into<String>,
    ) -> bool {
        match self.week_mut(week_id) {
            Some(week) => {
                week.reflection.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Renames a milestone.
    pub fn update_milestone_title(
        &mut self,
        milestone_id: &MilestoneId,
        title: impl Into<String>,
    ) -> bool {
        match self.milestone_mut(milestone_id) {
            Some(milestone) => {
                milestone.title = title.into();
                true
            }
            None => false,
        }
    }

    // ─── Add / remove ──────────────────────────────────────────────────────

    /// Appends a custom daily task to a week. `day` defaults to `"Custom"`.
    /// Returns the generated id, or `None` if the week does not exist.
    pub fn add_daily_task(
        &mut self,
        week_id: &WeekId,
        topic: impl Into<String>,
        day: Option<String>,
    ) -> Option<TaskId> {
        let week = self.week_mut(week_id)?;
        let task = DailyTask::new_custom(topic, day.unwrap_or_else(|| "Custom".to_owned()));
        let id = task.id.clone();
        week.daily_tasks.push(task);
        Some(id)
    }

    /// Removes a custom daily task. Seed tasks are never removed.
    pub fn remove_daily_task(&mut self, week_id: &WeekId, task_id: &TaskId) -> bool {
        let Some(week) = self.week_mut(week_id) else {
            return false;
        };
        remove_custom(&mut week.daily_tasks, |t| (&t.id, t.origin), task_id)
    }

    /// Appends a custom task to a week's project.
    pub fn add_project_task(
        &mut self,
        week_id: &WeekId,
        description: impl Into<String>,
    ) -> Option<TaskId> {
        let week = self.week_mut(week_id)?;
        let task = ProjectTask::new_custom(description);
        let id = task.id.clone();
        week.project.tasks.push(task);
        Some(id)
    }

    /// Removes a custom project task. Seed tasks are never removed.
    pub fn remove_project_task(&mut self, week_id: &WeekId, task_id: &TaskId) -> bool {
        let Some(week) = self.week_mut(week_id) else {
            return false;
        };
        remove_custom(&mut week.project.tasks, |t| (&t.id, t.origin), task_id)
    }

    /// Appends a custom milestone with no items.
    pub fn add_milestone(&mut self, title: impl Into<String>, month: u32) -> MilestoneId {
        let milestone = Milestone::new_custom(title, month);
        let id = milestone.id.clone();
        self.milestones.push(milestone);
        id
    }

    /// Removes a custom milestone. Seed milestones are never removed.
    pub fn remove_milestone(&mut self, milestone_id: &MilestoneId) -> bool {
        remove_custom(&mut self.milestones, |m| (&m.id, m.origin), milestone_id)
    }

    /// Appends a custom item to a milestone.
    pub fn add_milestone_item(
        &mut self,
        milestone_id: &MilestoneId,
        text: impl Into<String>,
    ) -> Option<MilestoneItemId> {
        let milestone = self.milestone_mut(milestone_id)?;
        let item = MilestoneItem::new_custom(text);
        let id = item.id.clone();
        milestone.items.push(item);
        Some(id)
    }

    /// Removes a custom milestone item. Seed items are never removed.
    pub fn remove_milestone_item(
        &mut self,
        milestone_id: &MilestoneId,
        item_id: &MilestoneItemId,
    ) -> bool {
        let Some(milestone) = self.milestone_mut(milestone_id) else {
            return false;
        };
        remove_custom(&mut milestone.items, |i| (&i.id, i.origin), item_id)
    }

    // ─── Migration ─────────────────────────────────────────────────────────

    /// Upgrades a legacy (version 0) document in place.
    ///
    /// Version 0 predates the explicit origin tag, so origins are recovered
    /// from the id-naming convention those clients used: `custom` marks
    /// user-added tasks and milestones, `milestone-item` marks user-added
    /// milestone items. Returns whether a migration ran.
    pub fn migrate_in_place(&mut self) -> bool {
        if self.schema_version >= SCHEMA_VERSION {
            return false;
        }

        for month in &mut self.months {
            for week in &mut month.weeks {
                for task in &mut week.daily_tasks {
                    task.origin = Origin::from_legacy_id(task.id.as_str(), "custom");
                }
                for task in &mut week.project.tasks {
                    task.origin = Origin::from_legacy_id(task.id.as_str(), "custom");
                }
            }
        }
        for milestone in &mut self.milestones {
            milestone.origin = Origin::from_legacy_id(milestone.id.as_str(), "custom");
            for item in &mut milestone.items {
                item.origin = Origin::from_legacy_id(item.id.as_str(), "milestone-item");
            }
        }

        self.schema_version = SCHEMA_VERSION;
        true
    }
}

/// Removes the entry with the given id, but only if it is user-added.
fn remove_custom<T, I, F>(entries: &mut Vec<T>, key: F, id: &I) -> bool
where
    I: PartialEq,
    F: Fn(&T) -> (&I, Origin),
{
    let Some(pos) = entries.iter().position(|e| key(e).0 == id) else {
        return false;
    };
    if !key(&entries[pos]).1.is_custom() {
        return false;
    }
    entries.remove(pos);
    true
}
