use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ids::{MonthId, TaskId, WeekId};
use crate::model::origin::Origin;

/// One checkbox line in a week's daily plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTask {
    pub id: TaskId,
    pub day: String,
    pub topic: String,
    pub hours: f64,
    pub completed: bool,
    pub notes: String,
    #[serde(default)]
    pub origin: Origin,
}

impl DailyTask {
    /// Builds a user-added task with a fresh unique id.
    ///
    /// The id keeps the legacy `custom` marker so documents written by this
    /// version still satisfy the old clients' removability convention.
    #[must_use]
    pub fn new_custom(topic: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(format!("task-custom-{}", Uuid::new_v4())),
            day: day.into(),
            topic: topic.into(),
            hours: 0.0,
            completed: false,
            notes: String::new(),
            origin: Origin::Custom,
        }
    }
}

/// One checkbox line in a week's project plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTask {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
    #[serde(default)]
    pub origin: Origin,
}

impl ProjectTask {
    /// Builds a user-added project task with a fresh unique id.
    #[must_use]
    pub fn new_custom(description: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(format!("project-task-custom-{}", Uuid::new_v4())),
            description: description.into(),
            completed: false,
            origin: Origin::Custom,
        }
    }
}

/// The hands-on project attached to a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekProject {
    pub title: String,
    pub tasks: Vec<ProjectTask>,
    pub save_path: String,
}

/// Free-text retrospective fields for a week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub what_went_well: String,
    pub what_to_improve: String,
    pub key_insights: String,
}

/// Names one of the three reflection fields for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionField {
    WhatWentWell,
    WhatToImprove,
    KeyInsights,
}

impl Reflection {
    pub fn set(&mut self, field: ReflectionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ReflectionField::WhatWentWell => self.what_went_well = value,
            ReflectionField::WhatToImprove => self.what_to_improve = value,
            ReflectionField::KeyInsights => self.key_insights = value,
        }
    }
}

/// A single curriculum week: seven daily tasks, one project, a reflection.
///
/// `start_date` / `end_date` are display placeholders carried through from
/// the original document shape; nothing reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub id: WeekId,
    pub week_number: u32,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub daily_tasks: Vec<DailyTask>,
    pub project: WeekProject,
    pub reflection: Reflection,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_capstone: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Week {
    #[must_use]
    pub fn daily_task(&self, task_id: &TaskId) -> Option<&DailyTask> {
        self.daily_tasks.iter().find(|t| &t.id == task_id)
    }

    pub fn daily_task_mut(&mut self, task_id: &TaskId) -> Option<&mut DailyTask> {
        self.daily_tasks.iter_mut().find(|t| &t.id == task_id)
    }

    pub fn project_task_mut(&mut self, task_id: &TaskId) -> Option<&mut ProjectTask> {
        self.project.tasks.iter_mut().find(|t| &t.id == task_id)
    }

    #[must_use]
    pub fn completed_daily_tasks(&self) -> usize {
        self.daily_tasks.iter().filter(|t| t.completed).count()
    }
}

/// Month-level summary text, filled in by the user once a month wraps up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub total_hours: f64,
    pub skills_mastered: String,
    pub challenges_overcome: String,
}

/// A curriculum month grouping four weeks under one focus area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Month {
    pub id: MonthId,
    pub month_number: u32,
    pub title: String,
    pub focus_area: String,
    pub weeks: Vec<Week>,
    pub summary: MonthSummary,
}

impl Month {
    #[must_use]
    pub fn week(&self, week_id: &WeekId) -> Option<&Week> {
        self.weeks.iter().find(|w| &w.id == week_id)
    }

    pub fn week_mut(&mut self, week_id: &WeekId) -> Option<&mut Week> {
        self.weeks.iter_mut().find(|w| &w.id == week_id)
    }
}
