//! Derived progress metrics.
//!
//! Everything here is a pure function of the current document, recomputed
//! on demand. Completion flags are the only input; nothing is cached.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{LearningDocument, Month, MonthId, WeekId};

/// Coarse month state derived from its task completion ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthStatus {
    NotStarted,
    InProgress,
    Complete,
}

impl MonthStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MonthStatus::NotStarted => "not-started",
            MonthStatus::InProgress => "in-progress",
            MonthStatus::Complete => "complete",
        }
    }
}

impl fmt::Display for MonthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hours credited for a completed checkbox that has no meaningful log.
const COMPLETED_TASK_FLOOR_HOURS: f64 = 0.5;

impl LearningDocument {
    /// Percentage of the week's daily tasks that are completed, rounded to
    /// the nearest integer. A week with no daily tasks (or an unknown id)
    /// reports 0.
    #[must_use]
    pub fn week_progress(&self, week_id: &WeekId) -> u32 {
        match self.week(week_id) {
            Some(week) => percent(week.completed_daily_tasks(), week.daily_tasks.len()),
            None => 0,
        }
    }

    /// Completion percentage across all daily tasks of a month.
    #[must_use]
    pub fn month_progress(&self, month_id: &MonthId) -> u32 {
        match self.months.iter().find(|m| &m.id == month_id) {
            Some(month) => {
                let (completed, total) = month_task_counts(month);
                percent(completed, total)
            }
            None => 0,
        }
    }

    /// Completion percentage across every daily task in the document.
    #[must_use]
    pub fn overall_progress(&self) -> u32 {
        let (completed, total) = self
            .months
            .iter()
            .map(month_task_counts)
            .fold((0, 0), |(c, t), (mc, mt)| (c + mc, t + mt));
        percent(completed, total)
    }

    /// Classifies a month from its progress percentage.
    #[must_use]
    pub fn month_status(&self, month_id: &MonthId) -> MonthStatus {
        match self.month_progress(month_id) {
            0 => MonthStatus::NotStarted,
            100 => MonthStatus::Complete,
            _ => MonthStatus::InProgress,
        }
    }

    /// Total invested hours, rounded to one decimal place.
    ///
    /// A completed daily task counts its logged hours but never less than
    /// half an hour; an incomplete one counts whatever was logged. Each
    /// completed weekly-project task adds half an hour, and each completed
    /// course project adds its estimate.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        let mut total = 0.0;

        for month in &self.months {
            for week in &month.weeks {
                for task in &week.daily_tasks {
                    if task.completed {
                        total += task.hours.max(COMPLETED_TASK_FLOOR_HOURS);
                    } else {
                        total += task.hours;
                    }
                }
                for task in &week.project.tasks {
                    if task.completed {
                        total += COMPLETED_TASK_FLOOR_HOURS;
                    }
                }
            }
        }

        for project in &self.course_projects {
            if project.completed {
                total += project.estimated_hours;
            }
        }

        (total * 10.0).round() / 10.0
    }
}

fn month_task_counts(month: &Month) -> (usize, usize) {
    month.weeks.iter().fold((0, 0), |(completed, total), week| {
        (
            completed + week.completed_daily_tasks(),
            total + week.daily_tasks.len(),
        )
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}
