mod document;
mod ids;
mod milestone;
mod month;
mod origin;
mod project;
mod skill;

pub use document::{LearningDocument, SCHEMA_VERSION, WeeklyHoursEntry};
pub use ids::{
    CourseProjectId, MilestoneId, MilestoneItemId, MonthId, SkillId, TaskId, UserId, WeekId,
};
pub use milestone::{Milestone, MilestoneItem};
pub use month::{
    DailyTask, Month, MonthSummary, ProjectTask, Reflection, ReflectionField, Week, WeekProject,
};
pub use origin::Origin;
pub use project::CourseProject;
pub use skill::SkillAssessment;
