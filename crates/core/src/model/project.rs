use serde::{Deserialize, Serialize};

use crate::model::ids::CourseProjectId;

/// A standalone project from the course catalogue, tracked outside the
/// month/week tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProject {
    pub id: CourseProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tools: Vec<String>,
    pub estimated_hours: f64,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}
