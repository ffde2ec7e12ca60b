use serde::{Deserialize, Serialize};

use crate::model::ids::SkillId;

/// Self-assessed skill rating for one month's focus area.
///
/// `initial` / `final` are display-only; no derived metric reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillAssessment {
    pub id: SkillId,
    pub skill: String,
    pub month: u32,
    pub initial: f64,
    #[serde(rename = "final")]
    pub final_rating: f64,
}
