use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ids::{MilestoneId, MilestoneItemId};
use crate::model::origin::Origin;

/// A single checkable line inside a milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneItem {
    pub id: MilestoneItemId,
    pub text: String,
    pub completed: bool,
    #[serde(default)]
    pub origin: Origin,
}

impl MilestoneItem {
    /// Builds a user-added item with a fresh unique id.
    #[must_use]
    pub fn new_custom(text: impl Into<String>) -> Self {
        Self {
            id: MilestoneItemId::new(format!("milestone-item-{}", Uuid::new_v4())),
            text: text.into(),
            completed: false,
            origin: Origin::Custom,
        }
    }
}

/// A named goal tied to a month, made of checkable items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: MilestoneId,
    pub month: u32,
    pub title: String,
    pub items: Vec<MilestoneItem>,
    #[serde(default)]
    pub origin: Origin,
}

impl Milestone {
    /// Builds a user-added milestone with no items yet.
    #[must_use]
    pub fn new_custom(title: impl Into<String>, month: u32) -> Self {
        Self {
            id: MilestoneId::new(format!("milestone-custom-{}", Uuid::new_v4())),
            month,
            title: title.into(),
            items: Vec::new(),
            origin: Origin::Custom,
        }
    }

    pub fn item_mut(&mut self, item_id: &MilestoneItemId) -> Option<&mut MilestoneItem> {
        self.items.iter_mut().find(|i| &i.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_milestone_starts_empty() {
        let milestone = Milestone::new_custom("Read the Book", 2);
        assert!(milestone.id.as_str().contains("custom"));
        assert!(milestone.items.is_empty());
        assert_eq!(milestone.month, 2);
        assert_eq!(milestone.origin, Origin::Custom);
    }

    #[test]
    fn custom_item_id_keeps_legacy_marker() {
        let item = MilestoneItem::new_custom("Finish chapter 4");
        assert!(item.id.as_str().starts_with("milestone-item-"));
        assert_eq!(item.origin, Origin::Custom);
        assert!(!item.completed);
    }
}
