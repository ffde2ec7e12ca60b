use serde::{Deserialize, Serialize};

/// Whether an entity came from the static curriculum seed or was added by
/// the user at runtime.
///
/// Earlier clients encoded this as an id-substring convention
/// (`custom` / `milestone-item`); the explicit tag replaces that check.
/// Removal operations only touch `Custom` entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    #[default]
    Seed,
    Custom,
}

impl Origin {
    #[must_use]
    pub fn is_custom(self) -> bool {
        matches!(self, Origin::Custom)
    }

    /// Recovers the origin from the legacy id-naming convention, used when
    /// migrating documents persisted before the tag existed.
    #[must_use]
    pub fn from_legacy_id(id: &str, marker: &str) -> Self {
        if id.contains(marker) {
            Origin::Custom
        } else {
            Origin::Seed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_seed() {
        assert_eq!(Origin::default(), Origin::Seed);
        assert!(!Origin::Seed.is_custom());
    }

    #[test]
    fn legacy_ids_map_by_marker() {
        assert_eq!(
            Origin::from_legacy_id("task-custom-123", "custom"),
            Origin::Custom
        );
        assert_eq!(Origin::from_legacy_id("task-w1-mon", "custom"), Origin::Seed);
        assert_eq!(
            Origin::from_legacy_id("milestone-item-9", "milestone-item"),
            Origin::Custom
        );
        assert_eq!(Origin::from_legacy_id("m1-2", "milestone-item"), Origin::Seed);
    }
}
