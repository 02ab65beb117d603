//! Classification of a dropped item against the current scenario.

use serde::{Deserialize, Serialize};

use crate::game::{Affinity, DisasterType, EquipmentItem};

/// Result of dropping a single item into the medical box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// Essential for this scenario (its own disaster or general-purpose).
    Correct,
    /// Essential, but for a different disaster.
    WrongScenario,
    /// Not a medical essential at all.
    Irrelevant,
}

impl Outcome {
    /// Whether this outcome earns points.
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }
}

/// Classify an item affinity against the current disaster.
///
/// Total over both enums: general items are always correct, `none` items
/// always irrelevant, and any other mismatch is a wrong-scenario pick.
#[must_use]
pub fn classify(affinity: Affinity, disaster: DisasterType) -> Outcome {
    if affinity.is_essential_for(disaster) {
        Outcome::Correct
    } else if affinity == Affinity::None {
        Outcome::Irrelevant
    } else {
        Outcome::WrongScenario
    }
}

/// An item in the medical box together with how it was classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The dropped item.
    pub item: EquipmentItem,
    /// Its classification for the scenario it was dropped in.
    pub outcome: Outcome,
}

impl Placement {
    /// Classify `item` for `disaster` and wrap the result.
    #[must_use]
    pub fn classify(item: EquipmentItem, disaster: DisasterType) -> Self {
        let outcome = classify(item.affinity, disaster);
        Self { item, outcome }
    }
}
