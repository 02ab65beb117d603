//! Equipment items and their disaster affinity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::DisasterType;

/// What an equipment item is useful for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affinity {
    /// Essential for earthquakes.
    Earthquake,
    /// Essential for floods.
    Flood,
    /// Essential for wildfires.
    Fire,
    /// Essential for tornadoes.
    Tornado,
    /// Essential for tsunamis.
    Tsunami,
    /// Essential for chemical spills.
    Chemical,
    /// Essential for every scenario.
    General,
    /// Never a medical essential.
    None,
}

impl Affinity {
    /// The disaster this affinity is tied to, if it is disaster-specific.
    #[must_use]
    pub const fn disaster(self) -> Option<DisasterType> {
        match self {
            Affinity::Earthquake => Some(DisasterType::Earthquake),
            Affinity::Flood => Some(DisasterType::Flood),
            Affinity::Fire => Some(DisasterType::Fire),
            Affinity::Tornado => Some(DisasterType::Tornado),
            Affinity::Tsunami => Some(DisasterType::Tsunami),
            Affinity::Chemical => Some(DisasterType::Chemical),
            Affinity::General | Affinity::None => None,
        }
    }

    /// Whether an item with this affinity is essential for `disaster`.
    #[must_use]
    pub fn is_essential_for(self, disaster: DisasterType) -> bool {
        self == Affinity::General || self.disaster() == Some(disaster)
    }
}

impl From<DisasterType> for Affinity {
    fn from(disaster: DisasterType) -> Self {
        match disaster {
            DisasterType::Earthquake => Affinity::Earthquake,
            DisasterType::Flood => Affinity::Flood,
            DisasterType::Fire => Affinity::Fire,
            DisasterType::Tornado => Affinity::Tornado,
            DisasterType::Tsunami => Affinity::Tsunami,
            DisasterType::Chemical => Affinity::Chemical,
        }
    }
}

impl fmt::Display for Affinity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.disaster() {
            Some(disaster) => f.write_str(disaster.as_str()),
            None if *self == Affinity::General => f.write_str("general"),
            None => f.write_str("none"),
        }
    }
}

/// A labeled item the player can drop into the medical box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Label shown to the player; unique within a catalog.
    pub name: String,
    /// Which scenarios this item is essential for.
    pub affinity: Affinity,
}

impl EquipmentItem {
    /// Create an equipment item.
    #[must_use]
    pub fn new(name: impl Into<String>, affinity: Affinity) -> Self {
        Self {
            name: name.into(),
            affinity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_essential_everywhere() {
        for disaster in DisasterType::ALL {
            assert!(Affinity::General.is_essential_for(disaster));
            assert!(!Affinity::None.is_essential_for(disaster));
        }
    }

    #[test]
    fn test_disaster_round_trip() {
        for disaster in DisasterType::ALL {
            assert_eq!(Affinity::from(disaster).disaster(), Some(disaster));
        }
    }

    #[test]
    fn test_display_matches_serde() {
        let all = [
            Affinity::Earthquake,
            Affinity::Flood,
            Affinity::Fire,
            Affinity::Tornado,
            Affinity::Tsunami,
            Affinity::Chemical,
            Affinity::General,
            Affinity::None,
        ];
        for affinity in all {
            let json = serde_json::to_string(&affinity).unwrap();
            assert_eq!(json, format!("\"{affinity}\""));
        }
    }
}
