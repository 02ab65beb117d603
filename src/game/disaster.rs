//! Disaster types and the scenarios built on them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of distinct disaster types.
pub const DISASTER_COUNT: usize = 6;

/// The kind of disaster a scenario is about.
///
/// Decides which equipment counts as essential for the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterType {
    /// Trauma, bleeding, broken bones.
    Earthquake,
    /// Water contamination, hypothermia, drowning risk.
    Flood,
    /// Burn injuries, smoke inhalation, evacuation.
    Fire,
    /// Structural collapse, debris injuries.
    Tornado,
    /// Water survival, large-scale trauma.
    Tsunami,
    /// Airborne toxins, exposure.
    Chemical,
}

impl DisasterType {
    /// All disaster types in their canonical order.
    pub const ALL: [DisasterType; DISASTER_COUNT] = [
        DisasterType::Earthquake,
        DisasterType::Flood,
        DisasterType::Fire,
        DisasterType::Tornado,
        DisasterType::Tsunami,
        DisasterType::Chemical,
    ];

    /// Position of this type in [`DisasterType::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            DisasterType::Earthquake => 0,
            DisasterType::Flood => 1,
            DisasterType::Fire => 2,
            DisasterType::Tornado => 3,
            DisasterType::Tsunami => 4,
            DisasterType::Chemical => 5,
        }
    }

    /// Lowercase identifier, as used in catalog files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DisasterType::Earthquake => "earthquake",
            DisasterType::Flood => "flood",
            DisasterType::Fire => "fire",
            DisasterType::Tornado => "tornado",
            DisasterType::Tsunami => "tsunami",
            DisasterType::Chemical => "chemical",
        }
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One disaster scenario the player has to pack a medical box for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Prompt shown to the player.
    pub name: String,
    /// Disaster driving which items are essential.
    pub disaster: DisasterType,
}

impl Scenario {
    /// Create a scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, disaster: DisasterType) -> Self {
        Self {
            name: name.into(),
            disaster,
        }
    }
}
