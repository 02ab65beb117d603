//! Static game data: the scenario list and the equipment catalog.
//!
//! Both are fixed for the lifetime of a session. A catalog is either the
//! built-in [`Catalog::standard`] set or loaded from a JSON file of the form
//!
//! ```json
//! {
//!   "scenarios": [{ "name": "Earthquake", "disaster": "earthquake" }],
//!   "equipment": [{ "name": "Splint", "affinity": "earthquake" }]
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::{Affinity, DISASTER_COUNT, DisasterType, EquipmentItem, Scenario};

/// Errors raised while building or loading a catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    Io(io::Error),
    /// The catalog file is not valid catalog JSON.
    Parse(serde_json::Error),
    /// No scenarios were given.
    NoScenarios,
    /// No equipment items were given.
    NoEquipment,
    /// Two equipment items share a name.
    DuplicateItem(String),
    /// A scenario or item has an empty name.
    BlankName,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "failed to read catalog: {e}"),
            CatalogError::Parse(e) => write!(f, "invalid catalog: {e}"),
            CatalogError::NoScenarios => write!(f, "catalog has no scenarios"),
            CatalogError::NoEquipment => write!(f, "catalog has no equipment"),
            CatalogError::DuplicateItem(name) => {
                write!(f, "duplicate equipment item: {name}")
            }
            CatalogError::BlankName => write!(f, "catalog entry with an empty name"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(e: io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// On-disk shape of a catalog.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    scenarios: Vec<Scenario>,
    equipment: Vec<EquipmentItem>,
}

/// Validated scenarios and equipment, with essential counts precomputed.
#[derive(Debug, Clone)]
pub struct Catalog {
    scenarios: Vec<Scenario>,
    equipment: Vec<EquipmentItem>,
    essentials: [u32; DISASTER_COUNT],
}

impl Catalog {
    /// Build a catalog, validating its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if either list is empty, a name is blank, or two
    /// equipment items share a name.
    pub fn new(
        scenarios: Vec<Scenario>,
        equipment: Vec<EquipmentItem>,
    ) -> Result<Self, CatalogError> {
        if scenarios.is_empty() {
            return Err(CatalogError::NoScenarios);
        }
        if equipment.is_empty() {
            return Err(CatalogError::NoEquipment);
        }
        if scenarios.iter().any(|s| s.name.trim().is_empty()) {
            return Err(CatalogError::BlankName);
        }

        {
            let mut seen = HashSet::with_capacity(equipment.len());
            for item in &equipment {
                if item.name.trim().is_empty() {
                    return Err(CatalogError::BlankName);
                }
                if !seen.insert(item.name.as_str()) {
                    return Err(CatalogError::DuplicateItem(item.name.clone()));
                }
            }
        }

        let essentials = count_essentials(&equipment);

        Ok(Self {
            scenarios,
            equipment,
            essentials,
        })
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.scenarios, file.equipment)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded catalog from {}: {} scenarios, {} items",
            path.display(),
            catalog.scenarios.len(),
            catalog.equipment.len()
        );
        Ok(catalog)
    }

    /// Serialize the catalog back to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            scenarios: self.scenarios.clone(),
            equipment: self.equipment.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// The built-in six-scenario game.
    #[must_use]
    pub fn standard() -> Self {
        let scenarios = vec![
            Scenario::new(
                "Earthquake (Trauma, bleeding, broken bones)",
                DisasterType::Earthquake,
            ),
            Scenario::new(
                "Flash Flood (Water contamination, hypothermia, drowning risk)",
                DisasterType::Flood,
            ),
            Scenario::new(
                "Wildfire (Burn injuries, smoke inhalation, evacuation)",
                DisasterType::Fire,
            ),
            Scenario::new(
                "Tornado (Structural collapse, debris injuries)",
                DisasterType::Tornado,
            ),
            Scenario::new(
                "Tsunami (Water survival, large-scale trauma)",
                DisasterType::Tsunami,
            ),
            Scenario::new(
                "Chemical Spill (Airborne toxins, exposure)",
                DisasterType::Chemical,
            ),
        ];

        let equipment = [
            ("Splint", Affinity::Earthquake),
            ("Tourniquet", Affinity::Earthquake),
            ("Cervical Collar", Affinity::Earthquake),
            ("Water Purification Tablets", Affinity::Flood),
            ("Thermal Blanket", Affinity::Flood),
            ("Oral Rehydration Salts", Affinity::Flood),
            ("Burn Gel", Affinity::Fire),
            ("N95 Respirator", Affinity::Fire),
            ("Eye Wash", Affinity::Fire),
            ("Hard Hat", Affinity::Tornado),
            ("Emergency Whistle", Affinity::Tornado),
            ("Safety Goggles", Affinity::Tornado),
            ("Life Jacket", Affinity::Tsunami),
            ("Waterproof Dry Bag", Affinity::Tsunami),
            ("Pressure Dressing", Affinity::Tsunami),
            ("Gas Mask", Affinity::Chemical),
            ("Nitrile Gloves", Affinity::Chemical),
            ("Decontamination Wipes", Affinity::Chemical),
            ("Bandages", Affinity::General),
            ("Antiseptic", Affinity::General),
            ("Flashlight", Affinity::General),
            ("Teddy Bear", Affinity::None),
            ("Video Game Console", Affinity::None),
            ("Perfume", Affinity::None),
        ]
        .into_iter()
        .map(|(name, affinity)| EquipmentItem::new(name, affinity))
        .collect::<Vec<_>>();

        let essentials = count_essentials(&equipment);

        Self {
            scenarios,
            equipment,
            essentials,
        }
    }

    /// Scenarios in play order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// All equipment items in catalog order.
    #[must_use]
    pub fn equipment(&self) -> &[EquipmentItem] {
        &self.equipment
    }

    /// Look up an equipment item by name.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&EquipmentItem> {
        self.equipment.iter().find(|item| item.name == name)
    }

    /// Number of items essential for `disaster`.
    #[must_use]
    pub const fn essentials_for(&self, disaster: DisasterType) -> u32 {
        self.essentials[disaster.index()]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Count essential items per disaster.
fn count_essentials(equipment: &[EquipmentItem]) -> [u32; DISASTER_COUNT] {
    let mut counts = [0u32; DISASTER_COUNT];
    for disaster in DisasterType::ALL {
        let count = equipment
            .iter()
            .filter(|item| item.affinity.is_essential_for(disaster))
            .count();
        counts[disaster.index()] = u32::try_from(count).unwrap_or(u32::MAX);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.scenarios().len(), 6);

        let order: Vec<_> = catalog.scenarios().iter().map(|s| s.disaster).collect();
        assert_eq!(order, DisasterType::ALL.to_vec());

        // 3 specific + 3 general for every disaster
        for disaster in DisasterType::ALL {
            assert_eq!(catalog.essentials_for(disaster), 6);
        }
    }

    #[test]
    fn test_essentials_match_affinity_scan() {
        let catalog = Catalog::standard();
        for disaster in DisasterType::ALL {
            let scanned = catalog
                .equipment()
                .iter()
                .filter(|item| item.affinity.is_essential_for(disaster))
                .count();
            assert_eq!(catalog.essentials_for(disaster) as usize, scanned);
        }
    }

    #[test]
    fn test_item_lookup() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.item("Gas Mask").unwrap().affinity, Affinity::Chemical);
        assert!(catalog.item("Umbrella").is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "scenarios": [{ "name": "Quake", "disaster": "earthquake" }],
            "equipment": [
                { "name": "Splint", "affinity": "earthquake" },
                { "name": "Bandages", "affinity": "general" },
                { "name": "Life Jacket", "affinity": "flood" }
            ]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.scenarios().len(), 1);
        assert_eq!(catalog.essentials_for(DisasterType::Earthquake), 2);
        assert_eq!(catalog.essentials_for(DisasterType::Flood), 2);
        assert_eq!(catalog.essentials_for(DisasterType::Fire), 1);
    }

    #[test]
    fn test_json_round_trip_preserves_catalog() {
        let catalog = Catalog::standard();
        let reloaded = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();
        assert_eq!(reloaded.scenarios(), catalog.scenarios());
        assert_eq!(reloaded.equipment(), catalog.equipment());
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = Catalog::new(
            vec![Scenario::new("Fire", DisasterType::Fire)],
            vec![
                EquipmentItem::new("Burn Gel", Affinity::Fire),
                EquipmentItem::new("Burn Gel", Affinity::General),
            ],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateItem(name)) if name == "Burn Gel"));
    }

    #[test]
    fn test_rejects_empty_lists() {
        let no_scenarios = Catalog::new(vec![], vec![EquipmentItem::new("X", Affinity::None)]);
        assert!(matches!(no_scenarios, Err(CatalogError::NoScenarios)));

        let no_equipment = Catalog::new(vec![Scenario::new("Fire", DisasterType::Fire)], vec![]);
        assert!(matches!(no_equipment, Err(CatalogError::NoEquipment)));
    }

    #[test]
    fn test_rejects_blank_name() {
        let result = Catalog::new(
            vec![Scenario::new("Fire", DisasterType::Fire)],
            vec![EquipmentItem::new("  ", Affinity::Fire)],
        );
        assert!(matches!(result, Err(CatalogError::BlankName)));
    }

    #[test]
    fn test_unknown_affinity_is_parse_error() {
        let json = r#"{
            "scenarios": [{ "name": "Quake", "disaster": "earthquake" }],
            "equipment": [{ "name": "Rope", "affinity": "avalanche" }]
        }"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }
}
