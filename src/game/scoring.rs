//! Turn scoring.
//!
//! A turn is scored once the player is done packing the box for a scenario:
//! correct picks earn points, wrong or irrelevant picks and essentials left
//! behind cost points.

use serde::{Deserialize, Serialize};

use crate::game::{DisasterType, Outcome, Placement};

/// Points per correct item in the box.
pub const POINTS_CORRECT: i32 = 10;
/// Points per wrong-scenario or irrelevant item in the box.
pub const POINTS_INCORRECT_PENALTY: i32 = -5;
/// Points per essential item never dropped.
pub const POINTS_MISSED_PENALTY: i32 = -3;

/// Tally for one scored scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Disaster of the scored scenario.
    pub disaster: DisasterType,
    /// Net points for the turn.
    pub score: i32,
    /// Items classified correct.
    pub correct: u32,
    /// Items classified wrong-scenario or irrelevant.
    pub incorrect: u32,
    /// Essential items never dropped.
    pub missed: u32,
}

/// Points contributed by each category of a [`TurnResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Points earned by correct items.
    pub correct_points: i32,
    /// Penalty for wrong or irrelevant items.
    pub incorrect_points: i32,
    /// Penalty for missed essentials.
    pub missed_points: i32,
}

impl TurnResult {
    /// Build a result from raw counts, computing the score.
    #[must_use]
    pub fn from_counts(disaster: DisasterType, correct: u32, incorrect: u32, missed: u32) -> Self {
        Self {
            disaster,
            score: points(correct, incorrect, missed),
            correct,
            incorrect,
            missed,
        }
    }

    /// Per-category point contributions.
    #[must_use]
    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown {
            correct_points: scaled(self.correct, POINTS_CORRECT),
            incorrect_points: scaled(self.incorrect, POINTS_INCORRECT_PENALTY),
            missed_points: scaled(self.missed, POINTS_MISSED_PENALTY),
        }
    }
}

/// Net points for the given counts.
#[must_use]
pub fn points(correct: u32, incorrect: u32, missed: u32) -> i32 {
    scaled(correct, POINTS_CORRECT)
        .saturating_add(scaled(incorrect, POINTS_INCORRECT_PENALTY))
        .saturating_add(scaled(missed, POINTS_MISSED_PENALTY))
}

fn scaled(count: u32, per_item: i32) -> i32 {
    i32::try_from(count)
        .unwrap_or(i32::MAX)
        .saturating_mul(per_item)
}

/// Score the placements of one turn.
///
/// `total_essentials` is the number of catalog items essential for
/// `disaster`. Missed essentials are clamped at zero.
#[must_use]
pub fn score_turn(
    disaster: DisasterType,
    placements: &[Placement],
    total_essentials: u32,
) -> TurnResult {
    let mut correct = 0u32;
    let mut incorrect = 0u32;

    for placement in placements {
        match placement.outcome {
            Outcome::Correct => correct += 1,
            Outcome::WrongScenario | Outcome::Irrelevant => incorrect += 1,
        }
    }

    let missed = total_essentials.saturating_sub(correct);

    TurnResult::from_counts(disaster, correct, incorrect, missed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Affinity, EquipmentItem};

    fn drop_item(name: &str, affinity: Affinity, disaster: DisasterType) -> Placement {
        Placement::classify(EquipmentItem::new(name, affinity), disaster)
    }

    #[test]
    fn test_earthquake_mixed_turn() {
        let quake = DisasterType::Earthquake;
        let placements = vec![
            drop_item("Splint", Affinity::Earthquake, quake),
            drop_item("Tourniquet", Affinity::Earthquake, quake),
            drop_item("Bandages", Affinity::General, quake),
            drop_item("Life Jacket", Affinity::Flood, quake),
        ];

        // 3 earthquake items + 2 general items in the catalog
        let result = score_turn(quake, &placements, 5);

        assert_eq!(result.correct, 3);
        assert_eq!(result.incorrect, 1);
        assert_eq!(result.missed, 2);
        assert_eq!(result.score, 19);
    }

    #[test]
    fn test_empty_box_misses_everything() {
        let result = score_turn(DisasterType::Flood, &[], 4);
        assert_eq!(result.correct, 0);
        assert_eq!(result.incorrect, 0);
        assert_eq!(result.missed, 4);
        assert_eq!(result.score, -12);
    }

    #[test]
    fn test_missed_clamped_at_zero() {
        let fire = DisasterType::Fire;
        let placements = vec![
            drop_item("Burn Gel", Affinity::Fire, fire),
            drop_item("Smoke Mask", Affinity::Fire, fire),
        ];

        let result = score_turn(fire, &placements, 1);
        assert_eq!(result.missed, 0);
        assert_eq!(result.score, 20);
    }

    #[test]
    fn test_irrelevant_counts_as_incorrect() {
        let placements = vec![drop_item("Teddy Bear", Affinity::None, DisasterType::Tornado)];
        let result = score_turn(DisasterType::Tornado, &placements, 0);
        assert_eq!(result.incorrect, 1);
        assert_eq!(result.score, -5);
    }

    #[test]
    fn test_breakdown_sums_to_score() {
        let result = TurnResult::from_counts(DisasterType::Tsunami, 4, 2, 3);
        let breakdown = result.breakdown();

        assert_eq!(breakdown.correct_points, 40);
        assert_eq!(breakdown.incorrect_points, -10);
        assert_eq!(breakdown.missed_points, -9);
        assert_eq!(
            breakdown.correct_points + breakdown.incorrect_points + breakdown.missed_points,
            result.score
        );
    }
}
