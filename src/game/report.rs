//! Final results across all scenarios.

use serde::{Deserialize, Serialize};

use crate::game::TurnResult;

/// Per-scenario results and the cumulative total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReport {
    /// One result per played scenario, in play order.
    pub per_scenario: Vec<TurnResult>,
    /// Sum of all scenario scores.
    pub total: i64,
}

impl FinalReport {
    /// Highest scoring scenario (the first one on ties).
    #[must_use]
    pub fn best(&self) -> Option<&TurnResult> {
        self.per_scenario
            .iter()
            .rev()
            .max_by_key(|result| result.score)
    }

    /// Lowest scoring scenario (the first one on ties).
    #[must_use]
    pub fn worst(&self) -> Option<&TurnResult> {
        self.per_scenario.iter().min_by_key(|result| result.score)
    }
}

/// Aggregate a history of scored turns.
#[must_use]
pub fn finalize(history: &[TurnResult]) -> FinalReport {
    FinalReport {
        per_scenario: history.to_vec(),
        total: history.iter().map(|result| i64::from(result.score)).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DisasterType;

    #[test]
    fn test_empty_history() {
        let report = finalize(&[]);
        assert!(report.per_scenario.is_empty());
        assert_eq!(report.total, 0);
        assert!(report.best().is_none());
    }

    #[test]
    fn test_total_and_extremes() {
        let history = [
            TurnResult::from_counts(DisasterType::Earthquake, 3, 1, 2),
            TurnResult::from_counts(DisasterType::Flood, 0, 0, 4),
            TurnResult::from_counts(DisasterType::Fire, 5, 0, 0),
        ];
        let report = finalize(&history);

        assert_eq!(report.total, 19 - 12 + 50);
        assert_eq!(report.best().unwrap().disaster, DisasterType::Fire);
        assert_eq!(report.worst().unwrap().disaster, DisasterType::Flood);
    }

    #[test]
    fn test_ties_pick_first() {
        let history = [
            TurnResult::from_counts(DisasterType::Tornado, 1, 0, 0),
            TurnResult::from_counts(DisasterType::Tsunami, 1, 0, 0),
        ];
        let report = finalize(&history);
        assert_eq!(report.best().unwrap().disaster, DisasterType::Tornado);
        assert_eq!(report.worst().unwrap().disaster, DisasterType::Tornado);
    }
}
