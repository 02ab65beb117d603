//! Session invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger for a session driven only through its public
//! operations. If they do, it indicates a bug in the state machine or the
//! scorer.

use std::collections::HashSet;

use crate::game::{points, Session};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all session invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(session: &Session) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let state = session.state();
    let index = state.current_index();
    let count = state.scenario_count();
    let history = state.history();

    if index > count {
        violations.push(InvariantViolation {
            message: format!("Scenario index {index} beyond scenario count {count}"),
        });
    }

    // Scored-but-not-advanced leaves one extra entry; finished leaves none
    let max_len = if state.is_game_over() { index } else { index + 1 };
    if history.len() < index || history.len() > max_len {
        violations.push(InvariantViolation {
            message: format!(
                "History has {} entries at scenario index {index}",
                history.len()
            ),
        });
    }

    for (i, result) in history.iter().enumerate() {
        let Some(scenario) = state.scenarios().get(i) else {
            violations.push(InvariantViolation {
                message: format!("History entry {i} has no scenario"),
            });
            continue;
        };

        if result.disaster != scenario.disaster {
            violations.push(InvariantViolation {
                message: format!(
                    "History entry {i} is for {} but scenario is {}",
                    result.disaster, scenario.disaster
                ),
            });
        }

        let expected = points(result.correct, result.incorrect, result.missed);
        if result.score != expected {
            violations.push(InvariantViolation {
                message: format!(
                    "History entry {i} scores {} but counts give {expected}",
                    result.score
                ),
            });
        }

        let essentials = session.catalog().essentials_for(result.disaster);
        if result.correct <= essentials && result.correct + result.missed != essentials {
            violations.push(InvariantViolation {
                message: format!(
                    "History entry {i}: correct {} + missed {} != {essentials} essentials",
                    result.correct, result.missed
                ),
            });
        }
    }

    let mut names = HashSet::new();
    for placement in session.placements() {
        if !names.insert(placement.item.name.as_str()) {
            violations.push(InvariantViolation {
                message: format!("{} placed twice in one turn", placement.item.name),
            });
        }
    }

    if state.is_game_over() && !session.placements().is_empty() {
        violations.push(InvariantViolation {
            message: "Medical box not empty after the last scenario".to_string(),
        });
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_fresh_session_clean() {
        let session = Session::new(Catalog::standard());
        assert!(check_invariants(&session).is_empty());
    }

    #[test]
    fn test_full_game_clean() {
        let mut session = Session::new(Catalog::standard());

        while !session.is_game_over() {
            for name in ["Bandages", "Splint", "Perfume"] {
                let _ = session.on_item_dropped(name);
            }
            assert!(check_invariants(&session).is_empty());
            session.next_step().unwrap();
            assert!(check_invariants(&session).is_empty());
            session.next_step().unwrap();
            assert!(check_invariants(&session).is_empty());
        }
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation {
            message: "boom".to_string(),
        };
        assert_eq!(violation.to_string(), "Invariant violation: boom");
    }
}
