//! Game state: scenario position plus the history of scored turns.

use crate::error::{GameError, GameResult};
use crate::game::{Advance, Phase, Scenario, Sequencer, TurnResult};

/// Complete state of one game.
///
/// `history[i]` is the result for scenario `i`. The current scenario counts
/// as scored exactly when `history` has an entry at the current index.
#[derive(Debug, Clone)]
pub struct GameState {
    sequencer: Sequencer,
    history: Vec<TurnResult>,
}

impl GameState {
    /// Create a fresh game over the given scenarios.
    #[must_use]
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        let history = Vec::with_capacity(scenarios.len());
        Self {
            sequencer: Sequencer::new(scenarios),
            history,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// Index of the current scenario (scenario count once finished).
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.sequencer.index()
    }

    /// Number of scenarios in the game.
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.sequencer.len()
    }

    /// The scenario being played, or `None` once finished.
    #[must_use]
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.sequencer.current()
    }

    /// Whether another scenario follows the current one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.sequencer.has_next()
    }

    /// All scenarios in play order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        self.sequencer.scenarios()
    }

    /// Scored turns so far, in scenario order.
    #[must_use]
    pub fn history(&self) -> &[TurnResult] {
        &self.history
    }

    /// Result for the current scenario, if it has been scored.
    #[must_use]
    pub fn current_result(&self) -> Option<&TurnResult> {
        if self.is_game_over() {
            return None;
        }
        self.history.get(self.current_index())
    }

    /// Record the result of the current scenario.
    ///
    /// Recording twice before advancing replaces the earlier result.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyFinished`] once every scenario is played.
    pub fn record_turn(&mut self, result: TurnResult) -> GameResult<()> {
        let index = self.current_index();
        if self.is_game_over() {
            return Err(GameError::AlreadyFinished);
        }

        if let Some(slot) = self.history.get_mut(index) {
            *slot = result;
        } else {
            self.history.push(result);
        }
        Ok(())
    }

    /// Move on to the next scenario.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::TurnNotScored`] if the current scenario has no
    /// result yet, and [`GameError::AlreadyFinished`] past the last scenario.
    pub fn advance(&mut self) -> GameResult<Advance> {
        let Some(scenario) = self.current_scenario() else {
            return Err(GameError::AlreadyFinished);
        };

        if self.current_result().is_none() {
            return Err(GameError::TurnNotScored {
                scenario: scenario.disaster,
            });
        }

        self.sequencer.step().ok_or(GameError::AlreadyFinished)
    }

    /// Throw away all progress and start again from the first scenario.
    pub fn reset(&mut self) {
        self.sequencer.rewind();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DisasterType;

    fn create_test_game() -> GameState {
        GameState::new(
            DisasterType::ALL
                .iter()
                .map(|&d| Scenario::new(d.as_str(), d))
                .collect(),
        )
    }

    fn zero_turn(disaster: DisasterType) -> TurnResult {
        TurnResult::from_counts(disaster, 0, 0, 0)
    }

    #[test]
    fn test_game_state_creation() {
        let game = create_test_game();
        assert_eq!(game.phase(), Phase::Playing(0));
        assert_eq!(game.scenario_count(), 6);
        assert!(game.history().is_empty());
        assert!(game.current_result().is_none());
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_advance_requires_score() {
        let mut game = create_test_game();
        assert_eq!(
            game.advance(),
            Err(GameError::TurnNotScored {
                scenario: DisasterType::Earthquake
            })
        );
        assert_eq!(game.current_index(), 0);
    }

    #[test]
    fn test_record_twice_overwrites() {
        let mut game = create_test_game();
        game.record_turn(zero_turn(DisasterType::Earthquake)).unwrap();
        game.record_turn(TurnResult::from_counts(DisasterType::Earthquake, 1, 0, 0))
            .unwrap();

        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_result().unwrap().score, 10);
    }

    #[test]
    fn test_six_advances_finish() {
        let mut game = create_test_game();

        for (i, disaster) in DisasterType::ALL.iter().enumerate() {
            assert_eq!(game.history().len(), i);
            game.record_turn(zero_turn(*disaster)).unwrap();
            assert_eq!(game.history().len(), i + 1);

            let advance = game.advance().unwrap();
            if i + 1 < 6 {
                assert!(matches!(advance, Advance::Next(_)));
            } else {
                assert_eq!(advance, Advance::GameOver);
            }
        }

        assert!(game.is_game_over());
        assert_eq!(game.advance(), Err(GameError::AlreadyFinished));
        assert_eq!(
            game.record_turn(zero_turn(DisasterType::Chemical)),
            Err(GameError::AlreadyFinished)
        );
        assert_eq!(game.current_index(), 6);
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_reset() {
        let mut game = create_test_game();
        game.record_turn(zero_turn(DisasterType::Earthquake)).unwrap();
        let _ = game.advance().unwrap();

        game.reset();
        assert_eq!(game.phase(), Phase::Playing(0));
        assert!(game.history().is_empty());
    }
}
