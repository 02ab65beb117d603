//! Session controller: the event API a front-end drives.
//!
//! A session owns one [`GameState`] and the contents of the medical box for
//! the current turn. Front-ends report drops, end turns and advance; the
//! session classifies, scores and keeps the state machine consistent.

use crate::catalog::Catalog;
use crate::error::{GameError, GameResult};
use crate::game::{
    finalize, score_turn, Advance, EquipmentItem, FinalReport, GameState, Phase, Placement,
    Scenario, TurnResult,
};

/// What the "next" action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The current turn was scored; the scenario is unchanged.
    Scored(TurnResult),
    /// The game moved on.
    Advanced(Advance),
}

/// One game from the first scenario to the final report.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    state: GameState,
    medical_box: Vec<Placement>,
}

impl Session {
    /// Start a new game at the first scenario of `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let state = GameState::new(catalog.scenarios().to_vec());
        Self {
            catalog,
            state,
            medical_box: Vec::new(),
        }
    }

    /// The catalog this session plays with.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The underlying game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The scenario being played, or `None` once finished.
    #[must_use]
    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.state.current_scenario()
    }

    /// Scored turns so far, in scenario order.
    #[must_use]
    pub fn history(&self) -> &[TurnResult] {
        self.state.history()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Result for the current scenario, if it has been scored.
    #[must_use]
    pub fn current_result(&self) -> Option<&TurnResult> {
        self.state.current_result()
    }

    /// Items in the medical box this turn, in drop order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.medical_box
    }

    /// Catalog items not yet dropped this turn.
    pub fn available_items(&self) -> impl Iterator<Item = &EquipmentItem> {
        self.catalog
            .equipment()
            .iter()
            .filter(|item| !self.is_placed(&item.name))
    }

    /// Whether the named item is already in the medical box.
    #[must_use]
    pub fn is_placed(&self, name: &str) -> bool {
        self.medical_box.iter().any(|p| p.item.name == name)
    }

    /// Drop an item into the medical box.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, the turn was already scored, the item is
    /// unknown, or it is already in the box.
    pub fn on_item_dropped(&mut self, name: &str) -> GameResult<Placement> {
        let scenario = self.current_scenario().ok_or(GameError::AlreadyFinished)?;
        let disaster = scenario.disaster;

        if self.current_result().is_some() {
            return Err(GameError::TurnAlreadyScored { scenario: disaster });
        }

        let item = self
            .catalog
            .item(name)
            .ok_or_else(|| GameError::UnknownItem(name.to_string()))?
            .clone();

        if self.is_placed(name) {
            return Err(GameError::ItemAlreadyPlaced(name.to_string()));
        }

        let placement = Placement::classify(item, disaster);
        tracing::debug!(
            "Dropped {} during {}: {:?}",
            placement.item.name,
            disaster,
            placement.outcome
        );
        self.medical_box.push(placement.clone());
        Ok(placement)
    }

    /// Score the current turn from the medical box contents.
    ///
    /// An empty box is valid and misses every essential. Ending the same turn
    /// again replaces the earlier result.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyFinished`] once every scenario is played.
    pub fn on_turn_end(&mut self) -> GameResult<TurnResult> {
        let scenario = self.current_scenario().ok_or(GameError::AlreadyFinished)?;
        let disaster = scenario.disaster;

        let result = score_turn(
            disaster,
            &self.medical_box,
            self.catalog.essentials_for(disaster),
        );
        self.state.record_turn(result)?;

        tracing::info!(
            "Scored {}: {} points (correct {}, incorrect {}, missed {})",
            disaster,
            result.score,
            result.correct,
            result.incorrect,
            result.missed
        );
        Ok(result)
    }

    /// Move on to the next scenario, emptying the medical box.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::TurnNotScored`] if the turn has not been ended and
    /// [`GameError::AlreadyFinished`] past the last scenario.
    pub fn on_advance(&mut self) -> GameResult<Advance> {
        let advance = self.state.advance()?;
        self.medical_box.clear();

        match &advance {
            Advance::Next(scenario) => tracing::info!("Next scenario: {}", scenario.name),
            Advance::GameOver => tracing::info!("All scenarios complete"),
        }
        Ok(advance)
    }

    /// The single "next" button: score the turn if needed, otherwise advance.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyFinished`] once every scenario is played.
    pub fn next_step(&mut self) -> GameResult<Step> {
        if self.current_result().is_none() {
            return self.on_turn_end().map(Step::Scored);
        }
        self.on_advance().map(Step::Advanced)
    }

    /// Final report, available once every scenario is played.
    #[must_use]
    pub fn final_report(&self) -> Option<FinalReport> {
        self.is_game_over().then(|| finalize(self.state.history()))
    }

    /// Discard all progress and start over at the first scenario.
    pub fn restart(&mut self) {
        self.state.reset();
        self.medical_box.clear();
        tracing::info!("Game restarted");
    }
}
