//! Error types for the game core.

use std::fmt;

use crate::game::DisasterType;

/// Contract violations raised by the session and the scenario sequencer.
///
/// Classification itself never fails; these only describe events that arrive
/// in a state where they make no sense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already reached its final scenario and was advanced past it.
    AlreadyFinished,
    /// Advance was requested before the current scenario was scored.
    TurnNotScored {
        /// Disaster of the unscored scenario.
        scenario: DisasterType,
    },
    /// An item was dropped after the current scenario was already scored.
    TurnAlreadyScored {
        /// Disaster of the scored scenario.
        scenario: DisasterType,
    },
    /// The dropped item is not in the equipment catalog.
    UnknownItem(String),
    /// The item is already in the medical box for this turn.
    ItemAlreadyPlaced(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AlreadyFinished => write!(f, "all scenarios are already complete"),
            GameError::TurnNotScored { scenario } => {
                write!(f, "the {scenario} turn has not been scored yet")
            }
            GameError::TurnAlreadyScored { scenario } => {
                write!(f, "the {scenario} turn was already scored")
            }
            GameError::UnknownItem(name) => write!(f, "unknown equipment item: {name}"),
            GameError::ItemAlreadyPlaced(name) => {
                write!(f, "{name} is already in the medical box")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Result type for session and sequencer operations.
pub type GameResult<T> = Result<T, GameError>;
