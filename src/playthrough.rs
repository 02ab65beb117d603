//! Scripted playthroughs.
//!
//! Because the game is fully deterministic, a playthrough only needs the item
//! names dropped in each scenario, in drop order. Replaying it through a
//! fresh [`Session`] reproduces the exact same final report.
//!
//! Stored as pretty-printed JSON:
//!
//! ```json
//! { "turns": [["Splint", "Bandages"], [], ["Burn Gel"]] }
//! ```
//!
//! Scenarios past the last listed turn are played with an empty box.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::GameError;
use crate::game::{FinalReport, Session};

/// Errors raised while loading, saving or replaying a playthrough.
#[derive(Debug)]
pub enum PlaythroughError {
    /// File I/O failed.
    Io(io::Error),
    /// The file is not valid playthrough JSON.
    Parse(serde_json::Error),
    /// A drop or turn was rejected by the session.
    Game {
        /// Zero-based scenario index where replay failed.
        turn: usize,
        /// The rejected operation's error.
        error: GameError,
    },
    /// The playthrough lists more turns than the catalog has scenarios.
    TooManyTurns {
        /// Turns in the playthrough.
        turns: usize,
        /// Scenarios in the catalog.
        scenarios: usize,
    },
}

impl fmt::Display for PlaythroughError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaythroughError::Io(e) => write!(f, "playthrough I/O error: {e}"),
            PlaythroughError::Parse(e) => write!(f, "invalid playthrough: {e}"),
            PlaythroughError::Game { turn, error } => {
                write!(f, "turn {}: {error}", turn + 1)
            }
            PlaythroughError::TooManyTurns { turns, scenarios } => write!(
                f,
                "playthrough has {turns} turns but the catalog has {scenarios} scenarios"
            ),
        }
    }
}

impl std::error::Error for PlaythroughError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaythroughError::Io(e) => Some(e),
            PlaythroughError::Parse(e) => Some(e),
            PlaythroughError::Game { error, .. } => Some(error),
            PlaythroughError::TooManyTurns { .. } => None,
        }
    }
}

impl From<io::Error> for PlaythroughError {
    fn from(e: io::Error) -> Self {
        PlaythroughError::Io(e)
    }
}

impl From<serde_json::Error> for PlaythroughError {
    fn from(e: serde_json::Error) -> Self {
        PlaythroughError::Parse(e)
    }
}

/// Item names dropped per scenario, in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playthrough {
    /// One entry per scenario: the names dropped, in drop order.
    pub turns: Vec<Vec<String>>,
}

impl Playthrough {
    /// Create an empty playthrough.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drop to the turn currently being recorded.
    pub fn record_drop(&mut self, name: impl Into<String>) {
        if self.turns.is_empty() {
            self.turns.push(Vec::new());
        }
        if let Some(turn) = self.turns.last_mut() {
            turn.push(name.into());
        }
    }

    /// Close the turn being recorded; later drops go to the next scenario.
    pub fn end_turn(&mut self) {
        if self.turns.is_empty() {
            self.turns.push(Vec::new());
        }
        self.turns.push(Vec::new());
    }

    /// Drop the trailing empty turn left open by [`Playthrough::end_turn`].
    #[must_use]
    pub fn finished(mut self) -> Self {
        while self.turns.last().is_some_and(Vec::is_empty) {
            self.turns.pop();
        }
        self
    }

    /// Replay through a fresh session and return the final report.
    ///
    /// # Errors
    ///
    /// Fails if there are more turns than scenarios or the session rejects a
    /// drop (unknown item, duplicate drop).
    pub fn run(&self, catalog: Catalog) -> Result<FinalReport, PlaythroughError> {
        let scenarios = catalog.scenarios().len();
        if self.turns.len() > scenarios {
            return Err(PlaythroughError::TooManyTurns {
                turns: self.turns.len(),
                scenarios,
            });
        }

        let mut session = Session::new(catalog);

        for turn in 0..scenarios {
            let drops = self.turns.get(turn).map_or(&[][..], Vec::as_slice);
            for name in drops {
                session
                    .on_item_dropped(name)
                    .map_err(|error| PlaythroughError::Game { turn, error })?;
            }
            session
                .on_turn_end()
                .and_then(|_| session.on_advance())
                .map_err(|error| PlaythroughError::Game { turn, error })?;
        }

        session.final_report().ok_or(PlaythroughError::Game {
            turn: scenarios,
            error: GameError::AlreadyFinished,
        })
    }

    /// Save to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file I/O fails.
    pub fn save(&self, path: &Path) -> Result<(), PlaythroughError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, PlaythroughError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn turns(lists: &[&[&str]]) -> Playthrough {
        Playthrough {
            turns: lists
                .iter()
                .map(|names| names.iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    #[test]
    fn test_empty_playthrough_misses_everything() {
        let report = Playthrough::new().run(Catalog::standard()).unwrap();
        assert_eq!(report.per_scenario.len(), 6);
        // 6 essentials per scenario, -3 each
        assert_eq!(report.total, 6 * -18);
    }

    #[test]
    fn test_perfect_first_turn() {
        let playthrough = turns(&[&[
            "Splint",
            "Tourniquet",
            "Cervical Collar",
            "Bandages",
            "Antiseptic",
            "Flashlight",
        ]]);
        let report = playthrough.run(Catalog::standard()).unwrap();
        assert_eq!(report.per_scenario[0].score, 60);
        assert_eq!(report.per_scenario[0].missed, 0);
    }

    #[test]
    fn test_too_many_turns() {
        let playthrough = Playthrough {
            turns: vec![Vec::new(); 7],
        };
        assert!(matches!(
            playthrough.run(Catalog::standard()),
            Err(PlaythroughError::TooManyTurns {
                turns: 7,
                scenarios: 6
            })
        ));
    }

    #[test]
    fn test_unknown_item_reports_turn() {
        let playthrough = turns(&[&[], &["Umbrella"]]);
        let err = playthrough.run(Catalog::standard()).unwrap_err();
        assert!(matches!(
            err,
            PlaythroughError::Game {
                turn: 1,
                error: GameError::UnknownItem(_)
            }
        ));
        assert_eq!(err.to_string(), "turn 2: unknown equipment item: Umbrella");
    }

    #[test]
    fn test_recording() {
        let mut playthrough = Playthrough::new();
        playthrough.record_drop("Splint");
        playthrough.end_turn();
        playthrough.end_turn();
        playthrough.record_drop("Burn Gel");
        playthrough.end_turn();

        assert_eq!(
            playthrough.finished(),
            turns(&[&["Splint"], &[], &["Burn Gel"]])
        );
    }

    #[test]
    fn test_end_turn_without_drops() {
        let mut playthrough = Playthrough::new();
        playthrough.end_turn();
        playthrough.record_drop("Life Jacket");

        assert_eq!(playthrough, turns(&[&[], &["Life Jacket"]]));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let playthrough = turns(&[&["Splint", "Perfume"], &["Thermal Blanket"]]);

        let file = NamedTempFile::new().unwrap();
        playthrough.save(file.path()).unwrap();
        let loaded = Playthrough::load(file.path()).unwrap();

        assert_eq!(loaded, playthrough);
    }

    #[test]
    fn test_load_garbage() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), b"not json").unwrap();
        assert!(matches!(
            Playthrough::load(file.path()),
            Err(PlaythroughError::Parse(_))
        ));
    }
}
