//! Linear walk over the scenario list.

use crate::game::Scenario;

/// Where the game currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Playing the scenario at this index.
    Playing(usize),
    /// Every scenario has been played.
    Finished,
}

/// Outcome of moving past the current scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The next scenario to play.
    Next(Scenario),
    /// That was the last scenario.
    GameOver,
}

/// Ordered scenarios and the position within them.
///
/// The index runs from 0 to `len()`; reaching `len()` means finished.
#[derive(Debug, Clone)]
pub struct Sequencer {
    scenarios: Vec<Scenario>,
    index: usize,
}

impl Sequencer {
    /// Start at the first scenario.
    #[must_use]
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios,
            index: 0,
        }
    }

    /// Number of scenarios in the game.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether there are no scenarios at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Index of the current scenario (`len()` once finished).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.index < self.scenarios.len() {
            Phase::Playing(self.index)
        } else {
            Phase::Finished
        }
    }

    /// The scenario being played, or `None` once finished.
    #[must_use]
    pub fn current(&self) -> Option<&Scenario> {
        self.scenarios.get(self.index)
    }

    /// Whether another scenario follows the current one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.scenarios.len()
    }

    /// All scenarios in play order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Step past the current scenario.
    ///
    /// Returns `None` if already finished; the index is left untouched.
    pub(crate) fn step(&mut self) -> Option<Advance> {
        if self.index >= self.scenarios.len() {
            return None;
        }

        self.index += 1;
        Some(match self.scenarios.get(self.index) {
            Some(next) => Advance::Next(next.clone()),
            None => Advance::GameOver,
        })
    }

    /// Go back to the first scenario.
    pub(crate) fn rewind(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::DisasterType;

    fn two_scenarios() -> Sequencer {
        Sequencer::new(vec![
            Scenario::new("Quake", DisasterType::Earthquake),
            Scenario::new("Flood", DisasterType::Flood),
        ])
    }

    #[test]
    fn test_starts_playing_first() {
        let seq = two_scenarios();
        assert_eq!(seq.phase(), Phase::Playing(0));
        assert_eq!(seq.current().unwrap().disaster, DisasterType::Earthquake);
        assert!(seq.has_next());
    }

    #[test]
    fn test_steps_to_finished() {
        let mut seq = two_scenarios();

        let next = seq.step().unwrap();
        assert!(matches!(next, Advance::Next(ref s) if s.disaster == DisasterType::Flood));
        assert!(!seq.has_next());

        assert_eq!(seq.step(), Some(Advance::GameOver));
        assert_eq!(seq.phase(), Phase::Finished);
        assert!(seq.current().is_none());

        assert_eq!(seq.step(), None);
        assert_eq!(seq.index(), 2);
    }

    #[test]
    fn test_rewind() {
        let mut seq = two_scenarios();
        let _ = seq.step();
        seq.rewind();
        assert_eq!(seq.phase(), Phase::Playing(0));
    }
}
