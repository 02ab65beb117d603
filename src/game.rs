//! Game layer for Medbox.
//!
//! Implements the rules of the disaster medical box game:
//! - Disaster scenarios and equipment affinities
//! - Classification of each dropped item
//! - Turn scoring and the final report
//! - The scenario state machine and the session controller front-ends drive

mod classify;
mod disaster;
mod equipment;
mod invariants;
mod report;
mod scoring;
mod sequencer;
mod session;
mod state;

pub use classify::{classify, Outcome, Placement};
pub use disaster::{DisasterType, Scenario, DISASTER_COUNT};
pub use equipment::{Affinity, EquipmentItem};
pub use invariants::{check_invariants, InvariantViolation};
pub use report::{finalize, FinalReport};
pub use scoring::{
    points, score_turn, ScoreBreakdown, TurnResult, POINTS_CORRECT, POINTS_INCORRECT_PENALTY,
    POINTS_MISSED_PENALTY,
};
pub use sequencer::{Advance, Phase, Sequencer};
pub use session::{Session, Step};
pub use state::GameState;
