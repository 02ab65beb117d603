// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Medbox: a disaster medical box triage game.
//!
//! The player packs a medical box for a fixed sequence of disaster
//! scenarios. Each dropped item is classified against the current disaster,
//! each turn is scored, and a final report sums the scenario scores.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Front-end (TUI / playthrough)   │
//! ├─────────────────────────────────────┤
//! │   Session (drops, turns, advance)   │
//! ├─────────────────────────────────────┤
//! │  Classification · Scoring · Report  │
//! ├─────────────────────────────────────┤
//! │      Catalog (static game data)     │
//! └─────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod error;
pub mod game;
pub mod playthrough;

pub use catalog::{Catalog, CatalogError};
pub use error::{GameError, GameResult};

// Re-export key game types at crate root for convenience
pub use game::{
    classify, Advance, Affinity, DisasterType, EquipmentItem, FinalReport, Outcome, Phase,
    Placement, Scenario, Session, Step, TurnResult,
};
pub use playthrough::{Playthrough, PlaythroughError};
