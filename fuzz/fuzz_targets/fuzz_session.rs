#![no_main]

//! Session event fuzzer.
//!
//! Feeds arbitrary sequences of front-end events (drops, turn ends, advances,
//! next, restart) into a session and checks after every event that:
//! 1. No operation panics
//! 2. Session invariants hold
//! 3. Rejected events leave the state unchanged

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use medbox::game::check_invariants;
use medbox::{Catalog, Session};

/// A fuzzer-generated front-end event.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzEvent {
    /// Drop the catalog item at this index (wraps; past the end is unknown).
    Drop(u8),
    /// End the current turn.
    TurnEnd,
    /// Advance to the next scenario.
    Advance,
    /// Press the single "next" button.
    Next,
    /// Restart the game.
    Restart,
}

fuzz_target!(|events: Vec<FuzzEvent>| {
    let catalog = Catalog::standard();
    let item_count = catalog.equipment().len();
    let mut session = Session::new(catalog);

    for event in events.into_iter().take(200) {
        let index_before = session.state().current_index();
        let history_before = session.history().len();

        let rejected = match event {
            FuzzEvent::Drop(i) => {
                let i = usize::from(i) % (item_count + 1);
                let name = session
                    .catalog()
                    .equipment()
                    .get(i)
                    .map_or_else(|| "not-an-item".to_string(), |item| item.name.clone());
                session.on_item_dropped(&name).is_err()
            }
            FuzzEvent::TurnEnd => session.on_turn_end().is_err(),
            FuzzEvent::Advance => session.on_advance().is_err(),
            FuzzEvent::Next => session.next_step().is_err(),
            FuzzEvent::Restart => {
                session.restart();
                false
            }
        };

        if rejected {
            assert_eq!(session.state().current_index(), index_before);
            assert_eq!(session.history().len(), history_before);
        }

        let violations = check_invariants(&session);
        assert!(violations.is_empty(), "{event:?}: {violations:?}");

        if let Some(report) = session.final_report() {
            let sum: i64 = report.per_scenario.iter().map(|r| i64::from(r.score)).sum();
            assert_eq!(report.total, sum);
        }
    }
});
