//! Output formatting utilities for CLI.

use medbox::game::{POINTS_CORRECT, POINTS_INCORRECT_PENALTY, ScoreBreakdown};
use medbox::{Catalog, DisasterType, FinalReport, Outcome, Placement, TurnResult};
use serde::Serialize;
use std::fmt::Write as _;

/// JSON-serializable final report.
#[derive(Debug, Serialize)]
pub(super) struct JsonReport {
    /// Per-scenario results in play order.
    pub(super) scenarios: Vec<JsonTurnResult>,
    /// Sum of all scenario scores.
    pub(super) total: i64,
}

/// JSON-serializable scenario result.
#[derive(Debug, Serialize)]
pub(super) struct JsonTurnResult {
    /// Scenario prompt.
    pub(super) name: String,
    /// Disaster type.
    pub(super) disaster: DisasterType,
    /// Net points.
    pub(super) score: i32,
    /// Correct items.
    pub(super) correct: u32,
    /// Wrong or irrelevant items.
    pub(super) incorrect: u32,
    /// Missed essentials.
    pub(super) missed: u32,
}

impl JsonReport {
    /// Create from a `FinalReport`, naming scenarios from the catalog.
    pub(super) fn from_report(report: &FinalReport, catalog: &Catalog) -> Self {
        Self {
            scenarios: report
                .per_scenario
                .iter()
                .enumerate()
                .map(|(i, result)| JsonTurnResult {
                    name: catalog
                        .scenarios()
                        .get(i)
                        .map_or_else(|| result.disaster.to_string(), |s| s.name.clone()),
                    disaster: result.disaster,
                    score: result.score,
                    correct: result.correct,
                    incorrect: result.incorrect,
                    missed: result.missed,
                })
                .collect(),
            total: report.total,
        }
    }
}

/// Upper-case disaster label used in messages.
pub(super) fn shout(disaster: DisasterType) -> String {
    disaster.as_str().to_uppercase()
}

/// Feedback line for a single drop.
pub(super) fn drop_message(placement: &Placement, disaster: DisasterType) -> String {
    let name = &placement.item.name;
    match placement.outcome {
        Outcome::Correct => format!(
            "{name} is a CORRECT match for {}! (+{POINTS_CORRECT} pts)",
            shout(disaster)
        ),
        Outcome::Irrelevant => format!(
            "{name} is NOT a medical essential. Penalty! ({POINTS_INCORRECT_PENALTY} pts)"
        ),
        Outcome::WrongScenario => format!(
            "{name} is NOT the top priority for {}. Penalty! ({POINTS_INCORRECT_PENALTY} pts)",
            shout(disaster)
        ),
    }
}

/// Score panel lines for one scored turn.
pub(super) fn turn_lines(result: &TurnResult) -> Vec<String> {
    let ScoreBreakdown {
        correct_points,
        incorrect_points,
        missed_points,
    } = result.breakdown();

    vec![
        format!("{} SCORE: {} points", shout(result.disaster), result.score),
        format!(
            "Correct Items Selected: {} (+{correct_points} pts)",
            result.correct
        ),
        format!(
            "Wrong/Non-Essential Items Added: {} ({incorrect_points} pts)",
            result.incorrect
        ),
        format!(
            "Essential Items Missed: {} ({missed_points} pts)",
            result.missed
        ),
    ]
}

/// Final results lines.
pub(super) fn report_lines(report: &FinalReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.per_scenario.len() + 2);
    for result in &report.per_scenario {
        lines.push(format!(
            "Disaster: {} - Score: {} points",
            shout(result.disaster),
            result.score
        ));
    }
    lines.push(String::new());
    lines.push(format!("TOTAL CUMULATIVE SCORE: {} points", report.total));
    lines
}

/// Format a final report as human-readable text.
pub(super) fn format_report_text(report: &FinalReport) -> String {
    let mut output = String::from("FINAL GAME RESULTS\n\n");

    for result in &report.per_scenario {
        for line in turn_lines(result) {
            let _ = writeln!(output, "  {line}");
        }
        output.push('\n');
    }
    for line in report_lines(report) {
        let _ = writeln!(output, "{line}");
    }

    if let (Some(best), Some(worst)) = (report.best(), report.worst()) {
        let _ = writeln!(
            output,
            "Best: {} ({})  Worst: {} ({})",
            shout(best.disaster),
            best.score,
            shout(worst.disaster),
            worst.score
        );
    }

    output
}

/// Format a catalog as human-readable text.
pub(super) fn format_catalog_text(catalog: &Catalog) -> String {
    let mut output = String::from("Scenarios:\n");

    for (i, scenario) in catalog.scenarios().iter().enumerate() {
        let _ = writeln!(
            output,
            "  {}. {} [{}] - {} essentials",
            i + 1,
            scenario.name,
            scenario.disaster,
            catalog.essentials_for(scenario.disaster)
        );
    }

    output.push_str("\nEquipment:\n");
    for item in catalog.equipment() {
        let _ = writeln!(output, "  {:<30} {}", item.name, item.affinity);
    }

    output
}
