//! Run command implementation.

use super::output::{format_report_text, JsonReport};
use super::{load_catalog, CliError, OutputFormat};
use medbox::Playthrough;
use std::path::PathBuf;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the catalog or playthrough cannot be loaded, or the
/// playthrough is rejected by the game.
pub(crate) fn execute(
    playthrough: PathBuf,
    catalog: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let catalog = load_catalog(catalog.as_deref())?;
    let script = Playthrough::load(&playthrough).map_err(|e| {
        CliError::new(format!("Failed to read {}: {e}", playthrough.display()))
    })?;

    tracing::info!(
        "Replaying {} ({} turns)",
        playthrough.display(),
        script.turns.len()
    );

    let report = script.run(catalog.clone())?;

    match format {
        OutputFormat::Text => {
            print!("{}", format_report_text(&report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonReport::from_report(&report, &catalog))?;
            println!("{json}");
        }
    }

    Ok(())
}
