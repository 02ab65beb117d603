//! Catalog command implementation.

use super::output::format_catalog_text;
use super::{load_catalog, CliError, OutputFormat};
use std::path::PathBuf;

/// Execute the catalog command.
///
/// Loading the catalog validates it, so this doubles as a catalog checker.
///
/// # Errors
///
/// Returns an error if the catalog file is missing or invalid.
pub(crate) fn execute(catalog: Option<PathBuf>, format: OutputFormat) -> Result<(), CliError> {
    let catalog = load_catalog(catalog.as_deref())?;

    match format {
        OutputFormat::Text => print!("{}", format_catalog_text(&catalog)),
        OutputFormat::Json => println!("{}", catalog.to_json()?),
    }

    Ok(())
}
