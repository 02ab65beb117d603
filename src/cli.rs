//! CLI command implementations for Medbox.

pub(crate) mod catalog;
pub(crate) mod logging;
pub(crate) mod play;
pub(crate) mod run;

mod output;

use clap::ValueEnum;
use medbox::Catalog;
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format for the `run` and `catalog` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<medbox::CatalogError> for CliError {
    fn from(e: medbox::CatalogError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<medbox::PlaythroughError> for CliError {
    fn from(e: medbox::PlaythroughError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Load the catalog from `path`, or the standard catalog if none is given.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    match path {
        Some(path) => Catalog::load(path).map_err(|e| {
            CliError::new(format!("Failed to load {}: {e}", path.display()))
        }),
        None => Ok(Catalog::standard()),
    }
}
