//! Medbox CLI - Play and replay the disaster medical box game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Medbox - Pack the right medical box for each disaster
#[derive(Parser, Debug)]
#[command(name = "medbox")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log game events to stderr (ignored by the interactive game)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the game interactively in the terminal
    Play {
        /// Catalog JSON file (default: built-in six scenarios)
        #[arg(short, long)]
        catalog: Option<std::path::PathBuf>,

        /// Save the playthrough to this file on exit (scenarios left unplayed
        /// replay with an empty box)
        #[arg(long)]
        record: Option<std::path::PathBuf>,
    },

    /// Replay a recorded playthrough and print the final report
    Run {
        /// Playthrough JSON file
        #[arg(required = true)]
        playthrough: std::path::PathBuf,

        /// Catalog JSON file (default: built-in six scenarios)
        #[arg(short, long)]
        catalog: Option<std::path::PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Show (and validate) a scenario and equipment catalog
    Catalog {
        /// Catalog JSON file (default: built-in six scenarios)
        #[arg(short, long)]
        catalog: Option<std::path::PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose
        && !matches!(args.command, Commands::Play { .. })
        && let Err(e) = cli::logging::init()
    {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match args.command {
        Commands::Play { catalog, record } => cli::play::execute(catalog, record),

        Commands::Run {
            playthrough,
            catalog,
            format,
        } => cli::run::execute(playthrough, catalog, format),

        Commands::Catalog { catalog, format } => cli::catalog::execute(catalog, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
