//! Moviemoji - CLI
//!
//! Emoji movie guessing game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use moviemoji::{
    catalog::{Catalog, loader::load_from_file},
    commands::run_simple,
    interactive::{App, run_tui},
    output::print_catalog_summary,
    session::Session,
};

#[derive(Parser)]
#[command(
    name = "moviemoji",
    about = "Guess the movie from its emoji clue - daily and infinite modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Custom catalog file (industry|title|emoji clue|hint|hint|hint per line)
    #[arg(short = 'c', long, global = true)]
    catalog: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,

    /// Show the catalog: industries, counts, and emoji clues (no titles)
    Catalog,
}

/// Load the catalog from the `--catalog` flag, falling back to the
/// embedded tables.
fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    match path {
        Some(path) => load_from_file(path),
        None => Ok(Catalog::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(cli.catalog.as_deref())?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = App::new(Session::new(catalog));
            run_tui(app)
        }
        Commands::Simple => run_simple(catalog).map_err(|e| anyhow::anyhow!(e)),
        Commands::Catalog => {
            print_catalog_summary(&catalog);
            Ok(())
        }
    }
}
