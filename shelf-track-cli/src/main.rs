//! shelf-track CLI
//!
//! Interactive menu for managing a bookstore's book and author catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod menu;

use std::io;
use std::path::Path;

use clap::Parser;

use shelf_track_db::{DEFAULT_DATABASE_FILE, catalog_stats, open_database, seed_initial_data};

use crate::cli_types::Cli;
use crate::error::CliError;
use crate::menu::Menu;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let path = Path::new(DEFAULT_DATABASE_FILE);
    let conn = open_database(path)?;
    seed_initial_data(&conn)?;

    let stats = catalog_stats(&conn)?;
    log::info!(
        "Catalog: {} author(s), {} book(s), {} copies in stock",
        stats.authors,
        stats.books,
        stats.total_quantity
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&conn, stdin.lock(), stdout.lock()).run()
}
