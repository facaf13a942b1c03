// kanimal-gui/src/main.rs
//
// Entry point for the Kanimal GUI front-end. Parses arguments, sets up
// console + file logging, and dispatches to either the one-shot conversion
// (files given on the command line) or the interactive picker session.

mod cli;
mod commands;
mod logging;
mod session;
mod terminal;
mod view;

use clap::Parser;
use cli::Cli;
use kanimal_core::CancellationToken;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(|| PathBuf::from("logs"));
    if let Err(e) = logging::init(&log_dir) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    // Cooperative cancellation handle; the runner polls it while the
    // converter is alive.
    let cancel = CancellationToken::new();

    let result = if !cli.files.is_empty() && !cli.interactive {
        commands::convert::run_convert(&cli, &cancel)
    } else if std::io::stdin().is_terminal() {
        session::run_session(&cli, &cancel)
    } else {
        // No files and no terminal to ask on.
        Err(kanimal_core::CoreError::NoFilesSelected.into())
    };

    if let Err(e) = result {
        terminal::print_error("Fatal error", &format!("{e:#}"), None);
        process::exit(1);
    }
}
