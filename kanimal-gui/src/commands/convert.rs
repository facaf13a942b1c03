//! Implementation of the one-shot conversion run.
//!
//! Used when files are given on the command line: the selection is
//! pre-populated from the arguments, one conversion runs, and the program
//! exits with the result.

use crate::cli::Cli;
use crate::terminal;
use crate::view::LogView;

use kanimal_core::{
    process_selection, CancellationToken, ConversionOutcome, Event, EventDispatcher,
    FileSelection, SystemRunner,
};

use std::sync::Arc;

/// Runs one conversion over the launch-argument selection.
pub fn run_convert(cli: &Cli, cancel: &CancellationToken) -> anyhow::Result<()> {
    let config = cli.core_config();
    config.validate()?;

    let mut selection = FileSelection::from_paths(cli.files.clone());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_handler(Arc::new(LogView::new()));

    terminal::print_section("SELECTION");
    for path in selection.paths() {
        terminal::print_log_line(&path.display().to_string());
        if !path.is_file() {
            dispatcher.emit(Event::Warning {
                message: format!("'{}' does not exist as a regular file", path.display()),
            });
        }
    }

    terminal::print_section("CONVERSION");
    let outcome = terminal::with_spinner("Running kanimal-cli", || {
        process_selection(
            &config,
            &mut selection,
            &SystemRunner::new(),
            &dispatcher,
            cancel,
        )
    })?;

    report_outcome(&outcome);
    Ok(())
}

/// Renders the closing summary for a successful run.
pub fn report_outcome(outcome: &ConversionOutcome) {
    terminal::print_success(&format!("Processed {} file(s)", outcome.file_count));
    terminal::print_status("Direction", &outcome.direction.to_string(), false);
    terminal::print_status(
        "Output directory",
        &outcome.output_dir.display().to_string(),
        false,
    );
    terminal::print_status("Completed", &outcome.finished_at, false);
    terminal::print_status(
        "Total time",
        &kanimal_core::format_duration(outcome.duration),
        true,
    );
}
