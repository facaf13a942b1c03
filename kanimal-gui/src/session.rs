//! Interactive picker session.
//!
//! The terminal stand-in for the original window: a prompt loop where the
//! user picks files, pastes dropped path batches, watches the log view, and
//! triggers conversions. Picking replaces the selection; pasted batches
//! append, filtered to paths that exist as regular files.

use crate::cli::Cli;
use crate::commands::convert::report_outcome;
use crate::terminal;
use crate::view::LogView;

use kanimal_core::{
    process_selection, CancellationToken, CoreError, Event, EventDispatcher, FileSelection,
    SystemRunner,
};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::path::PathBuf;
use std::sync::Arc;

const ACTIONS: [&str; 6] = [
    "Pick files (replaces the selection)",
    "Add files (paste dropped paths)",
    "Show selection",
    "Convert",
    "Clear selection",
    "Quit",
];

/// Runs the prompt loop until the user quits.
pub fn run_session(cli: &Cli, cancel: &CancellationToken) -> anyhow::Result<()> {
    let config = cli.core_config();
    config.validate()?;

    let mut selection = FileSelection::from_paths(cli.files.clone());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_handler(Arc::new(LogView::new()));

    terminal::print_section("KANIMAL GUI");
    terminal::print_status("Converter", &converter_display(&config), false);
    if !selection.is_empty() {
        emit_selection(&dispatcher, &selection);
    }

    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(3)
            .interact()?;

        match choice {
            0 => {
                let line: String = Input::with_theme(&theme)
                    .with_prompt("Files (whitespace-separated paths)")
                    .allow_empty(true)
                    .interact_text()?;
                selection.replace(line.split_whitespace().map(PathBuf::from).collect());
                emit_selection(&dispatcher, &selection);
            }
            1 => {
                let line: String = Input::with_theme(&theme)
                    .with_prompt("Dropped paths")
                    .allow_empty(true)
                    .interact_text()?;
                let report = selection.extend_from_drop(&line);
                dispatcher.emit(Event::FilesDropped {
                    added: report.added,
                    discarded: report.discarded,
                });
                emit_selection(&dispatcher, &selection);
            }
            2 => emit_selection(&dispatcher, &selection),
            3 => {
                let result = terminal::with_spinner("Running kanimal-cli", || {
                    process_selection(
                        &config,
                        &mut selection,
                        &SystemRunner::new(),
                        &dispatcher,
                        cancel,
                    )
                });
                match result {
                    Ok(outcome) => report_outcome(&outcome),
                    Err(CoreError::NoFilesSelected) => terminal::print_error(
                        "Nothing to convert",
                        "The selection is empty - pick or add files first",
                        None,
                    ),
                    Err(e) => terminal::print_error(
                        "Conversion failed",
                        &e.to_string(),
                        Some("The selection is kept; fix the problem and convert again"),
                    ),
                }
            }
            4 => {
                selection.clear();
                dispatcher.emit(Event::SelectionChanged { files: Vec::new() });
                terminal::print_log_line("Selection cleared");
            }
            _ => break,
        }
    }

    Ok(())
}

fn emit_selection(dispatcher: &EventDispatcher, selection: &FileSelection) {
    if selection.is_empty() {
        terminal::print_log_line("Selection is empty");
    }
    dispatcher.emit(Event::SelectionChanged {
        files: selection
            .paths()
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
    });
}

fn converter_display(config: &kanimal_core::CoreConfig) -> String {
    config
        .converter
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| kanimal_core::default_converter_program().to_string())
}
