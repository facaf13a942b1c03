//! The log view: renders pipeline events into the terminal.
//!
//! Subscribed to the core event dispatcher so the rendering layer observes
//! state changes instead of the pipeline writing to the screen itself.

use crate::terminal;
use kanimal_core::{Event, EventHandler};

/// Event handler backing the visible, append-only log view.
#[derive(Debug, Default)]
pub struct LogView;

impl LogView {
    pub fn new() -> Self {
        Self
    }
}

impl EventHandler for LogView {
    fn handle(&self, event: &Event) {
        match event {
            Event::SelectionChanged { files } => {
                if files.is_empty() {
                    log::debug!("Selection cleared");
                } else {
                    terminal::print_log_line(&format!("Selection: {} file(s)", files.len()));
                    for file in files {
                        terminal::print_log_line(&format!("  {file}"));
                    }
                }
            }
            Event::FilesDropped { added, discarded } => {
                terminal::print_log_line(&format!("Added {added} dropped file(s)"));
                if *discarded > 0 {
                    terminal::print_warning(&format!(
                        "Ignored {discarded} dropped path(s) that are not existing files"
                    ));
                }
            }
            Event::ProcessingStarted {
                file_count,
                direction,
            } => {
                terminal::print_processing(&format!(
                    "Converting {file_count} file(s) ({direction})"
                ));
            }
            Event::CommandIssued { command_line } => {
                terminal::print_status("Command", command_line, false);
            }
            Event::ConverterOutput { stdout, stderr } => {
                for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
                    terminal::print_log_line(line);
                }
                for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
                    terminal::print_log_line(line);
                }
            }
            Event::ProcessingComplete { timestamp } => {
                terminal::print_log_line(&format!("Finished at {timestamp}"));
            }
            Event::Warning { message } => terminal::print_warning(message),
        }
    }
}
