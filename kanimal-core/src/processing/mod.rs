//! The conversion pipeline.
//!
//! `process_selection` is the single entry point a front-end calls when the
//! user asks for a conversion: it validates the selection, performs the
//! `.txt` → `.bytes` rename pass, assembles the converter command, runs it,
//! and reports the outcome through the event dispatcher. The selection is
//! cleared only after a successful run; a failed run leaves it untouched so
//! the user can retry.

use crate::command::CommandSpec;
use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::events::{Event, EventDispatcher};
use crate::external::{CancellationToken, ConverterRunner};
use crate::selection::FileSelection;
use crate::{normalize, utils, ConversionOutcome};
use std::time::Instant;

/// Runs one conversion over the current selection.
///
/// An empty selection is a user-input error and short-circuits before any
/// filesystem or process work.
pub fn process_selection<R: ConverterRunner>(
    config: &CoreConfig,
    selection: &mut FileSelection,
    runner: &R,
    dispatcher: &EventDispatcher,
    cancel: &CancellationToken,
) -> CoreResult<ConversionOutcome> {
    if selection.is_empty() {
        return Err(CoreError::NoFilesSelected);
    }
    config.validate()?;

    let started = Instant::now();

    // Destructive by contract: renames happen before anything else looks at
    // the files, and the argument list reflects the renamed paths.
    let inputs = normalize::rename_txt_files(selection)?;
    let spec = CommandSpec::assemble(config, selection.paths(), inputs)?;

    dispatcher.emit(Event::ProcessingStarted {
        file_count: selection.len(),
        direction: spec.direction.to_string(),
    });

    let command_line = spec.command_line();
    log::debug!("Executing: {command_line}");
    dispatcher.emit(Event::CommandIssued {
        command_line: command_line.clone(),
    });

    let result = runner.run(&spec, cancel, config.timeout)?;

    let finished_at = utils::timestamp_now();
    dispatcher.emit(Event::ConverterOutput {
        stdout: result.stdout.clone(),
        stderr: result.stderr.clone(),
    });
    dispatcher.emit(Event::ProcessingComplete {
        timestamp: finished_at.clone(),
    });

    let outcome = ConversionOutcome {
        direction: spec.direction,
        file_count: selection.len(),
        command_line,
        output_dir: spec.output_dir.clone(),
        stdout: result.stdout,
        stderr: result.stderr,
        duration: started.elapsed(),
        finished_at,
    };

    selection.clear();
    dispatcher.emit(Event::SelectionChanged { files: Vec::new() });

    Ok(outcome)
}
