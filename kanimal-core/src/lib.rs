//! Core library for the Kanimal GUI converter front-end.
//!
//! This crate holds everything except presentation: the file selection the
//! user builds up, the `.txt` → `.bytes` normalization pass, assembly of the
//! `kanimal-cli` command line, and execution of the converter process.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use kanimal_core::{
//!     process_selection, CancellationToken, CoreConfig, EventDispatcher,
//!     FileSelection, SystemRunner,
//! };
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new();
//! let mut selection = FileSelection::from_paths(vec![PathBuf::from("anim.scml")]);
//! let outcome = process_selection(
//!     &config,
//!     &mut selection,
//!     &SystemRunner::new(),
//!     &EventDispatcher::new(),
//!     &CancellationToken::new(),
//! )
//! .unwrap();
//! println!("{}", outcome.command_line);
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod events;
pub mod external;
pub mod normalize;
pub mod processing;
pub mod selection;
pub mod utils;

// Re-exports for the public API
pub use command::{default_converter_program, CommandSpec, Direction};
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use events::{Event, EventDispatcher, EventHandler};
pub use external::{CancellationToken, ConverterRunner, ProcessResult, SystemRunner};
pub use processing::process_selection;
pub use selection::{DropReport, FileSelection};
pub use utils::format_duration;

use std::path::PathBuf;
use std::time::Duration;

/// Result of a successful conversion run.
///
/// Returned by `process_selection`; everything the front-end needs to report
/// the run and nothing that outlives it.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub direction: Direction,
    pub file_count: usize,
    pub command_line: String,
    pub output_dir: PathBuf,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    pub finished_at: String,
}
