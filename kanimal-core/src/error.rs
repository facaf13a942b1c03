//! Error types for the kanimal-core library.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced while preparing or running a conversion.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No files selected")]
    NoFilesSelected,

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Failed to rename '{path}' to '{target}': {source}")]
    RenameFailed {
        path: PathBuf,
        target: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to start {program}: {source}")]
    CommandStart {
        program: String,
        source: std::io::Error,
    },

    #[error("Error waiting for {program}: {source}")]
    CommandWait {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} timed out after {seconds} seconds")]
    CommandTimeout { program: String, seconds: u64 },

    #[error("Conversion cancelled")]
    Cancelled,

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for kanimal-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a program that failed to spawn.
pub fn command_start_error(program: &str, source: std::io::Error) -> CoreError {
    CoreError::CommandStart {
        program: program.to_string(),
        source,
    }
}

/// Builds a `CommandWait` error for a program that could not be awaited.
pub fn command_wait_error(program: &str, source: std::io::Error) -> CoreError {
    CoreError::CommandWait {
        program: program.to_string(),
        source,
    }
}

/// Builds a `CommandFailed` error for a program that exited unsuccessfully.
pub fn command_failed_error(
    program: &str,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        program: program.to_string(),
        status,
        stderr: stderr.into(),
    }
}
