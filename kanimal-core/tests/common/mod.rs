//! Shared test doubles for pipeline tests.

use kanimal_core::error::command_failed_error;
use kanimal_core::{
    CancellationToken, CommandSpec, ConverterRunner, CoreError, CoreResult, ProcessResult,
};
use std::cell::RefCell;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::time::Duration;

/// What the mock converter should pretend happened.
pub enum MockResponse {
    Success {
        stdout: &'static str,
        stderr: &'static str,
    },
    Exit(i32),
    SpawnFailure,
}

/// `ConverterRunner` double that records every command line it is handed.
pub struct MockRunner {
    calls: RefCell<Vec<String>>,
    response: MockResponse,
}

impl MockRunner {
    pub fn with_response(response: MockResponse) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            response,
        }
    }

    pub fn succeeding() -> Self {
        Self::with_response(MockResponse::Success {
            stdout: "converted 1 animation\n",
            stderr: "",
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_command(&self) -> Option<String> {
        self.calls.borrow().last().cloned()
    }
}

impl ConverterRunner for MockRunner {
    fn run(
        &self,
        spec: &CommandSpec,
        _cancel: &CancellationToken,
        _timeout: Option<Duration>,
    ) -> CoreResult<ProcessResult> {
        self.calls.borrow_mut().push(spec.command_line());
        let program = spec.program.to_string_lossy();
        match &self.response {
            MockResponse::Success { stdout, stderr } => Ok(ProcessResult {
                status: ExitStatus::from_raw(0),
                stdout: (*stdout).to_string(),
                stderr: (*stderr).to_string(),
            }),
            MockResponse::Exit(code) => Err(command_failed_error(
                &program,
                ExitStatus::from_raw(code << 8),
                "mock converter failure",
            )),
            MockResponse::SpawnFailure => Err(CoreError::CommandStart {
                program: program.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}
