//! Converter process execution.
//!
//! Encapsulates spawning the external `kanimal-cli` executable and waiting
//! for it. Execution goes through the `ConverterRunner` trait so the
//! processing pipeline can be driven by a mock in tests, the same dependency
//! injection seam used for the real binary in production.

use crate::command::CommandSpec;
use crate::error::{
    command_failed_error, command_start_error, command_wait_error, CoreError, CoreResult,
};
use std::io::Read;
use std::process::{ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How often the runner polls a running child for exit or cancellation.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Captured output of a completed converter process.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessResult {
    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// Cooperative cancellation handle shared between the invoking thread and
/// whoever requests the abort (a signal handler, another thread).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Something that can run an assembled converter invocation.
pub trait ConverterRunner {
    /// Runs the command to completion, honoring the cancellation token and
    /// the optional wait limit.
    ///
    /// Returns `Ok` only for a zero exit; a non-zero exit maps to
    /// `CoreError::CommandFailed` carrying the captured stderr.
    fn run(
        &self,
        spec: &CommandSpec,
        cancel: &CancellationToken,
        timeout: Option<Duration>,
    ) -> CoreResult<ProcessResult>;
}

/// `ConverterRunner` backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ConverterRunner for SystemRunner {
    fn run(
        &self,
        spec: &CommandSpec,
        cancel: &CancellationToken,
        timeout: Option<Duration>,
    ) -> CoreResult<ProcessResult> {
        let program = spec.program.to_string_lossy().to_string();
        log::debug!("Spawning converter: {}", spec.command_line());

        let mut child = spec
            .to_command()
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| command_start_error(&program, e))?;

        // Drain the pipes on reader threads so a chatty converter cannot
        // deadlock against a full pipe buffer while we poll for exit.
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let stdout_handle = std::thread::spawn(move || read_to_string(stdout_pipe));
        let stderr_handle = std::thread::spawn(move || read_to_string(stderr_pipe));

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if cancel.is_cancelled() {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(CoreError::Cancelled);
                    }
                    if let Some(limit) = timeout {
                        if started.elapsed() >= limit {
                            let _ = child.kill();
                            let _ = child.wait();
                            return Err(CoreError::CommandTimeout {
                                program,
                                seconds: limit.as_secs(),
                            });
                        }
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(e) => return Err(command_wait_error(&program, e)),
            }
        };

        let stdout = stdout_handle.join().unwrap_or_default();
        let stderr = stderr_handle.join().unwrap_or_default();

        if !status.success() {
            log::error!(
                "Converter failed with {}: {}",
                status,
                stderr.trim_end()
            );
            return Err(command_failed_error(&program, status, stderr));
        }

        Ok(ProcessResult {
            status,
            stdout,
            stderr,
        })
    }
}

fn read_to_string(pipe: Option<impl Read>) -> String {
    let mut text = String::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_string(&mut text);
    }
    text
}
