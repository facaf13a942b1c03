//! Logging setup for the front-end.
//!
//! Everything the user sees goes through the `log` facade: fern fans it out
//! to the console (the visible log view) and to a timestamped run log file.
//! Errors and warnings land on stderr, everything else on stdout. The level
//! is taken from `RUST_LOG` (default: info).

use anyhow::Context;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS",
/// used for unique run log file names.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Initializes the global logger. Returns the path of the run log file.
pub fn init(log_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(log_dir).with_context(|| {
        format!("Failed to create log directory '{}'", log_dir.display())
    })?;
    let log_path = log_dir.join(format!("kanimal_run_{}.log", get_timestamp()));

    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(log::LevelFilter::Info);

    let file_log = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .chain(fern::log_file(&log_path).with_context(|| {
            format!("Failed to create log file '{}'", log_path.display())
        })?);

    let stdout_log = fern::Dispatch::new()
        .filter(|meta| meta.level() > log::Level::Warn)
        .format(|out, message, _record| out.finish(format_args!("{message}")))
        .chain(std::io::stdout());

    let stderr_log = fern::Dispatch::new()
        .filter(|meta| meta.level() <= log::Level::Warn)
        .format(|out, message, _record| out.finish(format_args!("{message}")))
        .chain(std::io::stderr());

    fern::Dispatch::new()
        .level(level)
        .chain(file_log)
        .chain(stdout_log)
        .chain(stderr_log)
        .apply()
        .context("Logger was already initialized")?;

    log::debug!("Run log: {}", log_path.display());
    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let stamp = get_timestamp();
        assert_eq!(stamp.len(), 15);
        assert_eq!(&stamp[8..9], "_");
        assert!(stamp[..8].chars().all(|c| c.is_ascii_digit()));
    }
}
