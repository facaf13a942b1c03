//! Terminal output styling for the front-end.
//!
//! Provides consistent output with minimal symbols and consistent
//! spacing. All lines go through the `log` facade so the run log file sees
//! the same text the console does.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use owo_colors::OwoColorize;
use std::time::Duration;

/// Check if color should be used (respects NO_COLOR environment variable)
fn should_use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", title.to_uppercase().cyan());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

/// Print a processing step
pub fn print_processing(message: &str) {
    if should_use_color() {
        info!("  » {}", style(message).bold());
    } else {
        info!("  » {message}");
    }
}

/// Print key-value status information
pub fn print_status(label: &str, value: &str, emphasize: bool) {
    if emphasize && should_use_color() {
        info!("      {label}: {}", style(value).bold());
    } else {
        info!("      {label}: {value}");
    }
}

/// Print a plain line into the log view
pub fn print_log_line(text: &str) {
    info!("    {text}");
}

/// Print a success message
pub fn print_success(message: &str) {
    info!("");
    if should_use_color() {
        info!("  ✓ {}", message.green());
    } else {
        info!("  ✓ {message}");
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    if should_use_color() {
        warn!("  ⚠ {}", message.yellow());
    } else {
        warn!("  ⚠ {message}");
    }
}

/// Print an error block with an optional suggestion line
pub fn print_error(title: &str, message: &str, suggestion: Option<&str>) {
    error!("");
    if should_use_color() {
        error!("  ✗ {}", title.red().bold());
    } else {
        error!("  ✗ {title}");
    }
    error!("      {message}");
    if let Some(suggestion) = suggestion {
        error!("      {suggestion}");
    }
}

/// Runs a closure behind a spinner, clearing it when the closure returns.
///
/// The spinner draws on stderr, so log-view lines written meanwhile stay
/// intact on stdout.
pub fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = f();

    spinner.finish_and_clear();
    result
}
