// kanimal-gui/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Kanimal GUI: front-end for the kanimal-cli converter",
    long_about = "Collects animation files, renames .txt atlases to .bytes, and drives \
                  the external kanimal-cli executable to convert between scml and kanim."
)]
pub struct Cli {
    /// Files to pre-populate the selection with; when given, one conversion
    /// runs immediately and the program exits
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Directory handed to the converter via -o
    /// (defaults to output/<stem of the first selected file>)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Override the converter executable.
    /// Can also be set via the KANIMAL_CLI environment variable.
    #[arg(long, value_name = "PATH", env = "KANIMAL_CLI")]
    pub converter: Option<PathBuf>,

    /// Optional: Directory for run log files (defaults to logs/)
    #[arg(long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Stay in the interactive session even when files are given
    #[arg(long, default_value_t = false)]
    pub interactive: bool,
}

impl Cli {
    /// Builds the core configuration from the parsed arguments.
    pub fn core_config(&self) -> kanimal_core::CoreConfig {
        kanimal_core::CoreConfig {
            converter: self.converter.clone(),
            output_dir: self.output.clone(),
            timeout: None,
        }
    }
}
