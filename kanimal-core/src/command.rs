//! Converter command assembly.
//!
//! Builds the `kanimal-cli` invocation from the current selection: the
//! platform executable name, the subcommand derived from the file types
//! present, the normalized input paths, and the `-o` output directory.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Converter executable name on Windows.
pub const CONVERTER_WINDOWS: &str = "kanimal-cli.exe";
/// Converter invocation on Mac/Linux (resolved relative to the working directory).
pub const CONVERTER_UNIX: &str = "./kanimal-cli";

/// Which way the batch is converted.
///
/// The classification is all-or-nothing: a single `.scml` file anywhere in
/// the batch selects the kanim direction for the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `.scml` sources present: pack into the kanim binary format.
    ToKanim,
    /// No `.scml` sources: unpack kanim assets into scml.
    ToScml,
}

impl Direction {
    /// Inspects the selection for any path with a `.scml` extension
    /// (case-insensitive).
    pub fn detect(paths: &[PathBuf]) -> Self {
        let has_scml = paths.iter().any(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("scml"))
        });
        if has_scml {
            Direction::ToKanim
        } else {
            Direction::ToScml
        }
    }

    /// The converter subcommand for this direction.
    pub fn subcommand(self) -> &'static str {
        match self {
            Direction::ToKanim => "kanim",
            Direction::ToScml => "scml",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::ToKanim => write!(f, "scml -> kanim"),
            Direction::ToScml => write!(f, "kanim -> scml"),
        }
    }
}

/// The converter executable for the host platform.
pub fn default_converter_program() -> &'static str {
    if cfg!(windows) {
        CONVERTER_WINDOWS
    } else {
        CONVERTER_UNIX
    }
}

/// A fully assembled converter invocation.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub direction: Direction,
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
}

impl CommandSpec {
    /// Assembles the invocation for a selection.
    ///
    /// `selected` are the paths as the user picked them (used for direction
    /// detection and output-directory derivation); `inputs` are the
    /// normalized paths produced by the rename pass, in the same order.
    pub fn assemble(
        config: &CoreConfig,
        selected: &[PathBuf],
        inputs: Vec<PathBuf>,
    ) -> CoreResult<Self> {
        let first = selected
            .first()
            .ok_or(CoreError::NoFilesSelected)?;

        let output_dir = match &config.output_dir {
            Some(dir) => dir.clone(),
            None => Path::new("output").join(output_stem(first)?),
        };

        let program = config
            .converter
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_converter_program()));

        Ok(Self {
            program,
            direction: Direction::detect(selected),
            inputs,
            output_dir,
        })
    }

    /// Arguments after the program name, in invocation order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![self.direction.subcommand().into()];
        args.extend(self.inputs.iter().map(|p| p.clone().into_os_string()));
        args.push("-o".into());
        args.push(self.output_dir.clone().into_os_string());
        args
    }

    /// The invocation rendered as one line for the log view.
    pub fn command_line(&self) -> String {
        let mut parts = vec![quote(&self.program.to_string_lossy())];
        for arg in self.args() {
            parts.push(quote(&arg.to_string_lossy()));
        }
        parts.join(" ")
    }

    /// Builds the `std::process::Command` for this invocation.
    pub fn to_command(&self) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command.args(self.args());
        command
    }
}

/// Derives the default output directory name from the first selected file:
/// its file name with the final extension removed.
fn output_stem(path: &Path) -> CoreResult<&std::ffi::OsStr> {
    path.file_stem().ok_or_else(|| {
        CoreError::PathError(format!(
            "Cannot derive an output directory from '{}'",
            path.display()
        ))
    })
}

fn quote(arg: &str) -> String {
    if arg.contains(char::is_whitespace) {
        format!("\"{arg}\"")
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_scml_anywhere_selects_kanim() {
        assert_eq!(
            Direction::detect(&paths(&["a.scml"])),
            Direction::ToKanim
        );
        assert_eq!(
            Direction::detect(&paths(&["a.bytes", "b.png", "c.SCML"])),
            Direction::ToKanim
        );
    }

    #[test]
    fn test_no_scml_selects_scml() {
        assert_eq!(
            Direction::detect(&paths(&["anim.bytes", "atlas.png"])),
            Direction::ToScml
        );
        assert_eq!(Direction::detect(&[]), Direction::ToScml);
    }

    #[test]
    #[cfg(not(windows))]
    fn test_assemble_mixed_batch() {
        let selected = paths(&["a.scml", "b.txt"]);
        let inputs = paths(&["a.scml", "b.bytes"]);
        let spec = CommandSpec::assemble(&CoreConfig::new(), &selected, inputs).unwrap();

        assert_eq!(
            spec.command_line(),
            "./kanimal-cli kanim a.scml b.bytes -o output/a"
        );
    }

    #[test]
    fn test_assemble_uses_output_override() {
        let config = CoreConfig {
            output_dir: Some(PathBuf::from("unpacked")),
            ..Default::default()
        };
        let selected = paths(&["anim.bytes"]);
        let spec =
            CommandSpec::assemble(&config, &selected, selected.clone()).unwrap();

        assert_eq!(spec.output_dir, PathBuf::from("unpacked"));
        assert_eq!(spec.direction, Direction::ToScml);
    }

    #[test]
    fn test_assemble_uses_converter_override() {
        let config = CoreConfig {
            converter: Some(PathBuf::from("/opt/kanimal/kanimal-cli")),
            ..Default::default()
        };
        let selected = paths(&["a.scml"]);
        let spec =
            CommandSpec::assemble(&config, &selected, selected.clone()).unwrap();

        assert_eq!(spec.program, PathBuf::from("/opt/kanimal/kanimal-cli"));
    }

    #[test]
    fn test_output_dir_from_short_names() {
        // Stems shorter than any extension length still derive cleanly.
        let selected = paths(&["a.txt"]);
        let inputs = paths(&["a.bytes"]);
        let spec = CommandSpec::assemble(&CoreConfig::new(), &selected, inputs).unwrap();
        assert_eq!(spec.output_dir, Path::new("output").join("a"));
    }

    #[test]
    fn test_assemble_rejects_empty_selection() {
        let result = CommandSpec::assemble(&CoreConfig::new(), &[], Vec::new());
        assert!(matches!(result, Err(CoreError::NoFilesSelected)));
    }

    #[test]
    fn test_command_line_quotes_spaces() {
        let selected = paths(&["my anim.scml"]);
        let spec = CommandSpec::assemble(
            &CoreConfig::new(),
            &selected,
            selected.clone(),
        )
        .unwrap();
        assert!(spec.command_line().contains("\"my anim.scml\""));
    }
}
