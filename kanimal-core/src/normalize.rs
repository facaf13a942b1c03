//! Extension normalization: `.txt` → `.bytes`.
//!
//! The converter rejects `.txt` inputs, so every selected file with a
//! trailing `.txt` suffix (case-insensitive) is renamed on disk to the same
//! path with `.bytes` in its place. The rename happens before any other
//! validation, and the command arguments are produced by the same
//! substitution so they always reference the renamed files.

use crate::error::{CoreError, CoreResult};
use crate::selection::FileSelection;
use std::path::{Path, PathBuf};

const TXT_SUFFIX: &str = ".txt";
const BYTES_SUFFIX: &str = ".bytes";

/// Returns the `.bytes` counterpart for a path ending case-insensitively in
/// `.txt`, or `None` when the path needs no normalization.
pub fn bytes_counterpart(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    if name.len() < TXT_SUFFIX.len() {
        return None;
    }
    let (stem, suffix) = name.split_at(name.len() - TXT_SUFFIX.len());
    if suffix.eq_ignore_ascii_case(TXT_SUFFIX) {
        Some(path.with_file_name(format!("{stem}{BYTES_SUFFIX}")))
    } else {
        None
    }
}

/// Renames every `.txt` file in the selection to `.bytes` on disk and
/// returns the argument list for command assembly, in selection order.
///
/// Aborts on the first failed rename; files renamed before the failure stay
/// renamed.
pub fn rename_txt_files(selection: &FileSelection) -> CoreResult<Vec<PathBuf>> {
    let mut arguments = Vec::with_capacity(selection.len());
    for path in selection.paths() {
        match bytes_counterpart(path) {
            Some(target) => {
                log::debug!(
                    "Renaming '{}' to '{}'",
                    path.display(),
                    target.display()
                );
                std::fs::rename(path, &target).map_err(|source| CoreError::RenameFailed {
                    path: path.clone(),
                    target: target.clone(),
                    source,
                })?;
                arguments.push(target);
            }
            None => arguments.push(path.clone()),
        }
    }
    Ok(arguments)
}
