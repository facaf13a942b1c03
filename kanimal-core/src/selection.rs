//! File selection state for the front-end.
//!
//! The selection is an ordered list of paths. An explicit pick replaces the
//! whole list; a dropped batch appends to it. Duplicates are allowed, and the
//! list is cleared after each successful conversion run.

use std::path::{Path, PathBuf};

/// What happened to a dropped batch of paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropReport {
    /// Paths that existed as regular files and were appended.
    pub added: usize,
    /// Paths that were discarded (missing, or not a regular file).
    pub discarded: usize,
}

/// Ordered list of files queued for the next conversion run.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    files: Vec<PathBuf>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from explicitly supplied paths (launch arguments
    /// or a picker result). No existence filtering is applied.
    pub fn from_paths(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Replaces the whole selection, as an explicit pick does.
    pub fn replace(&mut self, files: Vec<PathBuf>) {
        self.files = files;
    }

    /// Appends a dropped batch: a whitespace-separated string of paths.
    ///
    /// Only paths that exist as regular files are kept; everything else is
    /// discarded. The report says how many fell into each bucket.
    pub fn extend_from_drop(&mut self, data: &str) -> DropReport {
        let mut report = DropReport::default();
        for token in data.split_whitespace() {
            let path = Path::new(token);
            if path.is_file() {
                self.files.push(path.to_path_buf());
                report.added += 1;
            } else {
                report.discarded += 1;
            }
        }
        report
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn first(&self) -> Option<&PathBuf> {
        self.files.first()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_drop_keeps_only_existing_files() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("anim.scml");
        std::fs::write(&real, "data").unwrap();

        let mut selection = FileSelection::new();
        let data = format!(
            "{} {}",
            real.display(),
            dir.path().join("missing.scml").display()
        );
        let report = selection.extend_from_drop(&data);

        assert_eq!(report.added, 1);
        assert_eq!(report.discarded, 1);
        assert_eq!(selection.paths(), &[real]);
    }

    #[test]
    fn test_drop_discards_directories() {
        let dir = tempdir().unwrap();
        let mut selection = FileSelection::new();
        let report = selection.extend_from_drop(&dir.path().display().to_string());

        assert_eq!(report.added, 0);
        assert_eq!(report.discarded, 1);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_drop_appends_after_replace() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("a.scml");
        let second = dir.path().join("b.txt");
        std::fs::write(&first, "").unwrap();
        std::fs::write(&second, "").unwrap();

        let mut selection = FileSelection::from_paths(vec![first.clone()]);
        selection.extend_from_drop(&second.display().to_string());

        assert_eq!(selection.paths(), &[first, second]);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.scml");
        std::fs::write(&file, "").unwrap();

        let mut selection = FileSelection::new();
        let data = format!("{} {}", file.display(), file.display());
        let report = selection.extend_from_drop(&data);

        assert_eq!(report.added, 2);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_replace_discards_previous_selection() {
        let mut selection = FileSelection::from_paths(vec![PathBuf::from("old.scml")]);
        selection.replace(vec![PathBuf::from("new.scml")]);
        assert_eq!(selection.paths(), &[PathBuf::from("new.scml")]);
    }
}
