use crate::error::EngineError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Line count of every file visited by a run, keyed by walk path.
pub type FileLineCount = hashbrown::HashMap<PathBuf, usize>;

/// Summed line counts keyed by extension (`""` for files without one).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtensionTotals(BTreeMap<String, usize>);

impl ExtensionTotals {
    #[must_use]
    pub fn get(&self, ext: &str) -> Option<usize> {
        self.0.get(ext).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum over every extension.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Entries in extension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(ext, lines)| (ext.as_str(), *lines))
    }

    fn add(&mut self, ext: String, lines: usize) {
        *self.0.entry(ext).or_insert(0) += lines;
    }
}

/// Outcome of a counting run.
///
/// `errors` is only populated in non-strict mode; a strict run returns the
/// first failure instead.
#[derive(Debug, Default)]
pub struct RunResult {
    pub files: FileLineCount,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn totals(&self) -> ExtensionTotals {
        aggregate(&self.files)
    }
}

/// Extension of a file: the file name from its last `.` inclusive, or `""`.
///
/// Only the final path component is inspected, so dots in directory names
/// never leak into the key. Unlike [`Path::extension`], a leading-dot name
/// such as `.gitignore` is its own extension.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    name.rfind('.')
        .map(|idx| name[idx..].to_string())
        .unwrap_or_default()
}

#[must_use]
pub fn aggregate(files: &FileLineCount) -> ExtensionTotals {
    let mut totals = ExtensionTotals::default();
    for (path, &lines) in files {
        totals.add(extension_of(path), lines);
    }
    totals
}
