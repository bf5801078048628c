use std::path::{Path, PathBuf};

use thiserror::Error;

/// Command operators are pointed at when startup validation fails.
pub const CHECK_COMMAND: &str = "check-weights";

/// An artifact whose resolved path did not exist when checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingArtifact {
    pub name: String,
    pub path: PathBuf,
}

impl MissingArtifact {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

/// Required artifacts absent from both the current and the legacy root.
///
/// Entries keep the artifact set's order. The value is never empty: validation
/// returns `Ok(())` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing model files:\n{}\n\nRun: {}", listing(.entries), CHECK_COMMAND)]
pub struct MissingArtifacts {
    entries: Vec<MissingArtifact>,
}

impl MissingArtifacts {
    /// Wrap a non-empty list of missing artifacts.
    pub(crate) fn new(entries: Vec<MissingArtifact>) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries }
    }

    pub fn entries(&self) -> &[MissingArtifact] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|entry| entry.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn listing(entries: &[MissingArtifact]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
