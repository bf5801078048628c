use std::path::{Path, PathBuf};

use super::Artifact;

/// The two directories searched for weight files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightRoots {
    current: PathBuf,
    legacy: PathBuf,
}

impl WeightRoots {
    pub fn new(current: impl Into<PathBuf>, legacy: impl Into<PathBuf>) -> Self {
        Self { current: current.into(), legacy: legacy.into() }
    }

    /// Preferred root, searched first.
    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Fallback root from the previous layout.
    pub fn legacy(&self) -> &Path {
        &self.legacy
    }
}

/// Which candidate a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Found in the current root.
    Current,
    /// Found only in the legacy root.
    Legacy,
    /// Found in neither; the path is the current-root candidate.
    Absent,
}

impl Origin {
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Current => "current",
            Origin::Legacy => "legacy",
            Origin::Absent => "absent",
        }
    }
}

/// One artifact bound to the single path chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub origin: Origin,
}

impl ResolvedArtifact {
    pub fn name(&self) -> &str {
        self.artifact.name()
    }
}

/// Resolution output for a whole artifact set, in set order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedPaths {
    entries: Vec<ResolvedArtifact>,
}

impl ResolvedPaths {
    pub(crate) fn new(entries: Vec<ResolvedArtifact>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.iter().find(|entry| entry.name() == name).map(|entry| entry.path.as_path())
    }

    pub fn origin(&self, name: &str) -> Option<Origin> {
        self.entries.iter().find(|entry| entry.name() == name).map(|entry| entry.origin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedArtifact> {
        self.entries.iter()
    }

    /// `(name, path)` pairs in artifact-set order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|entry| (entry.name(), entry.path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResolvedPaths {
    type Item = &'a ResolvedArtifact;
    type IntoIter = std::slice::Iter<'a, ResolvedArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
