use std::fmt;

/// A named model-weight file required by the inference service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    name: String,
    filename: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self { name: name.into(), filename: filename.into() }
    }

    /// Logical name used in diagnostics (e.g. `HTN`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical on-disk filename, compared byte-for-byte.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.filename)
    }
}

/// Checkpoints loaded by the CVD inference service, in reporting order.
pub const REQUIRED_ARTIFACTS: [(&str, &str); 4] = [
    ("HTN", "hypertension.pt"),
    ("CIMT", "cimt_reg.pth"),
    ("Vessel", "vessel.pth"),
    ("Fusion", "fusion_cvd_notskewed.pth"),
];

/// Ordered set of artifacts.
///
/// Iteration order is insertion order and drives the order of every report.
/// Names are unique; inserting a name twice replaces its filename in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self { artifacts: Vec::new() }
    }

    /// Insert or replace an artifact by name.
    pub fn insert(&mut self, artifact: Artifact) {
        match self.artifacts.iter_mut().find(|existing| existing.name == artifact.name) {
            Some(existing) => *existing = artifact,
            None => self.artifacts.push(artifact),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| artifact.name == name)
    }

    /// Look up an artifact by its canonical filename.
    pub fn by_filename(&self, filename: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|artifact| artifact.filename == filename)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(Artifact::filename)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl Default for ArtifactSet {
    /// The four checkpoints required by the current deployment.
    fn default() -> Self {
        REQUIRED_ARTIFACTS.iter().map(|(name, filename)| Artifact::new(*name, *filename)).collect()
    }
}

impl FromIterator<Artifact> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        let mut set = ArtifactSet::new();
        for artifact in iter {
            set.insert(artifact);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}
