//! Download manifest mapping canonical filenames to source URLs.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::{AppError, Artifact, ArtifactSet};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    sources: BTreeMap<String, String>,
}

/// Parsed `sources.toml`.
///
/// ```toml
/// [sources]
/// "hypertension.pt" = "https://models.example.com/hypertension.pt"
/// ```
///
/// Blank URLs count as unconfigured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceManifest {
    sources: BTreeMap<String, Url>,
}

impl SourceManifest {
    /// Parse manifest content read from `origin`.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self, AppError> {
        let raw: RawManifest = toml::from_str(content).map_err(|e| AppError::ManifestParse {
            path: origin.display().to_string(),
            details: e.to_string(),
        })?;

        let mut sources = BTreeMap::new();
        for (filename, value) in raw.sources {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let url = Url::parse(value).map_err(|e| AppError::InvalidUrl {
                filename: filename.clone(),
                details: e.to_string(),
            })?;
            sources.insert(filename, url);
        }

        Ok(Self { sources })
    }

    pub fn url_for(&self, filename: &str) -> Option<&Url> {
        self.sources.get(filename)
    }

    /// Artifacts with no configured URL, in set order.
    pub fn unconfigured<'a>(&self, artifacts: &'a ArtifactSet) -> Vec<&'a Artifact> {
        artifacts
            .iter()
            .filter(|artifact| !self.sources.contains_key(artifact.filename()))
            .collect()
    }

    /// Manifest keys that match no artifact filename.
    pub fn unknown_entries<'a>(&'a self, artifacts: &ArtifactSet) -> Vec<&'a str> {
        self.sources
            .keys()
            .filter(|filename| artifacts.by_filename(filename).is_none())
            .map(String::as_str)
            .collect()
    }
}
