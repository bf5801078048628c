//! Path resolver service.

use std::path::PathBuf;

use log::{debug, info};

use crate::domain::{ArtifactSet, Origin, ResolvedArtifact, ResolvedPaths, WeightRoots};
use crate::ports::WeightsFilesystem;

/// Chooses, per artifact, between the current and the legacy weights root.
pub struct PathResolver;

impl PathResolver {
    /// Resolve every artifact to exactly one path.
    ///
    /// The current-root candidate wins when it exists; otherwise the legacy
    /// candidate is used when it exists; otherwise the current-root candidate
    /// is returned so that reports point at the preferred location.
    pub fn resolve<F: WeightsFilesystem + ?Sized>(
        roots: &WeightRoots,
        artifacts: &ArtifactSet,
        fs: &F,
    ) -> ResolvedPaths {
        let entries = artifacts
            .iter()
            .map(|artifact| {
                let (path, origin) = Self::resolve_one(roots, artifact.filename(), fs);
                debug!("{} resolved to {} ({})", artifact.name(), path.display(), origin.label());
                if origin == Origin::Legacy {
                    info!(
                        "{} found only in legacy directory {}; move it to {}",
                        artifact.name(),
                        roots.legacy().display(),
                        roots.current().display()
                    );
                }
                ResolvedArtifact { artifact: artifact.clone(), path, origin }
            })
            .collect();

        ResolvedPaths::new(entries)
    }

    fn resolve_one<F: WeightsFilesystem + ?Sized>(
        roots: &WeightRoots,
        filename: &str,
        fs: &F,
    ) -> (PathBuf, Origin) {
        let current = roots.current().join(filename);
        if fs.file_exists(&current) {
            return (current, Origin::Current);
        }

        let legacy = roots.legacy().join(filename);
        if fs.file_exists(&legacy) {
            return (legacy, Origin::Legacy);
        }

        (current, Origin::Absent)
    }
}
