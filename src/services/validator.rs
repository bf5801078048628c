//! Validator service.

use log::debug;

use crate::domain::{MissingArtifact, MissingArtifacts, ResolvedPaths};
use crate::ports::WeightsFilesystem;

/// Checks resolved paths against the filesystem.
pub struct Validator;

impl Validator {
    /// Fail with every artifact whose resolved path does not exist.
    ///
    /// Existence is re-checked here rather than taken from resolution, since
    /// the filesystem may have changed in between.
    pub fn validate<F: WeightsFilesystem + ?Sized>(
        resolved: &ResolvedPaths,
        fs: &F,
    ) -> Result<(), MissingArtifacts> {
        let missing: Vec<MissingArtifact> = resolved
            .pairs()
            .filter(|(_, path)| !fs.file_exists(path))
            .map(|(name, path)| MissingArtifact::new(name, path))
            .collect();

        if missing.is_empty() {
            debug!("all {} required artifacts present", resolved.len());
            return Ok(());
        }

        Err(MissingArtifacts::new(missing))
    }
}
