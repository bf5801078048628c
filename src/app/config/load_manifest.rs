//! Download manifest loading.

use std::path::Path;

use log::{debug, warn};

use crate::domain::{AppError, ArtifactSet, SourceManifest};
use crate::ports::WeightsFilesystem;

/// Load `sources.toml`; a missing file is an empty manifest.
pub fn load_manifest<F: WeightsFilesystem + ?Sized>(
    path: &Path,
    artifacts: &ArtifactSet,
    fs: &F,
) -> Result<SourceManifest, AppError> {
    if !fs.file_exists(path) {
        debug!("no download manifest at {}", path.display());
        return Ok(SourceManifest::default());
    }

    let content = fs.read_file(path)?;
    let manifest = SourceManifest::parse_toml(&content, path)?;

    for filename in manifest.unknown_entries(artifacts) {
        warn!("{}: ignoring '{}', not a required weight file", path.display(), filename);
    }

    Ok(manifest)
}
