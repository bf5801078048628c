use std::path::{Path, PathBuf};

/// Container project root used when it exists on disk.
pub const CONTAINER_ROOT: &str = "/app";

/// Directory name of the current weights layout.
pub const WEIGHTS_DIR: &str = "weights";

/// Directory name of the legacy weights layout.
pub const LEGACY_WEIGHTS_DIR: &str = "pth";

/// Default download manifest filename inside the weights directory.
pub const SOURCES_FILE: &str = "sources.toml";

/// `<project>/weights/`
pub fn weights_dir(project_root: &Path) -> PathBuf {
    project_root.join(WEIGHTS_DIR)
}

/// `<project>/pth/`
pub fn legacy_weights_dir(project_root: &Path) -> PathBuf {
    project_root.join(LEGACY_WEIGHTS_DIR)
}

/// `<project>/backend/`
pub fn backend_dir(project_root: &Path) -> PathBuf {
    project_root.join("backend")
}

/// `<project>/backend/normalization_stats.pkl`
pub fn normalization_stats(project_root: &Path) -> PathBuf {
    backend_dir(project_root).join("normalization_stats.pkl")
}

/// `<weights>/sources.toml`
pub fn sources_manifest(weights_dir: &Path) -> PathBuf {
    weights_dir.join(SOURCES_FILE)
}
