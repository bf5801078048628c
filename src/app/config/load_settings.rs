//! Settings construction from the process environment.

use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::settings::PROJECT_ROOT_VAR;
use crate::domain::weights_paths::CONTAINER_ROOT;
use crate::domain::{AppError, Settings};
use crate::ports::{EnvSource, WeightsFilesystem};

/// Pick the project root: `CVD_PROJECT_ROOT`, then `/app` when present, then `cwd`.
pub fn detect_project_root<E, F>(env: &E, fs: &F, cwd: &Path) -> PathBuf
where
    E: EnvSource + ?Sized,
    F: WeightsFilesystem + ?Sized,
{
    if let Some(root) = env.var(PROJECT_ROOT_VAR).filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(root);
    }

    let container = Path::new(CONTAINER_ROOT);
    if fs.is_dir(container) {
        return container.to_path_buf();
    }

    cwd.to_path_buf()
}

/// Build the process settings once at startup.
pub fn load_settings<E, F>(env: &E, fs: &F) -> Result<Settings, AppError>
where
    E: EnvSource + ?Sized,
    F: WeightsFilesystem + ?Sized,
{
    let cwd = std::env::current_dir()?;
    let project_root = detect_project_root(env, fs, &cwd);
    debug!("project root: {}", project_root.display());

    Ok(Settings::from_source(project_root, env))
}
