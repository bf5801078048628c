//! Process configuration for weight resolution and the inference service.
//!
//! `Settings` is built once at startup and passed by reference. Nothing in the
//! crate reads the environment after construction.

use std::fmt;
use std::path::{Path, PathBuf};

use super::weights_paths;
use super::{AppError, ArtifactSet, Device, WeightRoots};
use crate::ports::EnvSource;

/// Override for the current weights directory.
pub const WEIGHTS_DIR_VAR: &str = "WEIGHTS_DIR";
/// Override for the download manifest location.
pub const WEIGHTS_SOURCES_VAR: &str = "WEIGHTS_SOURCES";
/// Explicit project root.
pub const PROJECT_ROOT_VAR: &str = "CVD_PROJECT_ROOT";
/// Compute device selector (`cuda`, `cuda:N` or `cpu`).
pub const DEVICE_VAR: &str = "DEVICE";
/// `1` replaces real models with a dummy model.
pub const USE_DUMMY_MODEL_VAR: &str = "USE_DUMMY_MODEL";
/// `1` enables metrics collection.
pub const ENABLE_METRICS_VAR: &str = "ENABLE_METRICS";
/// Model version label reported by the service.
pub const MODEL_VERSION_VAR: &str = "MODEL_VERSION";

const DEFAULT_MODEL_VERSION: &str = "demo";
const DEFAULT_DEVICE: &str = "cuda";

/// Switches consumed by the inference service.
///
/// The resolver ignores these; they live here because they come from the same
/// configuration surface. The device selector is kept raw and parsed on demand
/// by [`Settings::device`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeFlags {
    pub device: String,
    /// Serve predictions from a dummy model instead of loading checkpoints.
    pub use_dummy_model: bool,
    /// Expose the metrics endpoint.
    pub enable_metrics: bool,
    pub model_version: String,
}

impl Default for RuntimeFlags {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            use_dummy_model: false,
            enable_metrics: false,
            model_version: DEFAULT_MODEL_VERSION.to_string(),
        }
    }
}

/// Immutable configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    project_root: PathBuf,
    weights_dir: PathBuf,
    legacy_weights_dir: PathBuf,
    sources_manifest: PathBuf,
    artifacts: ArtifactSet,
    runtime: RuntimeFlags,
}

impl Settings {
    /// Defaults rooted at `project_root`, with no environment overrides.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let weights_dir = weights_paths::weights_dir(&project_root);
        let legacy_weights_dir = weights_paths::legacy_weights_dir(&project_root);
        let sources_manifest = weights_paths::sources_manifest(&weights_dir);

        Self {
            project_root,
            weights_dir,
            legacy_weights_dir,
            sources_manifest,
            artifacts: ArtifactSet::default(),
            runtime: RuntimeFlags::default(),
        }
    }

    /// Build settings for `project_root`, applying overrides from `env`.
    pub fn from_source(project_root: impl Into<PathBuf>, env: &(impl EnvSource + ?Sized)) -> Self {
        let mut settings = Settings::new(project_root);

        if let Some(dir) = non_empty(env.var(WEIGHTS_DIR_VAR)) {
            settings = settings.with_weights_dir(dir);
        }
        if let Some(manifest) = non_empty(env.var(WEIGHTS_SOURCES_VAR)) {
            settings.sources_manifest = PathBuf::from(manifest);
        }

        settings.runtime = RuntimeFlags {
            device: non_empty(env.var(DEVICE_VAR))
                .map(|value| value.trim().to_string())
                .unwrap_or_else(|| DEFAULT_DEVICE.to_string()),
            use_dummy_model: flag_enabled(env.var(USE_DUMMY_MODEL_VAR)),
            enable_metrics: flag_enabled(env.var(ENABLE_METRICS_VAR)),
            model_version: non_empty(env.var(MODEL_VERSION_VAR))
                .unwrap_or_else(|| DEFAULT_MODEL_VERSION.to_string()),
        };

        settings
    }

    /// Replace the current weights directory.
    ///
    /// A manifest still at its default location follows the new directory.
    pub fn with_weights_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if self.sources_manifest == weights_paths::sources_manifest(&self.weights_dir) {
            self.sources_manifest = weights_paths::sources_manifest(&dir);
        }
        self.weights_dir = dir;
        self
    }

    pub fn with_artifacts(mut self, artifacts: ArtifactSet) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn with_runtime(mut self, runtime: RuntimeFlags) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Current weights directory (overridable).
    pub fn weights_dir(&self) -> &Path {
        &self.weights_dir
    }

    /// Legacy weights directory, always `<project>/pth`.
    pub fn legacy_weights_dir(&self) -> &Path {
        &self.legacy_weights_dir
    }

    pub fn sources_manifest(&self) -> &Path {
        &self.sources_manifest
    }

    pub fn artifacts(&self) -> &ArtifactSet {
        &self.artifacts
    }

    pub fn runtime(&self) -> &RuntimeFlags {
        &self.runtime
    }

    /// Parsed compute device; fails on a selector the service cannot use.
    pub fn device(&self) -> Result<Device, AppError> {
        self.runtime.device.parse()
    }

    pub fn roots(&self) -> WeightRoots {
        WeightRoots::new(&self.weights_dir, &self.legacy_weights_dir)
    }

    /// Unresolved checkpoint path for `name` under the current weights directory.
    pub fn checkpoint(&self, name: &str) -> Option<PathBuf> {
        self.artifacts.get(name).map(|artifact| self.weights_dir.join(artifact.filename()))
    }

    pub fn normalization_stats_path(&self) -> PathBuf {
        weights_paths::normalization_stats(&self.project_root)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settings(")?;
        for artifact in &self.artifacts {
            writeln!(
                f,
                "  {}: {}",
                artifact.name(),
                self.weights_dir.join(artifact.filename()).display()
            )?;
        }
        writeln!(f, "  Stats: {}", self.normalization_stats_path().display())?;
        writeln!(f, "  Device: {}", self.runtime.device)?;
        write!(f, ")")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn flag_enabled(value: Option<String>) -> bool {
    value.as_deref() == Some("1")
}
