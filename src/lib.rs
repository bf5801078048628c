//! cvd-weights: locate, validate and provision the model weights required by
//! the CVD inference service.
//!
//! Weights are searched in the current directory (`WEIGHTS_DIR`, default
//! `<project>/weights`) and then in the legacy `<project>/pth` directory.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


pub use app::api::{check, download, load_settings, resolve_model_paths, validate_model_paths};
pub use app::commands::check::CheckOutcome;
pub use app::commands::download::DownloadOutcome;
pub use domain::{
    AppError, Artifact, ArtifactSet, Device, MissingArtifact, MissingArtifacts, Origin,
    ResolvedArtifact, ResolvedPaths, RuntimeFlags, Settings, WeightRoots,
};
