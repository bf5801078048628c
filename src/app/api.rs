//! Library entry points used by the inference service and the CLI adapters.

use std::io;

use crate::adapters::{HttpFetcherConfig, HttpWeightFetcher, LocalFilesystem, ProcessEnv};
use crate::app::commands::{check as check_command, download as download_command};
use crate::app::config;
use crate::domain::{AppError, MissingArtifacts, ResolvedPaths, Settings};
use crate::services::{PathResolver, Validator};

/// Build settings from the process environment.
///
/// Call once at startup and pass the result by reference.
pub fn load_settings() -> Result<Settings, AppError> {
    config::load_settings(&ProcessEnv, &LocalFilesystem)
}

/// Resolve every required weight file against the current and legacy roots.
pub fn resolve_model_paths(settings: &Settings) -> ResolvedPaths {
    PathResolver::resolve(&settings.roots(), settings.artifacts(), &LocalFilesystem)
}

/// Startup gate: fail if any required weight file is absent from both roots.
///
/// Succeeds silently. The error lists every missing name and path and points
/// at the `check-weights` tool.
pub fn validate_model_paths(settings: &Settings) -> Result<(), MissingArtifacts> {
    let resolved = resolve_model_paths(settings);
    Validator::validate(&resolved, &LocalFilesystem)
}

/// Run the operator check, printing its report to stdout.
pub fn check(settings: &Settings) -> Result<check_command::CheckOutcome, AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    check_command::execute(settings, &LocalFilesystem, &mut out)
}

/// Download configured weight files into the current weights directory.
pub fn download(settings: &Settings) -> Result<download_command::DownloadOutcome, AppError> {
    let fetcher = HttpWeightFetcher::new(&HttpFetcherConfig::default())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    download_command::execute(settings, &LocalFilesystem, &fetcher, &mut out)
}
