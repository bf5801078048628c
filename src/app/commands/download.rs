//! Weight download command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;
use url::Url;

use crate::app::config::load_manifest;
use crate::domain::{AppError, Settings};
use crate::ports::{WeightFetcher, WeightsFilesystem};

const PARTIAL_SUFFIX: &str = "part";

#[derive(Debug, Clone, Default)]
pub struct DownloadOutcome {
    pub downloaded: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    /// Filenames with no configured URL; nothing is fetched when non-empty.
    pub unconfigured: Vec<String>,
    pub exit_code: i32,
}

/// Fetch every configured weight file into the current weights directory.
///
/// Existing destinations are never overwritten. Bodies are written to a
/// `.part` sibling and renamed into place once complete.
pub fn execute<F, W>(
    settings: &Settings,
    fs: &F,
    fetcher: &W,
    out: &mut dyn Write,
) -> Result<DownloadOutcome, AppError>
where
    F: WeightsFilesystem + ?Sized,
    W: WeightFetcher + ?Sized,
{
    let weights_dir = settings.weights_dir();
    fs.create_dir_all(weights_dir)?;

    let manifest = load_manifest(settings.sources_manifest(), settings.artifacts(), fs)?;
    let unconfigured: Vec<String> = manifest
        .unconfigured(settings.artifacts())
        .into_iter()
        .map(|artifact| artifact.filename().to_string())
        .collect();

    if !unconfigured.is_empty() {
        writeln!(out, "Download URLs not configured for:")?;
        for filename in &unconfigured {
            writeln!(out, "- {}", filename)?;
        }
        writeln!(
            out,
            "\nAdd URLs to {}, or place files manually.",
            settings.sources_manifest().display()
        )?;
        return Ok(DownloadOutcome { unconfigured, exit_code: 1, ..Default::default() });
    }

    let mut outcome = DownloadOutcome::default();
    for artifact in settings.artifacts() {
        let dest = weights_dir.join(artifact.filename());
        if fs.file_exists(&dest) {
            writeln!(out, "Skipping existing {}", dest.display())?;
            outcome.skipped.push(dest);
            continue;
        }

        let url = manifest.url_for(artifact.filename()).ok_or_else(|| {
            AppError::config_error(format!("No download URL for {}", artifact.filename()))
        })?;

        writeln!(out, "Downloading {}...", artifact.filename())?;
        fetch_into_place(fs, fetcher, url, &dest)?;
        writeln!(out, "Saved to {}", dest.display())?;
        outcome.downloaded.push(dest);
    }

    writeln!(out, "All downloads complete.")?;
    Ok(outcome)
}

fn fetch_into_place<F, W>(fs: &F, fetcher: &W, url: &Url, dest: &Path) -> Result<(), AppError>
where
    F: WeightsFilesystem + ?Sized,
    W: WeightFetcher + ?Sized,
{
    let partial = partial_path(dest);

    let fetched = {
        let mut writer = fs.create_file(&partial)?;
        fetcher.fetch(url, &mut *writer).and_then(|_| writer.flush().map_err(AppError::from))
    };

    match fetched {
        Ok(()) => fs.rename(&partial, dest),
        Err(err) => {
            if let Err(cleanup) = fs.remove_file(&partial) {
                warn!("failed to remove {}: {}", partial.display(), cleanup);
            }
            Err(err)
        }
    }
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(PARTIAL_SUFFIX);
    dest.with_file_name(name)
}
