use std::io;

use thiserror::Error;

use super::MissingArtifacts;

/// Library-wide error type for weight operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Unrecognized compute device.
    #[error("Invalid DEVICE '{0}': must be one of cuda, cpu")]
    InvalidDevice(String),

    /// Download manifest could not be parsed.
    #[error("Failed to parse {path}: {details}")]
    ManifestParse { path: String, details: String },

    /// Download manifest holds an unparseable URL.
    #[error("Invalid URL for '{filename}': {details}")]
    InvalidUrl { filename: String, details: String },

    /// Remote fetch failed.
    #[error("Download failed for {url}: {message}")]
    Download { url: String, message: String, status: Option<u16> },

    /// Required weight files are absent.
    #[error(transparent)]
    MissingArtifacts(#[from] MissingArtifacts),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
