//! Filesystem access for weight resolution and provisioning.
//!
//! Resolution and validation only call `file_exists`. The write operations
//! exist for the downloader, which is the sole writer into the weights directory.

use std::io::Write;
use std::path::Path;

use crate::domain::AppError;

/// Port for filesystem operations on absolute paths.
pub trait WeightsFilesystem {
    /// Check whether a file (or anything else) exists at `path`.
    ///
    /// A probe that fails with an I/O error reports `false`.
    fn file_exists(&self, path: &Path) -> bool;

    /// Check whether `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Create (or truncate) a file for writing.
    fn create_file(&self, path: &Path) -> Result<Box<dyn Write>, AppError>;

    /// Atomically move `from` to `to`.
    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Remove a file. No-op if the file does not exist.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;
}
