//! `WeightsFilesystem` implementation over `std::fs`.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::warn;

use crate::domain::AppError;
use crate::ports::WeightsFilesystem;

/// Filesystem adapter for absolute paths on the local machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl WeightsFilesystem for LocalFilesystem {
    fn file_exists(&self, path: &Path) -> bool {
        match path.try_exists() {
            Ok(exists) => exists,
            Err(err) => {
                warn!("cannot check {}: {}; treating it as absent", path.display(), err);
                false
            }
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn Write>, AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        let file = File::create(path).map_err(AppError::from)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        fs::rename(from, to).map_err(AppError::from)
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        match fs::remove_file(path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(AppError::from(err)),
            _ => Ok(()),
        }
    }
}
