//! Directory precondition checks run before any pipeline work.
//!
//! A missing source is fatal; a missing destination is created on demand.
//! A path of the wrong type is fatal in either direction, so a plain file is
//! never silently treated as (or turned into) a directory.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::error::{Error, Result};

/// Checks that `path` exists and is a directory, returning its canonical
/// absolute form. Failures here are preconditions: callers are expected to
/// abort the run, not recover.
pub fn validate_input_dir(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        error!("Source directory does not exist: {:?}", path);
        return Err(Error::MissingSourceDirectory {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        error!("Source path is not a directory: {:?}", path);
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::canonicalize(path)?)
}

/// Like [`validate_input_dir`], except a missing destination is an expected
/// case: it is created together with any missing ancestors.
pub fn validate_output_dir(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        warn!("Destination directory does not exist, creating: {:?}", path);
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        error!("Destination path is not a directory: {:?}", path);
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::canonicalize(path)?)
}
