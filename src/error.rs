//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and codec errors, and provides semantic variants for
//! the directory precondition checks.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Source directory does not exist: {}", .path.display())]
    MissingSourceDirectory { path: PathBuf },

    #[error("Path is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },
}
