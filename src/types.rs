//! Shared types used across imgbatch.
//! Includes the pipeline records (`ImageRecord`, `SaveRequest`), the
//! `NamePolicy` capability trait, and the CLI-facing `OutputFormat`.
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// A successfully decoded image paired with the file it came from.
///
/// The loader only ever produces records whose `image` decoded cleanly;
/// there is no "present but invalid" state.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub path: PathBuf,
    pub image: DynamicImage,
}

/// One unit of work for the saver.
///
/// `metadata` is opaque to the saver; it is passed through verbatim to the
/// naming policy. Callers pick a concrete type per batch rather than an
/// untyped variable-length tail.
#[derive(Debug, Clone)]
pub struct SaveRequest<M> {
    pub original_path: PathBuf,
    pub image: DynamicImage,
    pub metadata: M,
}

/// Naming capability: decides each output file's name from the source path,
/// the pixel data, and the request metadata.
///
/// The returned name may contain subpath segments; they resolve relative to
/// the destination directory. The saver does not create missing parents.
/// Any `Fn(&Path, &DynamicImage, &M) -> PathBuf` closure implements this.
pub trait NamePolicy<M> {
    fn file_name(&self, original: &Path, image: &DynamicImage, metadata: &M) -> PathBuf;
}

impl<M, F> NamePolicy<M> for F
where
    F: Fn(&Path, &DynamicImage, &M) -> PathBuf,
{
    fn file_name(&self, original: &Path, image: &DynamicImage, metadata: &M) -> PathBuf {
        self(original, image, metadata)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Keep each file's own extension (lowercased)
    Source,
    Jpeg,
    Png,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Source => write!(f, "Source"),
            OutputFormat::Jpeg => write!(f, "Jpeg"),
            OutputFormat::Png => write!(f, "Png"),
        }
    }
}

impl OutputFormat {
    /// Extension for an output file derived from `original`, without the dot.
    pub fn extension_for(&self, original: &Path) -> String {
        match self {
            OutputFormat::Jpeg => "jpg".to_string(),
            OutputFormat::Png => "png".to_string(),
            OutputFormat::Source => original
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase())
                .unwrap_or_else(|| "png".to_string()),
        }
    }
}
