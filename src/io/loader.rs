//! Tolerant bulk image loading.
//!
//! The loader scans one directory level, keeps the files whose extension it
//! recognizes, and decodes them. A file the decoder rejects is logged and
//! dropped from the batch; only a failure to list the directory itself
//! escapes as an error.
use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::error::Result;
use crate::types::ImageRecord;

/// Extensions the loader treats as image candidates (compared lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp"];

/// True iff the file extension, case-insensitively, is a recognized image
/// extension. Pure classification, no I/O.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Decodes every recognized image directly under `source_dir`.
///
/// Non-recursive: subdirectories and non-regular files are ignored. Records
/// come back in directory-listing order, which is platform-dependent; do not
/// rely on it.
pub fn load_images_from_dir(source_dir: &Path) -> Result<Vec<ImageRecord>> {
    let mut records = Vec::new();

    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() || !is_image_file(&path) {
            continue;
        }

        match image::open(&path) {
            Ok(img) => {
                info!("Loaded image: {:?}", path);
                records.push(ImageRecord { path, image: img });
            }
            Err(e) => {
                error!("Failed to load image {:?}: {}", path, e);
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_extensions_case_insensitively() {
        assert!(is_image_file(Path::new("a.jpg")));
        assert!(is_image_file(Path::new("b.JPEG")));
        assert!(is_image_file(Path::new("c.PnG")));
        assert!(is_image_file(Path::new("d.bmp")));
        assert!(is_image_file(Path::new("e.gif")));
        assert!(is_image_file(Path::new("photos/f.WebP")));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("raw.tiff")));
        assert!(!is_image_file(Path::new("archive.tar.gz")));
    }

    #[test]
    fn rejects_paths_without_an_extension() {
        assert!(!is_image_file(Path::new("noext")));
        assert!(!is_image_file(Path::new(".hidden")));
    }
}
