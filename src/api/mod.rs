//! High-level, ergonomic library API: run one whole batch (validate, load,
//! transform, save) in a single call. Prefer this entrypoint over composing
//! the `io` functions by hand when integrating imgbatch.
use std::fmt::Debug;
use std::path::Path;

use image::DynamicImage;
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::io::loader::load_images_from_dir;
use crate::io::saver::save_images;
use crate::io::validate::{validate_input_dir, validate_output_dir};
use crate::types::{NamePolicy, SaveRequest};

/// Summary of one batch run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BatchReport {
    /// Images decoded from the source directory
    pub loaded: usize,
    /// Output files written to the destination directory
    pub saved: usize,
}

/// Runs the full pipeline over one directory.
///
/// Validates both directories, loads every decodable image from `source_dir`,
/// applies `transform` to each, and saves the results into `destination_dir`
/// under names chosen by `policy`. `transform` maps one decoded image to zero
/// or more output images, each carrying caller-defined metadata; this is the
/// seam where detection, cropping, or any other image-to-image(s) step plugs
/// in.
///
/// Loading is best-effort (undecodable files are skipped); saving aborts on
/// the first failed write.
pub fn process_directory<M, T, P>(
    source_dir: &Path,
    destination_dir: &Path,
    mut transform: T,
    policy: &P,
) -> Result<BatchReport>
where
    M: Debug,
    T: FnMut(&Path, &DynamicImage) -> Vec<(DynamicImage, M)>,
    P: NamePolicy<M>,
{
    let source = validate_input_dir(source_dir)?;
    let destination = validate_output_dir(destination_dir)?;

    let records = load_images_from_dir(&source)?;
    let loaded = records.len();

    let mut requests = Vec::with_capacity(loaded);
    for record in &records {
        for (image, metadata) in transform(&record.path, &record.image) {
            requests.push(SaveRequest {
                original_path: record.path.clone(),
                image,
                metadata,
            });
        }
    }

    save_images(&requests, &destination, policy)?;

    let report = BatchReport {
        loaded,
        saved: requests.len(),
    };
    info!("Batch complete: loaded={} saved={}", report.loaded, report.saved);
    Ok(report)
}
