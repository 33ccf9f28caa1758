//! Generic metadata-driven bulk image saving.
use std::fmt::Debug;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::types::{NamePolicy, SaveRequest};

/// Writes every request into `destination_dir` under a name chosen by
/// `policy`, selecting the encoder from the extension the policy produces.
///
/// Pass-through orchestrator: no deduplication, no overwrite confirmation,
/// no sanitization of the produced name. Two requests resolving to the same
/// name leave only the later write on disk. The first encode/write failure
/// propagates and aborts the remaining requests in this call.
pub fn save_images<M: Debug>(
    requests: &[SaveRequest<M>],
    destination_dir: &Path,
    policy: &impl NamePolicy<M>,
) -> Result<()> {
    info!(
        "Saving {} images to {:?}",
        requests.len(),
        destination_dir
    );

    for request in requests {
        let file_name = policy.file_name(&request.original_path, &request.image, &request.metadata);
        let output_path = destination_dir.join(file_name);

        request.image.save(&output_path)?;
        debug!("Saved image {:?} metadata={:?}", output_path, request.metadata);
    }

    info!("Finished saving {} images", requests.len());
    Ok(())
}
