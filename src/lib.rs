#![doc = r#"
imgbatch — a batch image load/transform/save pipeline.

This crate turns a directory of images into a directory of results: it
validates the source and destination directories, decodes every recognized
image file, hands each decoded image to a caller-supplied transformation, and
writes the outputs under names chosen by a caller-supplied naming policy. It
powers the `imgbatch` CLI and can be embedded in your own Rust applications.

Loading is best-effort: a file that fails to decode is logged and skipped and
the batch continues. Saving is all-or-abort: the first failed write stops the
remaining writes in that call. Colliding output names are not deduplicated;
the last write wins.

Quick start: process a directory
--------------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use image::DynamicImage;

fn main() -> imgbatch::Result<()> {
    let transform = |_path: &Path, img: &DynamicImage| vec![(img.clone(), ())];
    let policy = |original: &Path, _img: &DynamicImage, _meta: &()| -> PathBuf {
        let stem = original.file_stem().and_then(|s| s.to_str()).unwrap_or("image");
        PathBuf::from(format!("{stem}_out.png"))
    };

    let report = imgbatch::process_directory(
        Path::new("/data/photos"),
        Path::new("/data/results"),
        transform,
        &policy,
    )?;

    println!("loaded={} saved={}", report.loaded, report.saved);
    Ok(())
}
```

Composing the pieces by hand
----------------------------
```rust,no_run
use std::path::{Path, PathBuf};
use image::DynamicImage;
use imgbatch::{
    SaveRequest, load_images_from_dir, save_images, validate_input_dir, validate_output_dir,
};

fn main() -> imgbatch::Result<()> {
    let source = validate_input_dir(Path::new("/data/photos"))?;
    let destination = validate_output_dir(Path::new("/data/results"))?;

    let records = load_images_from_dir(&source)?;
    let requests: Vec<SaveRequest<usize>> = records
        .into_iter()
        .enumerate()
        .map(|(i, r)| SaveRequest {
            original_path: r.path,
            image: r.image,
            metadata: i,
        })
        .collect();

    let policy = |_original: &Path, _img: &DynamicImage, i: &usize| -> PathBuf {
        PathBuf::from(format!("result_{i}.png"))
    };
    save_images(&requests, &destination, &policy)
}
```

Error handling
--------------
All public functions return `imgbatch::Result<T>`; match on `imgbatch::Error`
to handle specific cases. Validation failures (`MissingSourceDirectory`,
`NotADirectory`) are preconditions and abort before any work; per-file decode
failures never surface as errors; encode/write failures do.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`ImageRecord`, `SaveRequest`, `NamePolicy`).
- [`io`] — directory validation, the loader, and the saver.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use types::{ImageRecord, NamePolicy, OutputFormat, SaveRequest};

// Pipeline stages
pub use io::loader::{IMAGE_EXTENSIONS, is_image_file, load_images_from_dir};
pub use io::saver::save_images;
pub use io::validate::{validate_input_dir, validate_output_dir};

// High-level API re-exports
pub use api::{BatchReport, process_directory};
