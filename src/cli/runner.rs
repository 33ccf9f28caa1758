use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::info;

use imgbatch::api::process_directory;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.max_size == Some(0) {
        return Err(AppError::ZeroMaxSize.into());
    }

    let max_size = args.max_size;
    let transform = move |_path: &Path, image: &DynamicImage| {
        let output = match max_size {
            Some(limit) if image.width().max(image.height()) > limit => {
                image.thumbnail(limit, limit)
            }
            _ => image.clone(),
        };
        vec![(output, ())]
    };

    let suffix = args.suffix.clone();
    let format = args.format;
    let policy = move |original: &Path, _image: &DynamicImage, _meta: &()| -> PathBuf {
        let stem = original
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        PathBuf::from(format!(
            "{}{}.{}",
            stem,
            suffix,
            format.extension_for(original)
        ))
    };

    info!(
        "Starting batch processing: {:?} -> {:?}",
        args.input_dir, args.output_dir
    );

    let report = process_directory(&args.input_dir, &args.output_dir, transform, &policy)?;

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("loaded={} saved={}", report.loaded, report.saved);
    }

    Ok(())
}
