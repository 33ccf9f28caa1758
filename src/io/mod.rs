//! I/O layer for the batch pipeline.
//! Provides directory precondition checks (`validate`), the tolerant bulk
//! loader (`loader`), and the generic metadata-driven saver (`saver`).
pub mod validate;
pub use validate::{validate_input_dir, validate_output_dir};

pub mod loader;
pub use loader::{IMAGE_EXTENSIONS, is_image_file, load_images_from_dir};

pub mod saver;
pub use saver::save_images;
