//! Command Line Interface (CLI) layer for imgbatch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for batch processing. It wires
//! user-provided options to the underlying library functionality exposed
//! via `imgbatch::api`.
//!
//! If you are embedding imgbatch into another application, prefer using
//! the high-level `imgbatch::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
