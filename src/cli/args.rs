use clap::Parser;
use std::path::PathBuf;

use imgbatch::OutputFormat;

#[derive(Parser)]
#[command(name = "imgbatch", version, about = "imgbatch CLI")]
pub struct CliArgs {
    /// Source directory containing image files
    #[arg(short, long)]
    pub input_dir: PathBuf,

    /// Destination directory for results (created if missing)
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Suffix appended to each output file's stem
    #[arg(long, default_value = "_out")]
    pub suffix: String,

    /// Output format (source keeps each file's own extension)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Source)]
    pub format: OutputFormat,

    /// Downscale so the longest edge is at most this many pixels
    #[arg(long)]
    pub max_size: Option<u32>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Print the batch report as JSON on stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
