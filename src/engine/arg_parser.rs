use clap::Parser;
use std::path::PathBuf;

use crate::utils::config::DefaultPaths;

/// Bounded-memory file copier: streams SOURCE to DEST one line-aligned chunk at a time.
#[derive(Clone, Debug, Parser)]
#[command(name = "chunkcopy")]
#[command(about = "Copy a file in bounded-size chunks without loading it into memory.")]
pub struct Cli {
    /// File to read.
    #[arg(value_name = "SOURCE", default_value = DefaultPaths::SOURCE)]
    pub source: PathBuf,

    /// File to create or overwrite.
    #[arg(value_name = "DEST", default_value = DefaultPaths::DESTINATION)]
    pub destination: PathBuf,

    /// Target chunk size in bytes. Default: 8 MB.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub chunk_bytes: Option<usize>,

    /// Estimated average line size in bytes, used to derive lines per chunk. Default: 100.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub avg_line_bytes: Option<usize>,

    /// Verbose output (debug logging and a progress bar).
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Read on a separate thread, handing chunks to the writer one at a time.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub threaded: Option<bool>,
}
