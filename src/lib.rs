//! Chunkcopy: bounded-memory file copy, streamed one line-aligned chunk at a time.

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use error::{CopyError, ErrorKind};
pub use types::*;

pub use engine::{ChunkReader, ChunkWriter, Chunks};
pub use pipeline::{run, try_run};

use log::debug;
use std::path::Path;

/// Copy `source` to `destination` with default chunk sizing.
///
/// Same as [`run`] with [`CopyOpts::default`]: 8 MB target chunks, 100-byte line estimate,
/// reader and writer on the calling thread.
///
/// ```ignore
/// match chunkcopy::copy_file("data.csv", "data_copy.csv") {
///     chunkcopy::CopyOutcome::Failed(e) => eprintln!("{e}"),
///     _ => {}
/// }
/// ```
pub fn copy_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> CopyOutcome {
    let opts = CopyOpts::default();
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        opts
    );
    run(source, destination, opts)
}
