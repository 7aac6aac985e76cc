//! ChunkWriter: append a stream of chunks to a destination file in arrival order.

use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::CopyError;
use crate::types::{ChunkCallback, ChunkResult, CopyReport};
use crate::utils::config::BufferConsts;

/// Chunk consumer. Holds only the optional per-chunk callback; the destination handle lives for
/// one [`consume`](ChunkWriter::consume) call.
#[derive(Default)]
pub struct ChunkWriter {
    on_chunk: Option<ChunkCallback>,
}

impl ChunkWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer that calls `on_chunk(bytes)` after each chunk is written.
    pub fn with_callback(on_chunk: Option<ChunkCallback>) -> Self {
        Self { on_chunk }
    }

    /// Create or truncate `destination`, then write every chunk from `chunks` in order.
    ///
    /// Zero-length chunks are counted and otherwise ignored. The first `Err` item stops
    /// consumption and is returned as-is; whatever was written so far stays on disk. Returns
    /// only after the destination is flushed and closed.
    pub fn consume<I>(
        &self,
        destination: impl AsRef<Path>,
        chunks: I,
    ) -> Result<CopyReport, CopyError>
    where
        I: IntoIterator<Item = ChunkResult>,
    {
        let path = destination.as_ref();
        let file = File::create(path).map_err(|e| CopyError::DestinationUnwritable {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut out = BufWriter::with_capacity(BufferConsts::WRITE_BUFFER_SIZE, file);

        let mut report = CopyReport::default();
        for chunk in chunks {
            let chunk = chunk?;
            out.write_all(chunk.as_bytes()).map_err(io_failure("write", path))?;
            report.chunks += 1;
            report.bytes += chunk.len() as u64;
            if let Some(f) = &self.on_chunk {
                f(chunk.len());
            }
        }

        out.flush().map_err(io_failure("flush", path))?;
        drop(out);
        debug!(
            "Wrote {} chunks ({} bytes) to {}",
            report.chunks,
            report.bytes,
            path.display()
        );
        Ok(report)
    }
}

fn io_failure<'a>(op: &'static str, path: &'a Path) -> impl Fn(io::Error) -> CopyError + 'a {
    move |e| CopyError::Io {
        op,
        path: path.to_path_buf(),
        source: e,
    }
}

impl std::fmt::Debug for ChunkWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkWriter")
            .field("on_chunk", &self.on_chunk.is_some())
            .finish()
    }
}
