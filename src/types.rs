//! Public and internal types for the chunkcopy API and pipeline.

use std::fmt;

use crate::error::CopyError;
use crate::utils::config::ChunkConsts;

/// A run of complete lines read from the source, each with its original terminator.
///
/// Only the last line of the last chunk may lack a terminator (when the source does not end
/// with one). Chunks are handed to the writer once and dropped after being written.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Chunk(Vec<u8>);

impl Chunk {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for Chunk {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for Chunk {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

// Chunks can be megabytes; print the size, not the content.
impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes)", self.0.len())
    }
}

/// What the reader hands the writer: a chunk, or the error that ended production.
pub type ChunkResult = Result<Chunk, CopyError>;

/// Per-chunk callback, called with the number of bytes just written.
pub type ChunkCallback = Box<dyn Fn(usize) + Send>;

/// Lib options for [`run`](crate::run) and the reader/writer.
pub struct CopyOpts {
    /// Target chunk size in bytes. Used with [`Self::avg_line_bytes`] to derive lines per chunk.
    pub chunk_bytes: usize,
    /// Estimated average line size in bytes.
    pub avg_line_bytes: usize,
    /// Reader emits a single `"Empty File"` chunk for a zero-length source. On by default; set
    /// false to get zero chunks instead. [`run`](crate::run) never reaches this path; it
    /// short-circuits empty sources first.
    pub empty_sentinel: bool,
    /// Run the reader on its own thread with a rendezvous channel to the writer.
    ///
    /// Only one chunk crosses the channel at a time, but the reader starts building chunk N+1
    /// while the writer is still writing chunk N, so up to two chunks can be in memory at once.
    /// The default (false) pulls each chunk only when the writer asks for it.
    pub threaded: bool,
    /// Called by the writer after each chunk is written (e.g. progress bar).
    pub on_chunk: Option<ChunkCallback>,
}

impl Default for CopyOpts {
    fn default() -> Self {
        Self {
            chunk_bytes: ChunkConsts::CHUNK_BYTES,
            avg_line_bytes: ChunkConsts::AVG_LINE_BYTES,
            empty_sentinel: true,
            threaded: false,
            on_chunk: None,
        }
    }
}

impl fmt::Debug for CopyOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyOpts")
            .field("chunk_bytes", &self.chunk_bytes)
            .field("avg_line_bytes", &self.avg_line_bytes)
            .field("lines_per_chunk", &self.lines_per_chunk())
            .field("empty_sentinel", &self.empty_sentinel)
            .field("threaded", &self.threaded)
            .field("on_chunk", &self.on_chunk.is_some())
            .finish()
    }
}

impl CopyOpts {
    /// Lines per chunk derived from the byte budget and line estimate. Never less than 1.
    ///
    /// This is an approximation: real chunk sizes follow real line lengths.
    pub fn lines_per_chunk(&self) -> usize {
        (self.chunk_bytes / self.avg_line_bytes.max(1)).max(1)
    }

    /// Options with a fixed line count per chunk (`avg_line_bytes = 1`).
    pub fn with_lines_per_chunk(lines: usize) -> Self {
        Self {
            chunk_bytes: lines,
            avg_line_bytes: 1,
            ..Self::default()
        }
    }
}

/// Full options (CLI and config file). Use [`CopyOpts`] for lib.
#[derive(Clone, Debug)]
pub struct Opts {
    pub chunk_bytes: usize,
    pub avg_line_bytes: usize,
    /// Show progress bar and debug logging.
    pub verbose: bool,
    pub threaded: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            chunk_bytes: ChunkConsts::CHUNK_BYTES,
            avg_line_bytes: ChunkConsts::AVG_LINE_BYTES,
            verbose: false,
            threaded: false,
        }
    }
}

impl From<&Opts> for CopyOpts {
    fn from(o: &Opts) -> Self {
        CopyOpts {
            chunk_bytes: o.chunk_bytes,
            avg_line_bytes: o.avg_line_bytes,
            empty_sentinel: true,
            threaded: o.threaded,
            on_chunk: None,
        }
    }
}

/// Totals for one completed copy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Chunks handed to the writer.
    pub chunks: usize,
    /// Bytes written to the destination.
    pub bytes: u64,
}

/// Result of [`run`](crate::run). Failures are values, not panics or `Err`s.
#[derive(Debug)]
pub enum CopyOutcome {
    /// Source streamed to destination.
    Copied(CopyReport),
    /// Source was zero-length; destination created (or truncated) empty.
    EmptySource,
    /// Run stopped on an error. The destination may be missing, empty, or partially written.
    Failed(CopyError),
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, CopyOutcome::Failed(_))
    }

    pub fn report(&self) -> Option<&CopyReport> {
        match self {
            CopyOutcome::Copied(r) => Some(r),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CopyError> {
        match self {
            CopyOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<Option<CopyReport>, CopyError> {
        match self {
            CopyOutcome::Copied(r) => Ok(Some(r)),
            CopyOutcome::EmptySource => Ok(None),
            CopyOutcome::Failed(e) => Err(e),
        }
    }
}
