//! ChunkReader: lazily split a source file into line-aligned chunks.
//!
//! [`ChunkReader::produce`] validates the path and returns a [`Chunks`] iterator without touching
//! the filesystem. The source is opened on the first call to `next()`, so a missing file shows
//! up as the first item (`Err(SourceNotFound)`). Each chunk holds up to
//! [`CopyOpts::lines_per_chunk`] lines with their original terminators, so concatenating the
//! chunks reproduces the source byte for byte. The iterator is single-pass and fused; the source
//! handle is dropped as soon as end of input or an error is reached.

use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use crate::error::CopyError;
use crate::types::{Chunk, ChunkResult, CopyOpts};
use crate::utils::config::{BufferConsts, ChunkConsts};

/// Reject an empty or whitespace-only source path before any I/O.
pub fn validate_source_path(path: &Path) -> Result<(), CopyError> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(CopyError::InvalidArgument(
            "the source file path cannot be empty or blank".to_string(),
        ));
    }
    Ok(())
}

/// Chunk producer configured from [`CopyOpts`]. Cheap to build; holds no handles.
#[derive(Clone, Debug)]
pub struct ChunkReader {
    lines_per_chunk: usize,
    empty_sentinel: bool,
}

impl Default for ChunkReader {
    fn default() -> Self {
        Self::new(&CopyOpts::default())
    }
}

impl ChunkReader {
    pub fn new(opts: &CopyOpts) -> Self {
        Self {
            lines_per_chunk: opts.lines_per_chunk(),
            empty_sentinel: opts.empty_sentinel,
        }
    }

    pub fn lines_per_chunk(&self) -> usize {
        self.lines_per_chunk
    }

    /// Start a read pass over `source`. Fails only on a blank path; everything else is lazy.
    pub fn produce(&self, source: impl AsRef<Path>) -> Result<Chunks, CopyError> {
        let path = source.as_ref();
        validate_source_path(path)?;
        Ok(Chunks {
            path: path.to_path_buf(),
            lines_per_chunk: self.lines_per_chunk,
            empty_sentinel: self.empty_sentinel,
            state: State::Pending,
            buf: Vec::new(),
            emitted: 0,
        })
    }
}

enum State {
    /// Not opened yet.
    Pending,
    Reading(BufReader<File>),
    /// End of input, error, or sentinel emitted. Handle released.
    Done,
}

/// Lazy, non-restartable sequence of chunks from one source file.
pub struct Chunks {
    path: PathBuf,
    lines_per_chunk: usize,
    empty_sentinel: bool,
    state: State,
    /// Lines gathered for the chunk being built.
    buf: Vec<u8>,
    emitted: usize,
}

impl Chunks {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Chunks yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Open the source. `Ok(None)` means the file is empty and the sentinel should be emitted.
    fn open(&self) -> Result<Option<BufReader<File>>, CopyError> {
        let file =
            File::open(&self.path).map_err(|e| CopyError::from_source_open(self.path.clone(), e))?;
        let meta = file.metadata().map_err(|e| CopyError::Io {
            op: "stat",
            path: self.path.clone(),
            source: e,
        })?;
        if meta.is_dir() {
            return Err(CopyError::SourceNotFound {
                path: self.path.clone(),
                source: None,
            });
        }
        if self.empty_sentinel && meta.is_file() && meta.len() == 0 {
            return Ok(None);
        }
        debug!(
            "Reading {} ({} bytes, {} lines per chunk)",
            self.path.display(),
            meta.len(),
            self.lines_per_chunk
        );
        Ok(Some(BufReader::with_capacity(
            BufferConsts::READ_BUFFER_SIZE,
            file,
        )))
    }

    fn finish(&mut self) {
        self.state = State::Done;
        self.buf = Vec::new();
    }
}

impl Iterator for Chunks {
    type Item = ChunkResult;

    fn next(&mut self) -> Option<ChunkResult> {
        loop {
            match &mut self.state {
                State::Done => return None,
                State::Pending => match self.open() {
                    Ok(Some(reader)) => self.state = State::Reading(reader),
                    Ok(None) => {
                        self.finish();
                        self.emitted += 1;
                        debug!("{} is empty, emitting sentinel chunk", self.path.display());
                        return Some(Ok(Chunk::from(ChunkConsts::EMPTY_SENTINEL)));
                    }
                    Err(e) => {
                        self.finish();
                        return Some(Err(e));
                    }
                },
                State::Reading(reader) => {
                    let lines = match read_lines(reader, &mut self.buf, self.lines_per_chunk) {
                        Ok(n) => n,
                        Err(e) => {
                            self.finish();
                            return Some(Err(CopyError::Io {
                                op: "read",
                                path: self.path.clone(),
                                source: e,
                            }));
                        }
                    };
                    // Short read means end of input: release the handle now.
                    if lines < self.lines_per_chunk {
                        self.state = State::Done;
                    }
                    if lines == 0 {
                        return None;
                    }
                    self.emitted += 1;
                    let chunk = Chunk::new(std::mem::take(&mut self.buf));
                    debug!(
                        "chunk {}: {} lines, {} bytes",
                        self.emitted,
                        lines,
                        chunk.len()
                    );
                    return Some(Ok(chunk));
                }
            }
        }
    }
}

impl FusedIterator for Chunks {}

/// Append up to `limit` lines (terminators included) to `buf`. Returns the number of lines read.
/// A final line without a terminator counts as a line.
pub(crate) fn read_lines<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    limit: usize,
) -> io::Result<usize> {
    let mut lines = 0;
    while lines < limit {
        if reader.read_until(b'\n', buf)? == 0 {
            break;
        }
        lines += 1;
    }
    Ok(lines)
}
