use log::debug;
use std::fs::{self, File};
use std::path::Path;

use crate::engine::reader::{ChunkReader, validate_source_path};
use crate::engine::writer::ChunkWriter;
use crate::error::CopyError;
use crate::types::{CopyOpts, CopyOutcome, CopyReport};

use super::error_handler::report_failure;
use super::relay::{join_producer, spawn_producer_thread};

/// Copy `source` to `destination` and return the outcome. Never panics, never returns `Err`:
/// failures are logged and handed back as [`CopyOutcome::Failed`].
pub fn run(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    opts: CopyOpts,
) -> CopyOutcome {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    match try_run(source, destination, opts) {
        Ok(Some(report)) => CopyOutcome::Copied(report),
        Ok(None) => CopyOutcome::EmptySource,
        Err(e) => {
            report_failure(source, destination, &e);
            CopyOutcome::Failed(e)
        }
    }
}

/// Core of [`run`] with errors propagated. `Ok(None)` means the source was empty and the
/// destination was created empty without starting the reader or writer.
///
/// A missing source, or a destination that resolves to the source itself, is detected before
/// the destination is touched.
pub fn try_run(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    opts: CopyOpts,
) -> Result<Option<CopyReport>, CopyError> {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    validate_source_path(source)?;
    let empty = source_is_empty(source)?;
    reject_same_file(source, destination)?;

    if empty {
        debug!(
            "{} is empty; creating empty {}",
            source.display(),
            destination.display()
        );
        create_empty_destination(destination)?;
        return Ok(None);
    }

    let reader = ChunkReader::new(&opts);
    let writer = ChunkWriter::with_callback(opts.on_chunk);
    let chunks = reader.produce(source)?;

    let report = if opts.threaded {
        debug!("Relaying chunks through reader thread");
        let handles = spawn_producer_thread(chunks);
        let written = writer.consume(destination, handles.chunk_rx);
        let sent = join_producer(handles.producer_handle);
        let report = written?;
        debug!("relay: reader sent {} chunks", sent?);
        report
    } else {
        writer.consume(destination, chunks)?
    };
    Ok(Some(report))
}

/// True when `source` is a regular file of length 0. Missing or directory sources are `SourceNotFound`.
fn source_is_empty(source: &Path) -> Result<bool, CopyError> {
    let meta =
        fs::metadata(source).map_err(|e| CopyError::from_source_open(source.to_path_buf(), e))?;
    if meta.is_dir() {
        return Err(CopyError::SourceNotFound {
            path: source.to_path_buf(),
            source: None,
        });
    }
    Ok(meta.is_file() && meta.len() == 0)
}

/// Truncating the destination would wipe the source before the reader opens it.
fn reject_same_file(source: &Path, destination: &Path) -> Result<(), CopyError> {
    let (Ok(src), Ok(dst)) = (fs::canonicalize(source), fs::canonicalize(destination)) else {
        return Ok(());
    };
    if src == dst {
        return Err(CopyError::InvalidArgument(format!(
            "source and destination are the same file: {}",
            src.display()
        )));
    }
    Ok(())
}

fn create_empty_destination(destination: &Path) -> Result<(), CopyError> {
    File::create(destination)
        .map(drop)
        .map_err(|e| CopyError::DestinationUnwritable {
            path: destination.to_path_buf(),
            source: e,
        })
}
