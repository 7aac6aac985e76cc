//! Error taxonomy for reader, writer and pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing, relaying or consuming chunks.
#[derive(Error, Debug)]
pub enum CopyError {
    /// Malformed call, e.g. an empty or blank source path. Raised before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Source path does not resolve to a readable file.
    #[error("source not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    /// Destination could not be created or truncated.
    #[error("destination not writable: {}: {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk/OS failure in the middle of a read or write.
    #[error("I/O failure during {op} of {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reader thread died in threaded relay mode.
    #[error("relay failed: {0}")]
    Relay(String),
}

/// Fieldless mirror of [`CopyError`] for matching in callers and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    SourceNotFound,
    DestinationUnwritable,
    Io,
    Relay,
}

impl CopyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CopyError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CopyError::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            CopyError::DestinationUnwritable { .. } => ErrorKind::DestinationUnwritable,
            CopyError::Io { .. } => ErrorKind::Io,
            CopyError::Relay(_) => ErrorKind::Relay,
        }
    }

    /// Map an error from opening the source. Unreadable or not-a-file becomes `SourceNotFound`.
    pub(crate) fn from_source_open(path: PathBuf, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::IsADirectory
            | io::ErrorKind::NotADirectory => CopyError::SourceNotFound {
                path,
                source: Some(err),
            },
            _ => CopyError::Io {
                op: "open",
                path,
                source: err,
            },
        }
    }
}
