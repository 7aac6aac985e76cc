use log::error;
use std::error::Error as _;
use std::path::Path;

use crate::error::CopyError;

/// Report a failed run: one error line naming the failure, then its cause chain.
/// Nothing is cleaned up; a partially written destination is left in place.
pub fn report_failure(source: &Path, destination: &Path, err: &CopyError) {
    error!(
        "An error occurred while processing the file ({} -> {}): {}",
        source.display(),
        destination.display(),
        err
    );
    let mut cause = err.source();
    while let Some(c) = cause {
        error!("  caused by: {}", c);
        cause = c.source();
    }
}
