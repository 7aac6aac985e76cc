//! Progress bar utilities for displaying copy status

use kdam::{Animation, Bar, BarExt};
use std::sync::{Arc, Mutex};

use crate::types::ChunkCallback;

// Progress bar type alias
pub type ProgressBar = Arc<Mutex<Bar>>;

/// Configuration for creating a progress bar
pub struct ProgressBarConfig {
    pub total: usize,
    pub desc: &'static str,
    pub animation: Animation,
}

impl ProgressBarConfig {
    /// Create a new progress bar configuration
    pub fn new(total: usize, desc: &'static str, animation: Animation) -> Self {
        Self {
            total,
            desc,
            animation,
        }
    }
}

/// Create a byte-counting progress bar with the given configuration
pub fn create_progress_bar(config: ProgressBarConfig) -> ProgressBar {
    Arc::new(Mutex::new(kdam::tqdm!(
        total = config.total,
        desc = config.desc,
        animation = config.animation,
        unit = "B",
        unit_scale = true
    )))
}

/// Update progress bar by `n` bytes.
/// Uses try_lock so the writer never blocks on the display; a skipped update is caught up on the next one.
pub fn update_progress_bar(pb: &ProgressBar, n: usize) {
    if let Ok(mut pb) = pb.try_lock() {
        let _ = pb.update(n);
    }
}

/// Push the bar to its total (e.g. after a successful copy where some updates were skipped).
pub fn finish_progress_bar(pb: &ProgressBar) {
    if let Ok(mut bar) = pb.lock() {
        let total = bar.total;
        let _ = bar.update_to(total);
        eprintln!();
    }
}

/// Create a per-chunk callback that advances the bar by the bytes written.
pub fn progress_callback(bar: &Option<ProgressBar>) -> Option<ChunkCallback> {
    bar.as_ref().map(|bar| {
        let bar = Arc::clone(bar);
        Box::new(move |n: usize| update_progress_bar(&bar, n)) as ChunkCallback
    })
}

/// Build the copy bar when `verbose`; `total` is the source length in bytes.
pub fn setup_progress(verbose: bool, total: u64) -> Option<ProgressBar> {
    verbose.then(|| {
        create_progress_bar(ProgressBarConfig::new(
            usize::try_from(total).unwrap_or(usize::MAX),
            "Copying",
            Animation::Classic,
        ))
    })
}
