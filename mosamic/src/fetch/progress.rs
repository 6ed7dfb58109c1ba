//! Progress reporting for the concurrent fetch stage.
//!
//! Uses atomic counters so concurrent fetch futures can report completion
//! without shared locks. Correctness never depends on the callback; it only
//! feeds UIs such as the CLI progress bar.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Callback invoked after each tile resolves.
///
/// # Arguments
///
/// * `completed` - Number of tiles resolved so far (real or placeholder)
/// * `total` - Total number of tiles in this batch
pub type ProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Shared completion counter for one fetch batch.
#[derive(Clone)]
pub struct FetchProgress {
    completed: Arc<AtomicUsize>,
    total: usize,
    callback: Option<ProgressCallback>,
}

impl FetchProgress {
    /// Creates a progress tracker for a batch of `total` tiles.
    pub fn new(total: usize, callback: Option<ProgressCallback>) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total,
            callback,
        }
    }

    /// Records one resolved tile and notifies the callback.
    pub fn tick(&self) {
        let done = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(cb) = &self.callback {
            cb(done, self.total);
        }
    }

    /// Number of tiles resolved so far.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Total tiles in the batch.
    pub fn total(&self) -> usize {
        self.total
    }
}
