//! Process-wide visit counter for the static file server.

use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrency-safe counter of requests served under `/app`.
///
/// Every operation is a single sequentially consistent atomic, so increments,
/// reads and resets share one global order and no completed increment is
/// lost to a concurrent read. A reset only discards increments ordered before it.
///
/// One instance is created at startup and shared through
/// [`crate::state::AppState`] behind an `Arc`.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one hit.
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    /// Returns the current number of hits.
    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::SeqCst)
    }

    /// Sets the counter back to zero and returns the value it held.
    pub fn reset(&self) -> u64 {
        self.hits.swap(0, Ordering::SeqCst)
    }
}
