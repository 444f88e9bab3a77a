//! Cache Statistics Module
//!
//! Reports the unexpired contents of a cache namespace.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of a cache's unexpired keys.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of unexpired entries
    pub size: usize,
    /// The unexpired keys, sorted
    pub keys: Vec<String>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates an empty CacheStats.
    pub fn new() -> Self {
        Self::default()
    }

    // == Merge ==
    /// Folds another snapshot into this one.
    ///
    /// Used to combine the per-namespace caches into a single report.
    pub fn merge(&mut self, other: CacheStats) {
        self.size += other.size;
        self.keys.extend(other.keys);
        self.keys.sort();
    }
}
