//! Disk cache statistics
//!
//! Provides `CacheStats` for tracking hits, misses, writes and absorbed
//! errors with atomic counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Cache statistics for monitoring
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: AtomicU64,
    /// Number of cache misses
    pub misses: AtomicU64,
    /// Number of bodies persisted
    pub writes: AtomicU64,
    /// Read or write failures that were demoted or swallowed
    pub errors: AtomicU64,
}

/// Point-in-time copy of `CacheStats`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
    pub errors: u64,
}

impl CacheStats {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get hit rate as percentage
    pub fn hit_rate(&self) -> f64 {
        // Precision loss acceptable for cache hit rate statistics
        #[allow(clippy::cast_precision_loss)]
        let hits = self.hits.load(Ordering::Relaxed) as f64;
        #[allow(clippy::cast_precision_loss)]
        let total = hits + self.misses.load(Ordering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }

    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}
