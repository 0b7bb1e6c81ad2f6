//! Client statistics with cache-padded atomic counters

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;

/// Counters updated by `CachingClient::process`.
#[derive(Debug, Default)]
pub struct ClientStats {
    /// URLs processed, whatever the outcome
    pub request_count: CachePadded<AtomicUsize>,
    /// Requests answered from the disk cache
    pub cache_hits: CachePadded<AtomicUsize>,
    /// Requests that had to go to the network
    pub cache_misses: CachePadded<AtomicUsize>,
    /// Raw response bytes received from origins
    pub total_bytes_received: CachePadded<AtomicU64>,
    /// Bodies persisted to the cache
    pub cache_writes: CachePadded<AtomicUsize>,
    /// Responses with status 400 or above
    pub upstream_errors: CachePadded<AtomicUsize>,
    /// Resolve/connect/send/receive failures
    pub transport_failures: CachePadded<AtomicUsize>,
    /// Responses received with a receive error after partial data
    pub partial_responses: CachePadded<AtomicUsize>,
}

/// Immutable snapshot of client statistics at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientStatsSnapshot {
    pub request_count: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
    pub total_bytes_received: u64,
    pub cache_writes: usize,
    pub upstream_errors: usize,
    pub transport_failures: usize,
    pub partial_responses: usize,
}

impl ClientStats {
    #[inline]
    pub(crate) fn incr(counter: &CachePadded<AtomicUsize>) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn add_bytes_received(&self, bytes: usize) {
        self.total_bytes_received
            .fetch_add(bytes as u64, Ordering::Relaxed);
    }

    #[inline]
    pub fn snapshot(&self) -> ClientStatsSnapshot {
        ClientStatsSnapshot {
            request_count: self.request_count.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            total_bytes_received: self.total_bytes_received.load(Ordering::Relaxed),
            cache_writes: self.cache_writes.load(Ordering::Relaxed),
            upstream_errors: self.upstream_errors.load(Ordering::Relaxed),
            transport_failures: self.transport_failures.load(Ordering::Relaxed),
            partial_responses: self.partial_responses.load(Ordering::Relaxed),
        }
    }
}
