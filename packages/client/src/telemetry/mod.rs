//! Counters for the fetch pipeline and the disk cache

pub mod cache_stats;
pub mod client_stats;

pub use cache_stats::{CacheStats, CacheStatsSnapshot};
pub use client_stats::{ClientStats, ClientStatsSnapshot};
