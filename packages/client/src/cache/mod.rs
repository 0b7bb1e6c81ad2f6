//! Whole-file on-disk response cache
//!
//! Bodies are stored one file per URL under a cache root, at a relative path
//! derived from host and request path. There is no expiry, no validation and
//! no locking: a file that exists and reads fully is a hit, and concurrent
//! writers race with last-writer-wins.

pub mod cache_entry;
pub mod cache_key;
pub mod disk_store;

pub use cache_entry::CacheEntry;
pub use cache_key::CacheKey;
pub use disk_store::{CacheStore, DiskCache};
