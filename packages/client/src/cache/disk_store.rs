//! Filesystem-backed cache store
//!
//! Every failure in here is absorbed: an unreadable or short file is a miss,
//! and a failed write is logged, counted and otherwise ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{cache_entry::CacheEntry, cache_key::CacheKey};
use crate::telemetry::CacheStats;

/// Storage seam used by the fetch orchestrator.
pub trait CacheStore {
    /// True if a file is present for `key`. Says nothing about readability.
    fn exists(&self, key: &CacheKey) -> bool;

    /// Read the whole entry. Any failure, including a short read, is `None`.
    fn read(&self, key: &CacheKey) -> Option<CacheEntry>;

    /// Best-effort write of `body`. Returns whether it was persisted.
    fn write(&self, key: &CacheKey, body: &[u8]) -> bool;
}

/// Cache store rooted at a directory on disk.
#[derive(Debug)]
pub struct DiskCache {
    root: PathBuf,
    stats: CacheStats,
}

impl DiskCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn path_for(&self, key: &CacheKey) -> Option<PathBuf> {
        let path = key.resolve(&self.root);
        if path.is_none() {
            tracing::warn!(target: "webcache::cache", key = %key, "key escapes cache root, not caching");
        }
        path
    }

    fn read_whole(path: &Path) -> io::Result<Vec<u8>> {
        let expected = fs::metadata(path)?.len();
        let data = fs::read(path)?;
        if data.len() as u64 != expected {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("read {} of {expected} bytes", data.len()),
            ));
        }
        Ok(data)
    }

    fn write_whole(path: &Path, body: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            // An already existing directory is fine.
            fs::create_dir_all(parent)?;
        }
        fs::write(path, body)
    }
}

impl CacheStore for DiskCache {
    fn exists(&self, key: &CacheKey) -> bool {
        self.path_for(key).is_some_and(|path| path.is_file())
    }

    fn read(&self, key: &CacheKey) -> Option<CacheEntry> {
        let Some(path) = self.path_for(key) else {
            self.stats.record_miss();
            return None;
        };

        if !path.is_file() {
            self.stats.record_miss();
            return None;
        }

        match Self::read_whole(&path) {
            Ok(data) => {
                self.stats.record_hit();
                tracing::debug!(target: "webcache::cache", key = %key, bytes = data.len(), "cache hit");
                Some(CacheEntry::new(data))
            }
            Err(e) => {
                self.stats.record_error();
                self.stats.record_miss();
                tracing::warn!(target: "webcache::cache", key = %key, error = %e, "unreadable cache entry, treating as miss");
                None
            }
        }
    }

    fn write(&self, key: &CacheKey, body: &[u8]) -> bool {
        let Some(path) = self.path_for(key) else {
            return false;
        };

        match Self::write_whole(&path, body) {
            Ok(()) => {
                self.stats.record_write();
                tracing::debug!(target: "webcache::cache", key = %key, bytes = body.len(), "cached response body");
                true
            }
            Err(e) => {
                self.stats.record_error();
                tracing::warn!(target: "webcache::cache", key = %key, error = %e, "cache write failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());
        let key = CacheKey::new("example.com", "/foo");
        let body = b"\x00binary\r\n\r\nbody\xff";

        assert!(!cache.exists(&key));
        assert!(cache.write(&key, body));
        assert!(cache.exists(&key));
        assert_eq!(&cache.read(&key).unwrap().body()[..], body);
        assert!(dir.path().join("example.com").join("foo").is_file());
    }

    #[test]
    fn missing_entry_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());

        assert!(cache.read(&CacheKey::new("example.com", "/nope")).is_none());
        let snapshot = cache.stats().snapshot();
        assert_eq!(snapshot.misses, 1);
        assert_eq!(snapshot.hits, 0);
    }

    #[test]
    fn nested_paths_create_parents() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());
        let key = CacheKey::new("example.com", "/a/b/");

        assert!(cache.write(&key, b"deep"));
        assert!(dir.path().join("example.com/a/b/index.html").is_file());
        // A second write into the same directory is not an error.
        assert!(cache.write(&CacheKey::new("example.com", "/a/b/c"), b"x"));
    }

    #[test]
    fn directory_in_the_way_is_a_miss_and_a_swallowed_write() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::new(dir.path());
        fs::create_dir_all(dir.path().join("example.com/page")).unwrap();
        let key = CacheKey::new("example.com", "/page");

        assert!(!cache.exists(&key));
        assert!(cache.read(&key).is_none());
        assert!(!cache.write(&key, b"body"));
        assert_eq!(cache.stats().snapshot().errors, 1);
    }

    #[test]
    fn traversal_keys_are_never_touched() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        let cache = DiskCache::new(&root);
        let key = CacheKey::new("example.com", "/../../escaped");

        assert!(!cache.write(&key, b"nope"));
        assert!(cache.read(&key).is_none());
        assert!(!dir.path().join("escaped").exists());
    }
}
