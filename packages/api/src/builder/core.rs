//! `WebCacheBuilder`: fluent configuration of the caching client

use std::path::PathBuf;
use std::time::Duration;

use webcache_client::{CachingClient, ClientConfig, Result};

/// Fluent builder over `ClientConfig`.
///
/// ```no_run
/// use std::time::Duration;
/// use webcache::WebCache;
///
/// let client = WebCache::builder()
///     .cache_dir("/tmp/webcache")
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// # Ok::<(), webcache::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WebCacheBuilder {
    config: ClientConfig,
}

impl WebCacheBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Directory the cache keys are resolved under.
    #[must_use]
    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.cache_root = dir.into();
        self
    }

    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = Some(timeout);
        self
    }

    /// Without this a stalled peer blocks the fetch indefinitely.
    #[must_use]
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn max_response_bytes(mut self, max: usize) -> Self {
        self.config.max_response_bytes = max;
        self
    }

    #[must_use]
    pub fn recv_chunk_size(mut self, size: usize) -> Self {
        self.config.recv_chunk_size = size;
        self
    }

    #[must_use]
    pub fn max_url_len(mut self, max: usize) -> Self {
        self.config.max_url_len = max;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// # Errors
    ///
    /// Returns a `Config` error if the configuration does not validate.
    pub fn build(self) -> Result<CachingClient> {
        CachingClient::new(self.config)
    }
}
