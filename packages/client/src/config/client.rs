//! Client configuration and defaults

use std::path::PathBuf;
use std::time::Duration;

use super::validation::{ConfigResult, ConfigValidator, Validator};

/// Port used when the URL carries none.
pub const DEFAULT_PORT: u16 = 80;
/// URLs longer than this are rejected instead of truncated.
pub const DEFAULT_MAX_URL_LEN: usize = 2048;
/// Size of the fixed read chunk used by the transport.
pub const DEFAULT_RECV_CHUNK_SIZE: usize = 1024;
/// Hard cap on the bytes accumulated for a single response.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 64 * 1024 * 1024;

/// Configuration shared by the decomposer, the transport and the cache.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Directory that cache keys are resolved under
    pub cache_root: PathBuf,
    pub default_port: u16,
    pub max_url_len: usize,
    pub recv_chunk_size: usize,
    pub max_response_bytes: usize,
    /// `None` blocks until the OS gives up
    pub connect_timeout: Option<Duration>,
    /// `None` blocks indefinitely on a stalled peer
    pub read_timeout: Option<Duration>,
    pub nodelay: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            cache_root: PathBuf::from("."),
            default_port: DEFAULT_PORT,
            max_url_len: DEFAULT_MAX_URL_LEN,
            recv_chunk_size: DEFAULT_RECV_CHUNK_SIZE,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            connect_timeout: None,
            read_timeout: None,
            nodelay: true,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_cache_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.cache_root = root.into();
        self
    }

    #[must_use]
    pub fn with_max_url_len(mut self, max: usize) -> Self {
        self.max_url_len = max;
        self
    }

    #[must_use]
    pub fn with_recv_chunk_size(mut self, size: usize) -> Self {
        self.recv_chunk_size = size;
        self
    }

    #[must_use]
    pub fn with_max_response_bytes(mut self, max: usize) -> Self {
        self.max_response_bytes = max;
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }
}

impl Validator for ClientConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_nonzero(self.recv_chunk_size, "recv_chunk_size")?;
        ConfigValidator::validate_nonzero(self.max_response_bytes, "max_response_bytes")?;
        ConfigValidator::validate_nonzero(self.max_url_len, "max_url_len")?;
        ConfigValidator::validate_nonzero(usize::from(self.default_port), "default_port")?;
        if let Some(timeout) = self.connect_timeout {
            ConfigValidator::validate_timeout(timeout, "connect_timeout")?;
        }
        if let Some(timeout) = self.read_timeout {
            ConfigValidator::validate_timeout(timeout, "read_timeout")?;
        }
        Ok(())
    }
}
