//! webcache: a minimal caching HTTP/1.0 client
//!
//! The library half exposes the builder, the stdout framing and the browser
//! hook used by the `webcache` binary. The fetch pipeline itself lives in
//! `webcache_client`.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod browser;
pub mod builder;
pub mod cli;
pub mod logging;
pub mod render;

pub use builder::WebCacheBuilder;

pub use webcache_client::{
    CacheEntry, CacheKey, CachingClient, ClientConfig, Error, FetchOutcome, Kind, ParsedUrl,
    Result, Source,
};

/// Main entry point providing static constructors
pub struct WebCache;

impl WebCache {
    /// Start configuring a client.
    #[must_use]
    pub fn builder() -> WebCacheBuilder {
        WebCacheBuilder::new()
    }

    /// Client with default settings, caching under the current directory.
    ///
    /// # Errors
    ///
    /// Never fails for the default configuration; the `Result` mirrors
    /// [`WebCacheBuilder::build`].
    pub fn client() -> Result<CachingClient> {
        WebCacheBuilder::new().build()
    }
}
