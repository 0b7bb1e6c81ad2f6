//! The caching client

use crate::cache::{CacheKey, CacheStore, DiskCache};
use crate::config::{ClientConfig, Validator};
use crate::error::{self, Result};
use crate::http::{HttpRequest, ParsedResponse, ParsedUrl};
use crate::protocols::{TcpTransport, Transport};
use crate::telemetry::ClientStats;

use super::outcome::FetchOutcome;

/// Serves URLs from the disk cache, falling back to a network fetch.
///
/// ```text
/// parse URL -> cache lookup -> hit ----------------------------> CacheHit
///                           -> miss -> fetch -> parse -> < 400 -> persist -> Fetched
///                                                     -> >= 400 ----------> UpstreamError
///                                                     -> nothing usable --> Empty
///                                   -> transport failure -----------------> Err
/// ```
#[derive(Debug)]
pub struct CachingClient<T = TcpTransport, C = DiskCache> {
    config: ClientConfig,
    transport: T,
    cache: C,
    stats: ClientStats,
}

impl CachingClient {
    /// Client with the TCP transport and a disk cache at `config.cache_root`.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the configuration does not validate.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = TcpTransport::new(&config);
        let cache = DiskCache::new(config.cache_root.clone());
        Self::with_parts(config, transport, cache)
    }
}

impl<T: Transport, C: CacheStore> CachingClient<T, C> {
    /// # Errors
    ///
    /// Returns a `Config` error if the configuration does not validate.
    pub fn with_parts(config: ClientConfig, transport: T, cache: C) -> Result<Self> {
        config.validate().map_err(error::configuration)?;
        Ok(Self {
            config,
            transport,
            cache,
            stats: ClientStats::default(),
        })
    }

    /// Process one URL start to finish.
    ///
    /// # Errors
    ///
    /// `MalformedUrl` for a URL that does not decompose, and the transport's
    /// `Resolve`/`Connect`/`Send`/`Recv`/`PayloadTooLarge` errors. Cache
    /// failures and upstream error statuses are not errors.
    pub fn process(&self, url: &str) -> Result<FetchOutcome> {
        ClientStats::incr(&self.stats.request_count);

        let parsed = ParsedUrl::parse_with(url, &self.config)?;
        let key = CacheKey::for_url(&parsed);

        if let Some(entry) = self.cache.read(&key) {
            ClientStats::incr(&self.stats.cache_hits);
            tracing::debug!(target: "webcache::client", key = %key, bytes = entry.len(), "serving from cache");
            return Ok(FetchOutcome::CacheHit { key, entry });
        }

        ClientStats::incr(&self.stats.cache_misses);
        let request = HttpRequest::get(&parsed);

        let raw = self.transport.fetch(&request).inspect_err(|e| {
            ClientStats::incr(&self.stats.transport_failures);
            tracing::debug!(target: "webcache::client", key = %key, error = %e, "fetch failed");
        })?;

        self.stats.add_bytes_received(raw.len());
        let partial = raw.recv_error().is_some();
        if partial {
            ClientStats::incr(&self.stats.partial_responses);
        }

        let response = match ParsedResponse::parse(raw.data()) {
            ParsedResponse::Response(response) => response,
            ParsedResponse::Malformed => return Ok(FetchOutcome::Empty { key, request }),
        };

        if response.is_upstream_error() {
            ClientStats::incr(&self.stats.upstream_errors);
            return Ok(FetchOutcome::UpstreamError {
                key,
                request,
                response,
            });
        }

        let cached = match response.body() {
            Some(body) => {
                if partial {
                    tracing::warn!(target: "webcache::client", key = %key, bytes = body.len(), "caching body of a partial response");
                }
                self.cache.write(&key, body)
            }
            None => false,
        };
        if cached {
            ClientStats::incr(&self.stats.cache_writes);
        }

        Ok(FetchOutcome::Fetched {
            key,
            request,
            response,
            cached,
            partial,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    #[must_use]
    pub fn stats(&self) -> &ClientStats {
        &self.stats
    }
}
