//! What one `process` call produced

use bytes::Bytes;

use crate::cache::{CacheEntry, CacheKey};
use crate::http::{HttpRequest, HttpResponse};

/// Where the emitted bytes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Network,
}

/// Terminal states of the fetch pipeline that are not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Served from disk; no connection was made.
    CacheHit { key: CacheKey, entry: CacheEntry },
    /// Fetched with a status below 400. `response.body()` is `None` when the
    /// response had no blank-line boundary or a status outside 200..=399.
    Fetched {
        key: CacheKey,
        request: HttpRequest,
        response: HttpResponse,
        /// The body was persisted to the cache
        cached: bool,
        /// The read loop ended on a receive error
        partial: bool,
    },
    /// The origin answered 400 or above; only the status line is surfaced.
    UpstreamError {
        key: CacheKey,
        request: HttpRequest,
        response: HttpResponse,
    },
    /// Nothing usable came back: zero bytes, or no CRLF at all.
    Empty { key: CacheKey, request: HttpRequest },
}

impl FetchOutcome {
    #[must_use]
    pub fn key(&self) -> &CacheKey {
        match self {
            Self::CacheHit { key, .. }
            | Self::Fetched { key, .. }
            | Self::UpstreamError { key, .. }
            | Self::Empty { key, .. } => key,
        }
    }

    #[must_use]
    pub fn source(&self) -> Source {
        match self {
            Self::CacheHit { .. } => Source::Cache,
            _ => Source::Network,
        }
    }

    /// The request sent to the origin, if one was sent.
    #[must_use]
    pub fn request(&self) -> Option<&HttpRequest> {
        match self {
            Self::CacheHit { .. } => None,
            Self::Fetched { request, .. }
            | Self::UpstreamError { request, .. }
            | Self::Empty { request, .. } => Some(request),
        }
    }

    /// Origin status code; `None` for cache hits and empty responses.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Fetched { response, .. } | Self::UpstreamError { response, .. } => {
                Some(response.status())
            }
            _ => None,
        }
    }

    /// The body that gets emitted, if any.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::CacheHit { entry, .. } => Some(entry.body()),
            Self::Fetched { response, .. } => response.body(),
            _ => None,
        }
    }
}
