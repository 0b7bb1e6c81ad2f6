//! The types most callers need.

pub use crate::cache::{CacheEntry, CacheKey, CacheStore, DiskCache};
pub use crate::client::{CachingClient, FetchOutcome, Source};
pub use crate::config::ClientConfig;
pub use crate::error::{Error, Kind, Result};
pub use crate::http::{HttpRequest, HttpResponse, ParsedResponse, ParsedUrl};
pub use crate::protocols::{RawResponse, TcpTransport, Transport};
pub use crate::telemetry::{CacheStats, ClientStats, ClientStatsSnapshot};
