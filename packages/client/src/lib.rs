//! # webcache client
//!
//! A minimal caching HTTP/1.0 client. A URL is decomposed into host, port and
//! path; if a body for it is already on disk it is served from there,
//! otherwise a single `GET` is sent over a raw TCP connection, the response
//! is parsed by hand and a successful body is written to the cache.
//!
//! ```no_run
//! use webcache_client::{CachingClient, ClientConfig, FetchOutcome};
//!
//! let client = CachingClient::new(ClientConfig::default().with_cache_root("cache"))?;
//! match client.process("http://example.com/")? {
//!     FetchOutcome::CacheHit { entry, .. } => println!("{} cached bytes", entry.len()),
//!     other => println!("status {:?}", other.status()),
//! }
//! # Ok::<(), webcache_client::Error>(())
//! ```
//!
//! Not supported: persistent connections, chunked transfer encoding, TLS,
//! redirects, cache expiry, concurrent requests.

#![deny(unsafe_code)]

pub mod cache;
pub mod client;
pub mod config;
pub mod connect;
pub mod error;
pub mod http;
pub mod protocols;
pub mod telemetry;

pub mod prelude;

pub use crate::prelude::*;
