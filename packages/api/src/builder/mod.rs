//! Builder for a configured `CachingClient`

pub mod core;

pub use self::core::WebCacheBuilder;
