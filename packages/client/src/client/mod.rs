//! Fetch orchestration: cache lookup, network fetch, parse, persist

pub mod core;
pub mod outcome;

pub use self::core::CachingClient;
pub use outcome::{FetchOutcome, Source};
