//! Client configuration
//!
//! A single plain `ClientConfig`. The defaults block without timeouts,
//! like a bare socket client.

pub mod client;
pub mod validation;

pub use client::{
    ClientConfig, DEFAULT_MAX_RESPONSE_BYTES, DEFAULT_MAX_URL_LEN, DEFAULT_PORT,
    DEFAULT_RECV_CHUNK_SIZE,
};
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
