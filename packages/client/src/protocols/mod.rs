//! Request/response exchange with an origin server

pub mod transport;

pub use transport::{RawResponse, TcpTransport, Transport};
