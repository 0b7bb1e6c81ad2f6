use super::BoxError;
use super::types::{Error, Kind, UrlError};

/// Creates an `Error` for a URL the decomposer rejected.
pub fn malformed_url(url: &str, reason: UrlError) -> Error {
    Error::new(Kind::MalformedUrl).with(reason).with_url(url)
}

/// Creates an `Error` for a failed host lookup.
pub fn resolve<E: Into<BoxError>>(host: &str, e: E) -> Error {
    Error::new(Kind::Resolve).with(e.into()).with_url(host)
}

/// Creates an `Error` for a connection that could not be established.
pub fn connect<E: Into<BoxError>>(authority: &str, e: E) -> Error {
    Error::new(Kind::Connect).with(e.into()).with_url(authority)
}

/// Creates an `Error` for a request that could not be written.
pub fn send<E: Into<BoxError>>(authority: &str, e: E) -> Error {
    Error::new(Kind::Send).with(e.into()).with_url(authority)
}

/// Creates an `Error` for a receive failure with nothing buffered.
pub fn recv<E: Into<BoxError>>(authority: &str, e: E) -> Error {
    Error::new(Kind::Recv).with(e.into()).with_url(authority)
}

/// Creates an `Error` for a response that exceeded the configured cap.
pub fn payload_too_large(authority: &str, limit: usize) -> Error {
    Error::new(Kind::PayloadTooLarge)
        .with(format!("response exceeded {limit} bytes"))
        .with_url(authority)
}

/// Creates an `Error` for a configuration rejected by validation.
pub fn configuration<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Config).with(e.into())
}
