//! One-shot HTTP/1.0 exchange over a raw TCP socket
//!
//! Resolve, connect, send the whole request, then read fixed-size chunks into
//! one growing buffer until the peer closes. The connection is never reused.

use std::io::{self, Read, Write};
use std::time::Duration;

use bytes::{Bytes, BytesMut};

use crate::config::ClientConfig;
use crate::connect::{configure_tcp_socket, connect_to_address_list, resolve_host_sync};
use crate::error::{self, Result};
use crate::http::HttpRequest;

/// Everything received for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    data: Bytes,
    recv_error: Option<String>,
}

impl RawResponse {
    /// A response read cleanly up to the peer closing the connection.
    #[must_use]
    pub fn complete(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            recv_error: None,
        }
    }

    /// A response cut short by a receive error after some bytes arrived.
    #[must_use]
    pub fn partial(data: impl Into<Bytes>, recv_error: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            recv_error: Some(recv_error.into()),
        }
    }

    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// The receive error that ended the read loop, if any.
    #[must_use]
    pub fn recv_error(&self) -> Option<&str> {
        self.recv_error.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Sends one request and collects the raw response.
pub trait Transport {
    /// # Errors
    ///
    /// `Resolve`, `Connect` and `Send` errors are fatal. A receive error is
    /// only an `Err` when nothing was received; otherwise the bytes come back
    /// as a partial `RawResponse`.
    fn fetch(&self, request: &HttpRequest) -> Result<RawResponse>;
}

/// Blocking std-net transport.
#[derive(Debug, Clone)]
pub struct TcpTransport {
    chunk_size: usize,
    max_response_bytes: usize,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    nodelay: bool,
}

impl Default for TcpTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl TcpTransport {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            chunk_size: config.recv_chunk_size.max(1),
            max_response_bytes: config.max_response_bytes,
            connect_timeout: config.connect_timeout,
            read_timeout: config.read_timeout,
            nodelay: config.nodelay,
        }
    }

    fn read_to_close(&self, stream: &mut impl Read, authority: &str) -> Result<RawResponse> {
        let mut buffer = BytesMut::with_capacity(self.chunk_size);
        let mut chunk = vec![0u8; self.chunk_size];

        let failure = loop {
            match stream.read(&mut chunk) {
                Ok(0) => break None,
                Ok(n) => {
                    if buffer.len() + n > self.max_response_bytes {
                        return Err(error::payload_too_large(authority, self.max_response_bytes));
                    }
                    buffer.extend_from_slice(&chunk[..n]);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => break Some(e),
            }
        };

        match failure {
            None => {
                tracing::debug!(target: "webcache::transport", authority, bytes = buffer.len(), "peer closed connection");
                Ok(RawResponse::complete(buffer.freeze()))
            }
            Some(e) if buffer.is_empty() => Err(error::recv(authority, e)),
            Some(e) => {
                tracing::warn!(
                    target: "webcache::transport",
                    authority,
                    bytes = buffer.len(),
                    error = %e,
                    "receive failed, keeping partial response"
                );
                Ok(RawResponse::partial(buffer.freeze(), e.to_string()))
            }
        }
    }
}

impl Transport for TcpTransport {
    fn fetch(&self, request: &HttpRequest) -> Result<RawResponse> {
        let authority = request.authority();
        let addrs = resolve_host_sync(request.host(), request.port())?;

        // Dropping the stream at the end of this scope closes the connection
        // on every path, including the early returns.
        let mut stream = connect_to_address_list(&authority, &addrs, self.connect_timeout)?;
        configure_tcp_socket(&stream, self.nodelay, self.read_timeout);

        stream
            .write_all(request.as_bytes())
            .and_then(|()| stream.flush())
            .map_err(|e| error::send(&authority, e))?;

        tracing::debug!(target: "webcache::transport", %authority, bytes = request.len(), "request sent");

        self.read_to_close(&mut stream, &authority)
    }
}
