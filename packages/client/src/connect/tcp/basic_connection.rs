//! Basic TCP connection establishment

use std::io;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use crate::error::{self, Result};

/// Connect to the first address that accepts, optionally with a per-address timeout.
///
/// # Errors
///
/// Returns a `Connect` error carrying the last failure if no address accepts.
pub fn connect_to_address_list(
    authority: &str,
    addrs: &[SocketAddr],
    timeout: Option<Duration>,
) -> Result<TcpStream> {
    let mut last_error = io::Error::new(io::ErrorKind::NotFound, "no addresses to connect to");

    for addr in addrs {
        let attempt = match timeout {
            Some(t) => TcpStream::connect_timeout(addr, t),
            None => TcpStream::connect(addr),
        };

        match attempt {
            Ok(stream) => {
                tracing::debug!(target: "webcache::transport", %addr, "connected");
                return Ok(stream);
            }
            Err(e) => {
                // Log error and continue to next address
                tracing::debug!(target: "webcache::transport", %addr, error = %e, "connect attempt failed");
                last_error = e;
            }
        }
    }

    Err(error::connect(authority, last_error))
}
