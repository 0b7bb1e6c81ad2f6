//! DNS resolution and address handling utilities
//!
//! IP literals skip the resolver entirely; everything else goes through the
//! system resolver via `ToSocketAddrs`.

use std::io;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::str::FromStr;

use crate::error::{self, Result};

/// Resolve hostname to socket addresses synchronously.
///
/// # Errors
///
/// Returns a `Resolve` error if the lookup fails or yields no address.
pub fn resolve_host_sync(host: &str, port: u16) -> Result<Vec<SocketAddr>> {
    // Fast path for IP addresses
    if let Ok(ip) = IpAddr::from_str(host) {
        return Ok(vec![SocketAddr::new(ip, port)]);
    }

    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| error::resolve(host, e))?
        .collect();

    if addrs.is_empty() {
        return Err(error::resolve(
            host,
            io::Error::new(io::ErrorKind::NotFound, "no addresses resolved"),
        ));
    }

    tracing::debug!(target: "webcache::transport", host, count = addrs.len(), "resolved host");
    Ok(addrs)
}
