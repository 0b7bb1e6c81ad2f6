//! TCP socket configuration utilities

use std::net::TcpStream;
use std::time::Duration;

/// Apply TCP_NODELAY and the optional read timeout.
///
/// Failures are logged and ignored; a socket that cannot be tuned is still usable.
pub fn configure_tcp_socket(stream: &TcpStream, nodelay: bool, read_timeout: Option<Duration>) {
    if nodelay && let Err(e) = stream.set_nodelay(true) {
        tracing::debug!(target: "webcache::transport", error = %e, "failed to set TCP_NODELAY");
    }

    if let Err(e) = stream.set_read_timeout(read_timeout) {
        tracing::debug!(target: "webcache::transport", error = %e, "failed to set read timeout");
    }
}
