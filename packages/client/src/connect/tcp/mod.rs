//! TCP connection utilities
//!
//! Name resolution, connecting to the first reachable address and socket
//! configuration, all on std's blocking `TcpStream`.

pub mod basic_connection;
pub mod dns_resolution;
pub mod socket_config;

pub use basic_connection::connect_to_address_list;
pub use dns_resolution::resolve_host_sync;
pub use socket_config::configure_tcp_socket;
