//! Blocking TCP connection establishment

pub mod tcp;

pub use tcp::{configure_tcp_socket, connect_to_address_list, resolve_host_sync};
