//! Transport module - endpoint addressing and stream connection.
//!
//! Provides abstraction over:
//! - Unix Domain Sockets (local path)
//! - TCP (host/port equivalent)

mod socket;

pub use socket::{generate_socket_path, Endpoint, SocketStream};
