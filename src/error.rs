//! Error types for plde-client.

use thiserror::Error;

/// Main error type for all wire-protocol operations.
#[derive(Debug, Error)]
pub enum WireError {
    /// Startup precondition failed (missing or malformed configuration).
    ///
    /// Fatal: raised before any request is attempted.
    #[error("startup error: {0}")]
    Startup(String),

    /// Payload construction could not complete (buffer growth refused).
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Inbound bytes failed magic or length validation.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Discriminant tag outside the known variant set.
    #[error("unknown payload type tag: {0}")]
    UnknownPayloadType(u32),

    /// I/O error during connect, write, or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection closed before a response arrived.
    #[error("connection closed")]
    ConnectionClosed,
}

/// Result type alias using WireError.
pub type Result<T> = std::result::Result<T, WireError>;
