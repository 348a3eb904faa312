//! Client configuration.
//!
//! The configuration is read-only once a [`Client`](crate::Client) is
//! built; sessions share it without locking because nothing in it is
//! mutable state. Violated preconditions are fatal and stop startup
//! before any request is attempted.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, WireError};
use crate::protocol::DEFAULT_MAX_BODY_SIZE;
use crate::transport::Endpoint;

/// Default unix socket path of the local server.
pub const DEFAULT_SOCKET_PATH: &str = "/tmp/my_server.sock";

/// Configuration shared by all sessions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Fixed endpoint address.
    pub endpoint: Endpoint,
    /// Maximum finalized payload size the encoder accepts, in bytes.
    pub max_payload_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::unix(DEFAULT_SOCKET_PATH),
            max_payload_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl ClientConfig {
    /// Configuration for a unix socket endpoint.
    pub fn unix(path: impl Into<PathBuf>) -> Self {
        Self {
            endpoint: Endpoint::unix(path),
            ..Self::default()
        }
    }

    /// Configuration for a TCP endpoint.
    pub fn tcp(addr: SocketAddr) -> Self {
        Self {
            endpoint: Endpoint::tcp(addr),
            ..Self::default()
        }
    }

    /// Set the maximum payload size.
    pub fn max_payload_size(mut self, limit: u32) -> Self {
        self.max_payload_size = limit;
        self
    }

    /// Load and validate configuration from a JSON file.
    ///
    /// A missing or malformed file is a startup precondition failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            WireError::Startup(format!("cannot read config {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|e| {
            WireError::Startup(format!("malformed config {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check startup preconditions.
    pub fn validate(&self) -> Result<()> {
        if let Endpoint::Unix(path) = &self.endpoint {
            if path.as_os_str().is_empty() {
                return Err(WireError::Startup("socket path is empty".to_string()));
            }
        }
        if self.max_payload_size == 0 {
            return Err(WireError::Startup("max payload size is zero".to_string()));
        }
        Ok(())
    }
}
