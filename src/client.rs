//! Request entry point tying the layers together.
//!
//! One request flows strictly upward:
//! payload builder → root message → frame → session → network.
//!
//! The client holds no connection state, only the shared read-only
//! configuration; every request opens its own connection.

use bytes::Bytes;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::payload::{PayloadBuilder, PayloadVariant};
use crate::protocol::Frame;
use crate::session::{Session, SessionHandle};

/// Client for issuing one-shot requests against the configured endpoint.
///
/// # Example
///
/// ```ignore
/// use plde_client::{Client, ClientConfig, EchoRequest};
///
/// let client = Client::new(ClientConfig::default())?;
/// let response = client
///     .request(&EchoRequest { message: "hello".to_string() })
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    /// Build a client, validating the configuration first.
    ///
    /// A failed precondition check is fatal; no request is attempted.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The shared configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a request and await the raw response bytes.
    pub async fn request<V: PayloadVariant>(&self, request: &V) -> Result<Bytes> {
        let frame = self.encode_frame(request)?;
        Session::new(self.config.endpoint.clone()).execute(frame).await
    }

    /// Issue a request as a detached session.
    ///
    /// Control returns once the frame is encoded; connect, write, and
    /// the response are observed later through the handle. Detached
    /// sessions race freely against each other.
    pub fn request_detached<V: PayloadVariant>(&self, request: &V) -> Result<SessionHandle> {
        let frame = self.encode_frame(request)?;
        Ok(Session::spawn(self.config.endpoint.clone(), frame))
    }

    /// Encode a variant into the exact bytes placed on the wire.
    fn encode_frame<V: PayloadVariant>(&self, request: &V) -> Result<Bytes> {
        let mut builder = PayloadBuilder::with_max_size(self.config.max_payload_size as usize);
        let payload = request.encode(&mut builder)?;
        let root = builder.finish(V::PAYLOAD_TYPE, payload)?;
        Ok(Frame::new(root.into_bytes()).encode())
    }
}
