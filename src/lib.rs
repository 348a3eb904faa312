//! # plde-client
//!
//! Rust client SDK for the PLDE framed request protocol.
//!
//! A request is encoded as a tagged-union root message, wrapped in a
//! length-prefixed frame, and written over a one-shot stream connection
//! to a fixed local endpoint. The first inbound data event is the entire
//! response (the response direction carries no framing); the connection
//! is closed afterwards.
//!
//! ## Architecture
//!
//! - **Payload layer**: builder + closed variant set → finalized root message
//! - **Protocol layer**: 8-byte frame header (magic + LE length), framing
//! - **Transport layer**: one connection per request, state-machine session
//!
//! ## Example
//!
//! ```ignore
//! use plde_client::{Client, ClientConfig, EchoRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::default())?;
//!     let response = client
//!         .request(&EchoRequest { message: "hello".to_string() })
//!         .await?;
//!     println!("{}", String::from_utf8_lossy(&response));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod payload;
pub mod protocol;
pub mod session;
pub mod transport;

mod client;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Result, WireError};
pub use payload::{
    EchoRequest, Payload, PayloadBuilder, PayloadType, PayloadVariant, ReverseRequest, RootMessage,
};
pub use session::{Session, SessionHandle, SessionState};
pub use transport::Endpoint;
