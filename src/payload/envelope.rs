//! Root message envelope.
//!
//! Layout of a finalized root message:
//! ```text
//! ┌────────────┬──────────────┬───────────────┐
//! │ Identifier │ Payload type │ Variant table │
//! │ 4 bytes    │ u32 LE       │ ...           │
//! └────────────┴──────────────┴───────────────┘
//! ```
//!
//! The identifier stamp makes the bytes self-describing for out-of-band
//! validation; it is the same 4 bytes as the frame magic.

use bytes::Bytes;

use super::variants::{Payload, PayloadType};
use crate::error::{Result, WireError};
use crate::protocol::MAGIC;

/// Size of the identifier + tag prefix.
pub const ROOT_PREFIX_SIZE: usize = 8;

/// A finalized, immutable root message.
///
/// Constructed once per request by [`PayloadBuilder::finish`] and
/// discarded after it is written to the transport.
///
/// [`PayloadBuilder::finish`]: super::PayloadBuilder::finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMessage {
    bytes: Bytes,
}

impl RootMessage {
    pub(crate) fn from_bytes(bytes: Bytes) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume into the underlying bytes (cheap, zero-copy).
    #[inline]
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Validate the identifier stamp and decode the carried payload.
    ///
    /// Dispatches solely on the discriminant tag; a tag outside the
    /// known variant set fails rather than being misinterpreted.
    pub fn decode(bytes: &[u8]) -> Result<Payload> {
        if bytes.len() < ROOT_PREFIX_SIZE {
            return Err(WireError::Protocol(format!(
                "root message truncated: {} bytes",
                bytes.len()
            )));
        }
        if bytes[0..4] != MAGIC {
            return Err(WireError::Protocol(format!(
                "root identifier mismatch: expected {:?}, got {:?}",
                MAGIC,
                &bytes[0..4]
            )));
        }
        let tag = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let payload_type = PayloadType::from_tag(tag)?;
        Payload::decode(payload_type, &bytes[ROOT_PREFIX_SIZE..])
    }
}
