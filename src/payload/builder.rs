//! Payload builder over a shared growable buffer.
//!
//! A [`PayloadBuilder`] accumulates exactly one request variant and is
//! then consumed by [`finish`](PayloadBuilder::finish), which stamps the
//! protocol identifier and discriminant tag into the reserved prefix and
//! freezes the buffer into an immutable [`RootMessage`]. Two payloads
//! under construction at once require two builders.
//!
//! # Example
//!
//! ```
//! use plde_client::payload::{EchoRequest, PayloadBuilder, PayloadType, PayloadVariant};
//!
//! let mut builder = PayloadBuilder::new();
//! let request = EchoRequest { message: "hello".to_string() };
//! let payload = request.encode(&mut builder).unwrap();
//! let root = builder.finish(PayloadType::Echo, payload).unwrap();
//!
//! assert_eq!(&root.as_bytes()[..4], b"PLDE");
//! ```

use bytes::{BufMut, BytesMut};

use super::envelope::{RootMessage, ROOT_PREFIX_SIZE};
use super::variants::PayloadType;
use crate::error::{Result, WireError};
use crate::protocol::{DEFAULT_MAX_BODY_SIZE, MAGIC};

/// Default initial buffer capacity.
pub const DEFAULT_BUILDER_CAPACITY: usize = 1024;

/// Opaque reference to a payload encoded in a builder.
///
/// Only meaningful to the builder that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadRef {
    offset: usize,
    payload_type: PayloadType,
}

impl PayloadRef {
    /// Tag of the variant this reference points at.
    pub fn payload_type(&self) -> PayloadType {
        self.payload_type
    }

    /// Byte offset of the variant table inside the builder's buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Builder that accumulates one request payload in a growable buffer.
pub struct PayloadBuilder {
    /// Shared buffer; the first 8 bytes are reserved for the root prefix.
    buf: BytesMut,
    /// Maximum finalized size the buffer may grow to.
    max_size: usize,
    /// Tag of the variant encoded so far, if any.
    encoded: Option<PayloadType>,
}

impl PayloadBuilder {
    /// Create a builder with the default capacity and size cap.
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_BODY_SIZE as usize)
    }

    /// Create a builder with a custom maximum finalized size.
    pub fn with_max_size(max_size: usize) -> Self {
        let mut buf = BytesMut::with_capacity(DEFAULT_BUILDER_CAPACITY);
        buf.put_bytes(0, ROOT_PREFIX_SIZE);
        Self {
            buf,
            max_size,
            encoded: None,
        }
    }

    /// Append a single-string variant table and record its tag.
    ///
    /// The table layout is a u32 LE byte length followed by the UTF-8
    /// bytes. Any string is accepted; the only failure mode is the
    /// buffer refusing to grow past its configured cap.
    pub(crate) fn encode_string_table(
        &mut self,
        payload_type: PayloadType,
        value: &str,
    ) -> Result<PayloadRef> {
        if self.encoded.is_some() {
            return Err(WireError::Encoding(
                "builder already holds a finished payload".to_string(),
            ));
        }

        let needed = 4 + value.len();
        let total = self
            .buf
            .len()
            .checked_add(needed)
            .ok_or_else(|| WireError::Encoding("payload size overflows".to_string()))?;
        if total > self.max_size {
            return Err(WireError::Encoding(format!(
                "payload of {} bytes cannot grow past the {} byte limit",
                total, self.max_size
            )));
        }

        let offset = self.buf.len();
        self.buf.put_u32_le(value.len() as u32);
        self.buf.put_slice(value.as_bytes());
        self.encoded = Some(payload_type);

        Ok(PayloadRef {
            offset,
            payload_type,
        })
    }

    /// Finalize the buffer into one immutable root message.
    ///
    /// Consumes the builder: finalization occurs exactly once per buffer
    /// and no further payload may be added afterwards. The tag must be
    /// the one the payload was actually encoded under; a mismatch is a
    /// programmer-level contract violation.
    pub fn finish(mut self, payload_type: PayloadType, payload: PayloadRef) -> Result<RootMessage> {
        match self.encoded {
            Some(actual) if actual == payload_type && actual == payload.payload_type() => {}
            Some(actual) => {
                return Err(WireError::Encoding(format!(
                    "finalize tag {:?} does not match encoded payload {:?}",
                    payload_type, actual
                )));
            }
            None => {
                return Err(WireError::Encoding(
                    "finalize called on an empty builder".to_string(),
                ));
            }
        }

        self.buf[0..4].copy_from_slice(&MAGIC);
        self.buf[4..8].copy_from_slice(&payload_type.tag().to_le_bytes());

        Ok(RootMessage::from_bytes(self.buf.freeze()))
    }

    /// Bytes accumulated so far, prefix included.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Default for PayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}
