//! Closed set of request payload variants and their discriminant tags.
//!
//! The variant set is fixed at build time; each variant implements
//! [`PayloadVariant`] once, and decoding dispatches exhaustively on the
//! tag so an out-of-set value fails instead of being misread under the
//! wrong layout.

use super::builder::{PayloadBuilder, PayloadRef};
use crate::error::{Result, WireError};

/// Discriminant tag identifying which variant a root message carries.
///
/// Tag values match the server's schema. Tag 0 is the reserved "none"
/// member and is never a valid request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PayloadType {
    /// Echo request.
    Echo = 1,
    /// Reverse request.
    Reverse = 2,
}

impl PayloadType {
    /// Map a raw tag to a known variant.
    ///
    /// # Example
    ///
    /// ```
    /// use plde_client::payload::PayloadType;
    ///
    /// assert_eq!(PayloadType::from_tag(2).unwrap(), PayloadType::Reverse);
    /// assert!(PayloadType::from_tag(0).is_err());
    /// ```
    pub fn from_tag(tag: u32) -> Result<Self> {
        match tag {
            1 => Ok(Self::Echo),
            2 => Ok(Self::Reverse),
            other => Err(WireError::UnknownPayloadType(other)),
        }
    }

    /// Raw tag value.
    #[inline]
    pub fn tag(self) -> u32 {
        self as u32
    }
}

/// A request variant that can be encoded into a payload builder.
///
/// Implemented once per variant in the schema. The tag constant and the
/// encoding must always agree.
pub trait PayloadVariant: Sized {
    /// Discriminant tag for this variant.
    const PAYLOAD_TYPE: PayloadType;

    /// Encode this variant into the builder, returning its reference.
    fn encode(&self, builder: &mut PayloadBuilder) -> Result<PayloadRef>;

    /// Decode the variant table bytes.
    fn decode(table: &[u8]) -> Result<Self>;
}

/// Echo request: the server replies with the same message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoRequest {
    pub message: String,
}

impl PayloadVariant for EchoRequest {
    const PAYLOAD_TYPE: PayloadType = PayloadType::Echo;

    fn encode(&self, builder: &mut PayloadBuilder) -> Result<PayloadRef> {
        builder.encode_string_table(Self::PAYLOAD_TYPE, &self.message)
    }

    fn decode(table: &[u8]) -> Result<Self> {
        Ok(Self {
            message: decode_string_table(table)?,
        })
    }
}

/// Reverse request: the server replies with the data reversed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseRequest {
    pub data: String,
}

impl PayloadVariant for ReverseRequest {
    const PAYLOAD_TYPE: PayloadType = PayloadType::Reverse;

    fn encode(&self, builder: &mut PayloadBuilder) -> Result<PayloadRef> {
        builder.encode_string_table(Self::PAYLOAD_TYPE, &self.data)
    }

    fn decode(table: &[u8]) -> Result<Self> {
        Ok(Self {
            data: decode_string_table(table)?,
        })
    }
}

/// Decoded root payload, one variant per request shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Echo(EchoRequest),
    Reverse(ReverseRequest),
}

impl Payload {
    /// Dispatch on the discriminant tag and decode the variant table.
    pub fn decode(payload_type: PayloadType, table: &[u8]) -> Result<Self> {
        match payload_type {
            PayloadType::Echo => Ok(Self::Echo(EchoRequest::decode(table)?)),
            PayloadType::Reverse => Ok(Self::Reverse(ReverseRequest::decode(table)?)),
        }
    }

    /// Tag of the variant this payload carries.
    pub fn payload_type(&self) -> PayloadType {
        match self {
            Self::Echo(_) => PayloadType::Echo,
            Self::Reverse(_) => PayloadType::Reverse,
        }
    }
}

/// Decode a single-string variant table: u32 LE length + UTF-8 bytes.
fn decode_string_table(table: &[u8]) -> Result<String> {
    if table.len() < 4 {
        return Err(WireError::Protocol(format!(
            "variant table truncated: {} bytes",
            table.len()
        )));
    }
    let length = u32::from_le_bytes([table[0], table[1], table[2], table[3]]) as usize;
    let rest = &table[4..];
    if rest.len() != length {
        return Err(WireError::Protocol(format!(
            "string length field {} does not match table size {}",
            length,
            rest.len()
        )));
    }
    String::from_utf8(rest.to_vec())
        .map_err(|e| WireError::Protocol(format!("string field is not UTF-8: {}", e)))
}
