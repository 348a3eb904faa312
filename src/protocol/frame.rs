//! Frame assembly and one-shot decoding.
//!
//! A frame is the complete header-plus-body byte sequence placed on the
//! wire for one request. Only the request direction is framed; responses
//! are opaque bytes, so a [`Frame`] carries just a body.
//!
//! # Example
//!
//! ```
//! use plde_client::protocol::{decode_frame, Frame, HEADER_SIZE};
//! use bytes::Bytes;
//!
//! let frame = Frame::new(Bytes::from_static(b"hello"));
//! let wire = frame.encode();
//!
//! assert_eq!(wire.len(), HEADER_SIZE + 5);
//! assert_eq!(decode_frame(&wire).unwrap(), b"hello");
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use super::wire_format::{FrameHeader, HEADER_SIZE};
use crate::error::{Result, WireError};

/// A complete protocol frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Body bytes (zero-copy via `bytes::Bytes`).
    pub body: Bytes,
}

impl Frame {
    /// Create a new frame around a finalized body.
    pub fn new(body: Bytes) -> Self {
        Self { body }
    }

    /// Create a frame from raw bytes (copies data).
    pub fn from_slice(body: &[u8]) -> Self {
        Self {
            body: Bytes::copy_from_slice(body),
        }
    }

    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    #[inline]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Exact bytes placed on the wire: header followed by body.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(HEADER_SIZE + self.body.len());
        buf.put_slice(&FrameHeader::new(self.body.len() as u32).encode());
        buf.put_slice(&self.body);
        buf.freeze()
    }

    /// Validate and strip the header from a complete frame.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        decode_frame(bytes).map(Self::from_slice)
    }
}

/// Build a complete frame as a single byte vector.
pub fn build_frame(body: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
    buf.extend_from_slice(&FrameHeader::new(body.len() as u32).encode());
    buf.extend_from_slice(body);
    buf
}

/// Validate a complete frame and return its body bytes.
///
/// Fails unless the first 4 bytes equal the fixed magic and the length
/// field equals the trailing byte count exactly. A partial frame or one
/// with leftover bytes is not interpretable as a unit.
pub fn decode_frame(bytes: &[u8]) -> Result<&[u8]> {
    let header = FrameHeader::decode(bytes)?;
    let body = &bytes[HEADER_SIZE..];
    if header.length as usize != body.len() {
        return Err(WireError::Protocol(format!(
            "length field {} does not match body length {}",
            header.length,
            body.len()
        )));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_frame_layout() {
        let bytes = build_frame(b"hello");

        assert_eq!(bytes.len(), HEADER_SIZE + 5);
        assert_eq!(&bytes[0..4], b"PLDE");
        assert_eq!(&bytes[4..8], &[5, 0, 0, 0]);
        assert_eq!(&bytes[8..], b"hello");
    }

    #[test]
    fn test_decode_frame_round_trip() {
        let body = b"tagged union payload";
        let bytes = build_frame(body);

        assert_eq!(decode_frame(&bytes).unwrap(), body);
    }

    #[test]
    fn test_decode_empty_body() {
        let bytes = build_frame(b"");
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert!(decode_frame(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_bad_magic() {
        let mut bytes = build_frame(b"hello");
        bytes[0] = b'X';

        assert!(decode_frame(&bytes).is_err());
    }

    #[test]
    fn test_decode_rejects_short_body() {
        let mut bytes = build_frame(b"hello");
        bytes.truncate(bytes.len() - 1);

        assert!(matches!(
            decode_frame(&bytes),
            Err(WireError::Protocol(_))
        ));
    }

    #[test]
    fn test_decode_rejects_trailing_garbage() {
        let mut bytes = build_frame(b"hello");
        bytes.push(0);

        assert!(decode_frame(&bytes).is_err());
    }

    #[test]
    fn test_frame_encode_matches_build_frame() {
        let frame = Frame::from_slice(b"same bytes");
        assert_eq!(&frame.encode()[..], &build_frame(b"same bytes")[..]);
    }

    #[test]
    fn test_frame_decode() {
        let wire = Frame::from_slice(b"body").encode();
        let frame = Frame::decode(&wire).unwrap();

        assert_eq!(frame.body(), b"body");
        assert_eq!(frame.body_len(), 4);
    }
}
