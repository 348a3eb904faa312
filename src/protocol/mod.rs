//! Protocol module - wire format, framing, and frame reading.
//!
//! This module implements the request-direction framing contract:
//! - 8-byte header encoding/decoding (magic + LE length)
//! - Frame assembly and one-shot decode
//! - Frame buffer for accumulating partial stream reads

mod frame;
mod frame_buffer;
mod wire_format;

pub use frame::{build_frame, decode_frame, Frame};
pub use frame_buffer::FrameBuffer;
pub use wire_format::{FrameHeader, DEFAULT_MAX_BODY_SIZE, HEADER_SIZE, MAGIC};
