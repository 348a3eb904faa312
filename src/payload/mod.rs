//! Payload module - variant encoding, builder, and root-message envelope.
//!
//! One request flows through this module as:
//! variant → [`PayloadBuilder`] → [`RootMessage`] (tag + identifier stamp)

mod builder;
mod envelope;
mod variants;

pub use builder::{PayloadBuilder, PayloadRef, DEFAULT_BUILDER_CAPACITY};
pub use envelope::{RootMessage, ROOT_PREFIX_SIZE};
pub use variants::{EchoRequest, Payload, PayloadType, PayloadVariant, ReverseRequest};
