//! Utility modules for chatrelay

pub mod streaming;

pub use streaming::{ByteStream, EventStream, UpstreamReply};
