//! Brainman Provider Module
//!
//! Two unauthenticated single-endpoint services sharing one wire shape:
//! `{message}` in, `{answer}` or `{error}` out.

mod chat;
pub mod types;

pub use chat::{BrainmanChat, BrainmanEndpoint};
