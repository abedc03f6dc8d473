//! `Groq` Provider Module
//!
//! OpenAI-style chat completions. In streaming mode the upstream SSE body is
//! relayed verbatim, since it already carries the downstream event framing.
//!
//! # Architecture
//! - `chat.rs` - the adapter
//! - `types.rs` - request/response wire types
//! - `utils.rs` - headers and parameter validation

mod chat;
pub mod types;
mod utils;

pub use chat::GroqChat;
