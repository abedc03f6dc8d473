//! `Gemini` Provider Module
//!
//! Single-shot `generateContent` calls. Only the most recent message is sent;
//! the reply is one complete text that the relay synthesizes into a stream.

mod chat;
pub mod types;

pub use chat::{GeminiChat, generate_content_url};
