//! Core types shared by the router, the adapters and the HTTP surface.

pub mod chat;
pub mod config;
pub mod event;
pub mod message;

pub use chat::{ChatBody, ChatRequest};
pub use config::{GenerationConfig, GenerationOverrides};
pub use event::{ChunkChoice, ChunkDelta, ChunkPayload, DONE_SENTINEL, NormalizedEvent};
pub use message::{Message, Role};
