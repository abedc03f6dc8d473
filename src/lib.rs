//! # chatrelay
//!
//! A thin relay that forwards chat prompts to one of several LLM HTTP APIs
//! and re-emits every answer in a single server-sent-event format.
//!
#![deny(unsafe_code)]

//! ## Providers
//!
//! - **Groq**: OpenAI-style streaming completions, relayed verbatim
//! - **Gemini**: single-shot `generateContent`, last message only
//! - **Brainman**: two unauthenticated single-shot endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatrelay::{ChatRouter, RelayConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), chatrelay::RelayError> {
//!     let config = RelayConfig::from_env()?;
//!     let router = ChatRouter::from_config(&config)?;
//!     chatrelay::server::serve(router, config.listen_addr, std::future::pending()).await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod providers;
pub mod registry;
pub mod router;
pub mod server;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use client::RelayClient;
pub use config::RelayConfig;
pub use error::RelayError;
pub use router::{AdapterKind, ChatRouter};
pub use types::{ChatBody, GenerationConfig, GenerationOverrides, Message, NormalizedEvent, Role};
