//! Upstream Adapters
//!
//! Each adapter translates a provider-neutral [`ChatRequest`] into one
//! provider's wire format, performs exactly one HTTP call and hands back the
//! raw [`UpstreamReply`]. The closed set of adapters is the [`Adapter`] enum;
//! adding a provider means adding a variant and its module.
//!
//! # Architecture
//! - `groq` - streaming completions, relayed verbatim
//! - `gemini` - single-shot generation, one URL per model
//! - `brainman` - two unauthenticated single-shot endpoints

pub mod brainman;
pub mod gemini;
pub mod groq;

use async_trait::async_trait;

use crate::error::RelayError;
use crate::types::ChatRequest;
use crate::utils::streaming::UpstreamReply;

pub use brainman::{BrainmanChat, BrainmanEndpoint};
pub use gemini::GeminiChat;
pub use groq::GroqChat;

/// The single polymorphic capability every adapter offers.
#[async_trait]
pub trait GenerateCapability: Send + Sync {
    /// Stable provider id used in logs and errors.
    fn provider_id(&self) -> &'static str;

    /// Issue the upstream call for `request`.
    async fn generate(&self, request: &ChatRequest) -> Result<UpstreamReply, RelayError>;
}

/// One variant per adapter category.
#[derive(Debug, Clone)]
pub enum Adapter {
    Groq(GroqChat),
    Gemini(GeminiChat),
    Brainman(BrainmanChat),
}

#[async_trait]
impl GenerateCapability for Adapter {
    fn provider_id(&self) -> &'static str {
        match self {
            Self::Groq(a) => a.provider_id(),
            Self::Gemini(a) => a.provider_id(),
            Self::Brainman(a) => a.provider_id(),
        }
    }

    async fn generate(&self, request: &ChatRequest) -> Result<UpstreamReply, RelayError> {
        match self {
            Self::Groq(a) => a.generate(request).await,
            Self::Gemini(a) => a.generate(request).await,
            Self::Brainman(a) => a.generate(request).await,
        }
    }
}
