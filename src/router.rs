//! Dispatch Router
//!
//! Picks the adapter for a model id, merges caller overrides onto the
//! registry defaults and turns the adapter's reply into the downstream
//! event stream. No retries: the first adapter failure ends the request.

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::providers::{
    Adapter, BrainmanChat, BrainmanEndpoint, GeminiChat, GenerateCapability, GroqChat,
};
use crate::registry;
use crate::types::{ChatBody, ChatRequest};
use crate::utils::streaming::{ByteStream, instrument, normalize};

const CHATGPT_MODEL: &str = "chatgpt-4o";
const WEB_CHAT_MODEL: &str = "web-chat";
const GEMINI_PREFIX: &str = "gemini-";

/// Adapter category for a model id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterKind {
    Groq,
    Gemini,
    Brainman(BrainmanEndpoint),
}

impl AdapterKind {
    /// Exact matches first, then the `gemini-` prefix; everything else is Groq.
    pub fn for_model(model: &str) -> Self {
        match model {
            CHATGPT_MODEL => Self::Brainman(BrainmanEndpoint::Chat),
            WEB_CHAT_MODEL => Self::Brainman(BrainmanEndpoint::Web),
            m if m.starts_with(GEMINI_PREFIX) => Self::Gemini,
            _ => Self::Groq,
        }
    }
}

/// Owns one adapter per category, all sharing a single HTTP client.
#[derive(Debug, Clone)]
pub struct ChatRouter {
    groq: Adapter,
    gemini: Adapter,
    brainman_chat: Adapter,
    brainman_web: Adapter,
}

impl ChatRouter {
    /// Build the adapters from `config` with a client honouring its timeouts.
    pub fn from_config(config: &RelayConfig) -> Result<Self, RelayError> {
        let http_client = config.http.build_client()?;
        Ok(Self::with_client(config, http_client))
    }

    pub fn with_client(config: &RelayConfig, http_client: reqwest::Client) -> Self {
        Self {
            groq: Adapter::Groq(GroqChat::new(config.groq.clone(), http_client.clone())),
            gemini: Adapter::Gemini(GeminiChat::new(config.gemini.clone(), http_client.clone())),
            brainman_chat: Adapter::Brainman(BrainmanChat::new(
                BrainmanEndpoint::Chat,
                config.brainman.clone(),
                http_client.clone(),
            )),
            brainman_web: Adapter::Brainman(BrainmanChat::new(
                BrainmanEndpoint::Web,
                config.brainman.clone(),
                http_client,
            )),
        }
    }

    pub fn adapter(&self, kind: AdapterKind) -> &Adapter {
        match kind {
            AdapterKind::Groq => &self.groq,
            AdapterKind::Gemini => &self.gemini,
            AdapterKind::Brainman(BrainmanEndpoint::Chat) => &self.brainman_chat,
            AdapterKind::Brainman(BrainmanEndpoint::Web) => &self.brainman_web,
        }
    }

    /// Run one chat request through to a ready-to-relay SSE body.
    pub async fn dispatch(&self, body: ChatBody) -> Result<ByteStream, RelayError> {
        self.dispatch_request(prepare(body)?).await
    }

    /// Same as [`ChatRouter::dispatch`] for an already prepared request.
    pub async fn dispatch_request(&self, request: ChatRequest) -> Result<ByteStream, RelayError> {
        let adapter = self.adapter(AdapterKind::for_model(&request.model));
        let provider = adapter.provider_id();
        tracing::debug!(provider = %provider, model = %request.model, "Dispatching chat request");

        let reply = adapter.generate(&request).await?;
        Ok(instrument(normalize(reply), provider, request.model))
    }
}

/// Resolve the model and merge caller overrides over its registry defaults.
pub fn prepare(body: ChatBody) -> Result<ChatRequest, RelayError> {
    let overrides = body.config.unwrap_or_default();
    let descriptor = match overrides.model.as_deref() {
        Some(id) => registry::resolve(id)?,
        None => registry::default_model(),
    };
    let config = descriptor.defaults.merge(&overrides);
    Ok(ChatRequest::new(descriptor.id, body.messages, config))
}
