//! Inbound request body and the provider-neutral request handed to adapters.

use serde::{Deserialize, Serialize};

use super::config::{GenerationConfig, GenerationOverrides};
use super::message::Message;
use crate::error::RelayError;

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatBody {
    pub messages: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GenerationOverrides>,
}

impl ChatBody {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            config: None,
        }
    }

    pub fn with_config(mut self, config: GenerationOverrides) -> Self {
        self.config = Some(config);
        self
    }

    /// Parse a raw request body. Any shape problem becomes a `ValidationError`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RelayError> {
        serde_json::from_slice(bytes)
            .map_err(|e| RelayError::ValidationError(format!("invalid chat body: {e}")))
    }
}

/// What an adapter receives: resolved model id, full history, merged config.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub config: GenerationConfig,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>, config: GenerationConfig) -> Self {
        Self {
            model: model.into(),
            messages,
            config,
        }
    }

    /// The most recent message; single-shot providers only ever see this one.
    pub fn last_message(&self) -> Result<&Message, RelayError> {
        self.messages
            .last()
            .ok_or_else(|| RelayError::ValidationError("message list is empty".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn body_without_messages_is_a_validation_error() {
        let err = ChatBody::from_slice(br#"{"config":{"model":"gemma2-9b-it"}}"#).unwrap_err();
        assert!(matches!(err, RelayError::ValidationError(_)));
    }

    #[test]
    fn body_without_config_parses() {
        let body = ChatBody::from_slice(br#"{"messages":[{"role":"user","content":"hi"}]}"#)
            .unwrap();
        assert_eq!(body.messages.len(), 1);
        assert_eq!(body.messages[0].role, Role::User);
        assert!(body.config.is_none());
    }

    #[test]
    fn last_message_of_empty_history_fails() {
        let req = ChatRequest::new("web-chat", vec![], GenerationConfig::sampling(0.7, 1024, 1.0, None));
        assert!(matches!(req.last_message(), Err(RelayError::ValidationError(_))));
    }
}
