//! `Groq` wire types

use serde::{Deserialize, Serialize};

use crate::types::{ChatRequest, Message};

/// Body of `POST {base}/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct GroqChatRequest<'a> {
    pub messages: &'a [Message],
    pub model: &'a str,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub stream: bool,
    /// Serialized as `null` when absent.
    pub stop: Option<&'a [String]>,
}

impl<'a> From<&'a ChatRequest> for GroqChatRequest<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            messages: &request.messages,
            model: &request.model,
            temperature: request.config.temperature,
            max_tokens: request.config.max_tokens,
            top_p: request.config.top_p,
            stream: request.config.stream,
            stop: request.config.stop.as_deref(),
        }
    }
}

/// Non-streaming completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct GroqChatResponse {
    #[serde(default)]
    pub choices: Vec<GroqChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqChoice {
    pub message: GroqResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl GroqChatResponse {
    /// `choices[0].message.content`, if present.
    pub fn first_content(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}
