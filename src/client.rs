//! Caller-side client for `POST /chat`.
//!
//! Decodes the relayed event stream incrementally and hands back either the
//! events themselves or the concatenated answer.

use futures_util::StreamExt;

use crate::error::RelayError;
use crate::types::{ChatBody, GenerationOverrides, Message};
use crate::utils::streaming::{EventStream, decode_events};

const PROVIDER_ID: &str = "chatrelay";

/// Thin HTTP consumer of a running relay.
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    /// Send a chat request and decode the reply as it arrives.
    pub async fn chat_stream(
        &self,
        messages: Vec<Message>,
        config: Option<GenerationOverrides>,
    ) -> Result<EventStream, RelayError> {
        let body = ChatBody {
            messages,
            config,
        };
        let response = self
            .http_client
            .post(format!("{}/chat", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RelayError::UpstreamError {
                provider: PROVIDER_ID,
                status: status.as_u16(),
                message: format!("HTTP error! status: {}", status.as_u16()),
                body: Some(error_text),
            });
        }

        Ok(decode_events(response.bytes_stream()))
    }

    /// Send a chat request and return the whole answer.
    ///
    /// `on_chunk` sees every non-empty content delta in arrival order.
    pub async fn chat<F>(
        &self,
        messages: Vec<Message>,
        config: Option<GenerationOverrides>,
        mut on_chunk: Option<F>,
    ) -> Result<String, RelayError>
    where
        F: FnMut(&str),
    {
        let mut events = self.chat_stream(messages, config).await?;
        let mut content = String::new();
        while let Some(event) = events.next().await {
            let event = event?;
            if let Some(delta) = event.content_delta.as_deref().filter(|d| !d.is_empty()) {
                if let Some(cb) = on_chunk.as_mut() {
                    cb(delta);
                }
                content.push_str(delta);
            }
            if event.is_terminal() {
                break;
            }
        }
        Ok(content)
    }
}
