//! Brainman Chat Implementation

use async_trait::async_trait;

use super::types::{BrainmanRequest, BrainmanResponse};
use crate::config::BrainmanConfig;
use crate::error::RelayError;
use crate::providers::GenerateCapability;
use crate::telemetry::ProviderTracer;
use crate::types::ChatRequest;
use crate::utils::streaming::UpstreamReply;

/// Which of the two services a model is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrainmanEndpoint {
    /// Primary chat service.
    Chat,
    /// Web-search variant.
    Web,
}

impl BrainmanEndpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Chat => "/api/v1/chat",
            Self::Web => "/api/web/chat",
        }
    }

    pub const fn provider_id(self) -> &'static str {
        match self {
            Self::Chat => "brainman",
            Self::Web => "brainman-web",
        }
    }
}

/// Single-shot adapter bound to one endpoint.
#[derive(Debug, Clone)]
pub struct BrainmanChat {
    endpoint: BrainmanEndpoint,
    config: BrainmanConfig,
    http_client: reqwest::Client,
}

impl BrainmanChat {
    pub fn new(endpoint: BrainmanEndpoint, config: BrainmanConfig, http_client: reqwest::Client) -> Self {
        Self {
            endpoint,
            config,
            http_client,
        }
    }

    pub fn endpoint(&self) -> BrainmanEndpoint {
        self.endpoint
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.endpoint.path()
        )
    }
}

#[async_trait]
impl GenerateCapability for BrainmanChat {
    fn provider_id(&self) -> &'static str {
        self.endpoint.provider_id()
    }

    async fn generate(&self, request: &ChatRequest) -> Result<UpstreamReply, RelayError> {
        let provider = self.provider_id();
        let prompt = request.last_message()?.content.as_str();
        if prompt.trim().is_empty() {
            return Err(RelayError::ValidationError("message content is empty".into()));
        }

        let url = self.url();
        let tracer = ProviderTracer::new(provider, &request.model);
        tracer.trace_request_start(&url);

        let response = self
            .http_client
            .post(&url)
            .json(&BrainmanRequest { message: prompt })
            .send()
            .await
            .inspect_err(|e| tracer.trace_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracer.trace_request_error(status.as_u16(), &error_text);
            let message = serde_json::from_str::<BrainmanResponse>(&error_text)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(RelayError::UpstreamError {
                provider,
                status: status.as_u16(),
                message,
                body: Some(error_text),
            });
        }
        tracer.trace_response_success(status.as_u16());

        let parsed: BrainmanResponse = response.json().await?;
        match parsed.answer {
            Some(answer) if !answer.is_empty() => Ok(UpstreamReply::Completion(answer)),
            _ => Err(RelayError::MalformedResponse(format!(
                "{provider} response has no answer"
            ))),
        }
    }
}
