//! `Groq` Chat Implementation

use async_trait::async_trait;

use super::types::{GroqChatRequest, GroqChatResponse};
use super::utils::{build_headers, validate_groq_params};
use crate::config::GroqConfig;
use crate::error::RelayError;
use crate::providers::GenerateCapability;
use crate::telemetry::ProviderTracer;
use crate::types::ChatRequest;
use crate::utils::streaming::{UpstreamReply, response_byte_stream};

const PROVIDER_ID: &str = "groq";

/// Streaming-completions adapter.
#[derive(Debug, Clone)]
pub struct GroqChat {
    config: GroqConfig,
    http_client: reqwest::Client,
}

impl GroqChat {
    pub fn new(config: GroqConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GenerateCapability for GroqChat {
    fn provider_id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn generate(&self, request: &ChatRequest) -> Result<UpstreamReply, RelayError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| RelayError::ConfigurationError("GROQ_API_KEY is not set".into()))?;
        validate_groq_params(&request.config)?;

        let url = self.completions_url();
        let tracer = ProviderTracer::new(PROVIDER_ID, &request.model);
        tracer.trace_request_start(&url);

        let headers = build_headers(api_key)?;
        tracer.trace_request_headers(&headers);

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&GroqChatRequest::from(request))
            .send()
            .await
            .inspect_err(|e| tracer.trace_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracer.trace_request_error(status.as_u16(), &error_text);
            return Err(RelayError::UpstreamError {
                provider: PROVIDER_ID,
                status: status.as_u16(),
                message: format!("HTTP error! status: {}", status.as_u16()),
                body: Some(error_text),
            });
        }
        tracer.trace_response_success(status.as_u16());

        if request.config.stream {
            return Ok(UpstreamReply::Passthrough(response_byte_stream(response)));
        }

        let completion: GroqChatResponse = response.json().await?;
        completion
            .first_content()
            .map(UpstreamReply::Completion)
            .ok_or_else(|| {
                RelayError::MalformedResponse("Groq completion has no choices[0].message.content".into())
            })
    }
}
