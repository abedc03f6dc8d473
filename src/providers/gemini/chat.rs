//! `Gemini` Chat Implementation

use async_trait::async_trait;
use secrecy::ExposeSecret;

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;
use crate::error::RelayError;
use crate::providers::GenerateCapability;
use crate::telemetry::ProviderTracer;
use crate::types::ChatRequest;
use crate::utils::streaming::UpstreamReply;

const PROVIDER_ID: &str = "gemini";

/// Models with a known `generateContent` endpoint.
const ENDPOINT_MODELS: &[&str] = &["gemini-1.5-flash", "gemini-2.0-flash-exp"];

/// `generateContent` URL for `model`, without the key query parameter.
///
/// Registered models missing from the endpoint table are `UnsupportedModel`.
pub fn generate_content_url(base_url: &str, model: &str) -> Result<String, RelayError> {
    if !ENDPOINT_MODELS.contains(&model) {
        return Err(RelayError::UnsupportedModel(model.to_string()));
    }
    Ok(format!(
        "{}/models/{model}:generateContent",
        base_url.trim_end_matches('/')
    ))
}

/// Single-shot generation adapter.
#[derive(Debug, Clone)]
pub struct GeminiChat {
    config: GeminiConfig,
    http_client: reqwest::Client,
}

impl GeminiChat {
    pub fn new(config: GeminiConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl GenerateCapability for GeminiChat {
    fn provider_id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn generate(&self, request: &ChatRequest) -> Result<UpstreamReply, RelayError> {
        let url = generate_content_url(&self.config.base_url, &request.model)?;
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| RelayError::ConfigurationError("GEMINI_API_KEY is not set".into()))?;
        let last = request.last_message()?;

        let tracer = ProviderTracer::new(PROVIDER_ID, &request.model);
        tracer.trace_request_start(&url);

        let body = GenerateContentRequest::single_turn(last.content.clone(), &request.config);
        let response = self
            .http_client
            .post(&url)
            .query(&[("key", api_key.expose_secret())])
            .json(&body)
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

        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .first_text()
            .map(UpstreamReply::Completion)
            .ok_or_else(|| {
                RelayError::MalformedResponse(
                    "Gemini response has no candidates[0].content.parts[0].text".into(),
                )
            })
    }
}
