//! Per-provider request tracing

use std::time::Instant;

use reqwest::header::HeaderMap;
use tracing::{debug, error, info};

use super::mask_sensitive_value;

/// Emits the start/finish/failure lines for one upstream call.
#[derive(Debug, Clone)]
pub struct ProviderTracer {
    provider: &'static str,
    model: String,
    started: Instant,
}

impl ProviderTracer {
    pub fn new(provider: &'static str, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            started: Instant::now(),
        }
    }

    pub fn trace_request_start(&self, url: &str) {
        info!(provider = %self.provider, model = %self.model, url = %url, "Request started");
    }

    /// Header dump at debug level with every value masked.
    pub fn trace_request_headers(&self, headers: &HeaderMap) {
        if !tracing::enabled!(tracing::Level::DEBUG) {
            return;
        }
        let masked: Vec<String> = headers
            .iter()
            .map(|(name, value)| {
                let value = value.to_str().unwrap_or("<binary>");
                format!("{name}: {}", mask_sensitive_value(value))
            })
            .collect();
        debug!(provider = %self.provider, headers = ?masked, "Request headers");
    }

    pub fn trace_response_success(&self, status_code: u16) {
        info!(
            provider = %self.provider,
            model = %self.model,
            status_code = status_code,
            duration_ms = self.elapsed_ms(),
            "Request completed successfully"
        );
    }

    /// Upstream diagnostics stay in the server log.
    pub fn trace_request_error(&self, status_code: u16, error_text: &str) {
        error!(
            provider = %self.provider,
            model = %self.model,
            status_code = status_code,
            error_text = %error_text,
            duration_ms = self.elapsed_ms(),
            "Request failed"
        );
    }

    pub fn trace_transport_error(&self, error: &dyn std::fmt::Display) {
        error!(
            provider = %self.provider,
            model = %self.model,
            error = %error,
            duration_ms = self.elapsed_ms(),
            "Request failed before a response arrived"
        );
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}
