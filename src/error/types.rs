//! Error types for chatrelay.

use thiserror::Error;

/// Opaque text returned to HTTP callers for every failure.
pub const GENERIC_USER_MESSAGE: &str = "An error occurred while processing your request.";

/// Coarse error classification used for log routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The inbound request named something we cannot serve.
    Client,
    /// The upstream provider failed or answered with an unexpected shape.
    Upstream,
    /// Network or stream level failure.
    Transport,
    /// Missing or malformed process configuration.
    Configuration,
}

/// Errors raised anywhere between the inbound request and the relayed stream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelayError {
    /// The model id is not part of the registry.
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// The model is registered but its provider has no endpoint for it.
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    /// Non-2xx answer from an upstream provider.
    ///
    /// `body` keeps the raw response text for server-side diagnostics only.
    #[error("Upstream {provider} error {status}: {message}")]
    UpstreamError {
        provider: &'static str,
        status: u16,
        message: String,
        body: Option<String>,
    },

    /// 2xx answer whose body lacks the expected fields.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The inbound request body is unusable.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Connection, timeout or other client-side HTTP failure.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Failure while reading an already-open stream.
    #[error("Stream error: {0}")]
    StreamError(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Missing credential or malformed environment value.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl RelayError {
    /// Build an upstream error without a captured body.
    pub fn upstream(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamError {
            provider,
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Coarse classification of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownModel(_) | Self::UnsupportedModel(_) | Self::ValidationError(_) => {
                ErrorCategory::Client
            }
            Self::UpstreamError { .. } | Self::MalformedResponse(_) | Self::JsonError(_) => {
                ErrorCategory::Upstream
            }
            Self::HttpError(_) | Self::StreamError(_) => ErrorCategory::Transport,
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
        }
    }

    /// HTTP status of the upstream answer, when one was received.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text safe to show to an end caller.
    ///
    /// Never contains upstream diagnostics; the detailed `Display` form is for logs.
    pub fn user_message(&self) -> String {
        GENERIC_USER_MESSAGE.to_string()
    }
}
