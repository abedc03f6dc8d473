//! `Groq` Utility Functions

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::RelayError;
use crate::types::GenerationConfig;

/// Bearer auth plus JSON content type.
pub fn build_headers(api_key: &SecretString) -> Result<HeaderMap, RelayError> {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
        .map_err(|e| RelayError::ConfigurationError(format!("Invalid Groq API key: {e}")))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Reject values the completions endpoint cannot accept.
pub fn validate_groq_params(config: &GenerationConfig) -> Result<(), RelayError> {
    if config.temperature < 0.0 {
        return Err(RelayError::ValidationError(
            "temperature cannot be negative".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&config.top_p) {
        return Err(RelayError::ValidationError(
            "top_p must be between 0.0 and 1.0".to_string(),
        ));
    }
    if config.max_tokens == 0 {
        return Err(RelayError::ValidationError(
            "max_tokens must be positive".to_string(),
        ));
    }
    Ok(())
}
