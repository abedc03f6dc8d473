//! Type Conversions for RelayError
//!
//! This module contains From trait implementations for converting
//! common error types into RelayError.

use super::types::RelayError;

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::HttpError(format!("request timed out: {err}"));
        }
        // 2xx body that is not the expected JSON
        if err.is_decode() {
            return Self::MalformedResponse(err.to_string());
        }
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: RelayError = json_err.into();
        assert!(matches!(err, RelayError::JsonError(_)));
    }
}
