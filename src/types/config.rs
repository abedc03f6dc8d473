//! Generation parameters and the caller-override merge.

use serde::{Deserialize, Serialize};

/// Fully resolved generation parameters for one upstream call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub top_k: Option<u32>,
    pub stream: bool,
    pub stop: Option<Vec<String>>,
}

impl GenerationConfig {
    /// Registry defaults: the given sampling values on top of `stream = true, stop = null`.
    pub const fn sampling(temperature: f64, max_tokens: u32, top_p: f64, top_k: Option<u32>) -> Self {
        Self {
            temperature,
            max_tokens,
            top_p,
            top_k,
            stream: true,
            stop: None,
        }
    }

    /// Shallow, field-by-field merge: every field present in `overrides` wins.
    pub fn merge(&self, overrides: &GenerationOverrides) -> Self {
        Self {
            temperature: overrides.temperature.unwrap_or(self.temperature),
            max_tokens: overrides.max_tokens.unwrap_or(self.max_tokens),
            top_p: overrides.top_p.unwrap_or(self.top_p),
            top_k: overrides.top_k.or(self.top_k),
            stream: overrides.stream.unwrap_or(self.stream),
            stop: overrides.stop.clone().or_else(|| self.stop.clone()),
        }
    }
}

/// Caller-supplied partial config (the `config` object of `POST /chat`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl GenerationOverrides {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub const fn with_stream(mut self, stream: bool) -> Self {
        self.stream = Some(stream);
        self
    }
}
