#![allow(dead_code)]

pub mod stream_fixture;

use chatrelay::config::{BrainmanConfig, GeminiConfig, GroqConfig, RelayConfig};
use chatrelay::utils::ByteStream;
use futures_util::StreamExt;
use secrecy::SecretString;

pub const GROQ_TEST_KEY: &str = "gsk-test-key";
pub const GEMINI_TEST_KEY: &str = "gemini-test-key";

/// Relay configuration pointing every provider at `base_url`.
pub fn config_for(base_url: &str) -> RelayConfig {
    RelayConfig {
        groq: GroqConfig {
            api_key: Some(SecretString::from(GROQ_TEST_KEY.to_string())),
            base_url: base_url.to_string(),
        },
        gemini: GeminiConfig {
            api_key: Some(SecretString::from(GEMINI_TEST_KEY.to_string())),
            base_url: base_url.to_string(),
        },
        brainman: BrainmanConfig {
            base_url: base_url.to_string(),
        },
        ..RelayConfig::default()
    }
}

/// Drain a relayed body into one string.
pub async fn collect_body(mut stream: ByteStream) -> String {
    let mut out = Vec::new();
    while let Some(chunk) = stream.next().await {
        out.extend_from_slice(&chunk.expect("body chunk"));
    }
    String::from_utf8(out).expect("utf-8 body")
}
