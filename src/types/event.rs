//! Downstream event format
//!
//! Every event relayed to the caller is an SSE `data:` frame whose payload is
//! `{"choices":[{"delta":{"content":...},"finish_reason":...}]}`. The same
//! payload shape is what the streaming provider emits natively, so the wire
//! types below serve both for synthesis and for decoding.

use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// Literal payload of the terminator line `data: [DONE]`.
pub const DONE_SENTINEL: &str = "[DONE]";

/// Finish reason attached to synthesized single-shot events.
pub const FINISH_STOP: &str = "stop";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkDelta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: ChunkDelta,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkPayload {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

/// One normalized event: a content fragment and/or a terminal marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedEvent {
    pub content_delta: Option<String>,
    pub finish_reason: Option<String>,
}

impl NormalizedEvent {
    pub fn delta(content: impl Into<String>) -> Self {
        Self {
            content_delta: Some(content.into()),
            finish_reason: None,
        }
    }

    /// A whole answer delivered as one event with an immediate `stop` marker.
    pub fn completed(content: impl Into<String>) -> Self {
        Self {
            content_delta: Some(content.into()),
            finish_reason: Some(FINISH_STOP.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.finish_reason.is_some()
    }

    /// First choice of a payload; payloads without choices carry no event.
    pub fn from_payload(payload: ChunkPayload) -> Option<Self> {
        let choice = payload.choices.into_iter().next()?;
        Some(Self {
            content_delta: choice.delta.content,
            finish_reason: choice.finish_reason,
        })
    }

    pub fn to_payload(&self) -> ChunkPayload {
        ChunkPayload {
            choices: vec![ChunkChoice {
                delta: ChunkDelta {
                    content: self.content_delta.clone(),
                    role: None,
                },
                finish_reason: self.finish_reason.clone(),
            }],
        }
    }

    /// Encode as one SSE frame: `data: {json}\n\n`.
    pub fn to_sse_frame(&self) -> Result<String, RelayError> {
        let json = serde_json::to_string(&self.to_payload())?;
        Ok(format!("data: {json}\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_event_matches_wire_shape() {
        let frame = NormalizedEvent::completed("hello").to_sse_frame().unwrap();
        assert_eq!(
            frame,
            "data: {\"choices\":[{\"delta\":{\"content\":\"hello\"},\"finish_reason\":\"stop\"}]}\n\n"
        );
    }

    #[test]
    fn delta_event_serializes_null_finish_reason() {
        let payload = serde_json::to_value(NormalizedEvent::delta("a").to_payload()).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({"choices":[{"delta":{"content":"a"},"finish_reason":null}]})
        );
    }

    #[test]
    fn provider_chunk_with_extra_fields_decodes() {
        let raw = r#"{"id":"chatcmpl-1","object":"chat.completion.chunk","model":"gemma2-9b-it",
            "choices":[{"index":0,"delta":{"role":"assistant","content":"Hi"},"logprobs":null,"finish_reason":null}]}"#;
        let payload: ChunkPayload = serde_json::from_str(raw).unwrap();
        let event = NormalizedEvent::from_payload(payload).unwrap();
        assert_eq!(event, NormalizedEvent::delta("Hi"));
        assert!(!event.is_terminal());
    }

    #[test]
    fn payload_without_choices_yields_nothing() {
        let payload: ChunkPayload =
            serde_json::from_str(r#"{"id":"x","x_groq":{"usage":{"total_tokens":3}}}"#).unwrap();
        assert!(NormalizedEvent::from_payload(payload).is_none());
    }
}
