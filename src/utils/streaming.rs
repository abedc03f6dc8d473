//! Stream Normalizer
//!
//! Turns whatever an adapter produced into the one downstream SSE format,
//! and decodes that format back into [`NormalizedEvent`]s for callers.
//!
//! - A native provider stream is relayed byte-for-byte: the upstream already
//!   emits `data: {"choices":[...]}` frames.
//! - A single-shot answer is synthesized into one frame carrying the whole
//!   text and `finish_reason: "stop"`.
//!
//! Decoding first regroups the byte stream into complete lines, decoded
//! lossily so invalid UTF-8 becomes U+FFFD instead of ending the stream. The
//! lines then go through eventsource-stream. Each `data:` line is parsed on
//! its own and a line that is not a well-formed chunk is dropped without
//! ending the stream.

use std::pin::Pin;
use std::time::Instant;

use bytes::Bytes;
use eventsource_stream::{EventStreamError, Eventsource};
use futures::Stream;
use futures_util::StreamExt;

use crate::error::RelayError;
use crate::types::{ChunkPayload, DONE_SENTINEL, NormalizedEvent};

/// Raw SSE body bytes on their way to the caller.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, RelayError>> + Send>>;

/// Decoded downstream events.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<NormalizedEvent, RelayError>> + Send>>;

/// Raw result of one adapter call.
pub enum UpstreamReply {
    /// Upstream byte stream already in the downstream event framing.
    Passthrough(ByteStream),
    /// Complete answer text from a single-shot provider.
    Completion(String),
}

impl std::fmt::Debug for UpstreamReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passthrough(_) => f.write_str("Passthrough(..)"),
            Self::Completion(text) => f.debug_tuple("Completion").field(text).finish(),
        }
    }
}

/// Expose a `reqwest` response body as a [`ByteStream`].
pub fn response_byte_stream(response: reqwest::Response) -> ByteStream {
    Box::pin(
        response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| RelayError::StreamError(format!("Stream error: {e}")))),
    )
}

/// Convert an adapter result into the downstream SSE body.
pub fn normalize(reply: UpstreamReply) -> ByteStream {
    match reply {
        UpstreamReply::Passthrough(stream) => stream,
        UpstreamReply::Completion(text) => synthesize(text),
    }
}

/// One-event stream: the whole answer plus an immediate finish marker.
pub fn synthesize(content: String) -> ByteStream {
    let frame = NormalizedEvent::completed(content)
        .to_sse_frame()
        .map(Bytes::from);
    Box::pin(futures::stream::once(async move { frame }))
}

/// Log relay completion with byte count and duration once the body is drained.
pub fn instrument(stream: ByteStream, provider: &'static str, model: String) -> ByteStream {
    let started = Instant::now();
    let mut inner = stream;
    let s = async_stream::stream! {
        let mut relayed = 0usize;
        while let Some(item) = inner.next().await {
            match &item {
                Ok(chunk) => relayed += chunk.len(),
                Err(e) => {
                    tracing::error!(provider = %provider, model = %model, error = %e, "Relay stream failed");
                }
            }
            yield item;
        }
        tracing::info!(
            provider = %provider,
            model = %model,
            bytes = relayed,
            duration_ms = started.elapsed().as_millis() as u64,
            "Relay completed"
        );
    };
    Box::pin(s)
}

/// Parse one `data:` payload line. `None` for blank, sentinel or malformed lines.
pub fn parse_data_line(line: &str) -> Option<NormalizedEvent> {
    let line = line.trim();
    if line.is_empty() || line == DONE_SENTINEL {
        return None;
    }
    match serde_json::from_str::<ChunkPayload>(line) {
        Ok(payload) => NormalizedEvent::from_payload(payload),
        Err(e) => {
            tracing::debug!(error = %e, "Skipping malformed stream line");
            None
        }
    }
}

/// Incrementally decode an SSE byte stream into normalized events.
///
/// Ends at `data: [DONE]` or when the byte stream closes. Transport errors are
/// yielded once and end the stream.
pub fn decode_events<S, B, E>(bytes: S) -> EventStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let mut sse = Box::pin(lossy_lines(bytes).eventsource());
    let s = async_stream::stream! {
        'events: while let Some(item) = sse.next().await {
            let event = match item {
                Ok(event) => event,
                Err(EventStreamError::Transport(e)) => {
                    yield Err(RelayError::StreamError(format!("Stream error: {e}")));
                    break;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping undecodable SSE event");
                    continue;
                }
            };
            for line in event.data.split('\n') {
                if line.trim() == DONE_SENTINEL {
                    break 'events;
                }
                if let Some(ev) = parse_data_line(line) {
                    yield Ok(ev);
                }
            }
        }
    };
    Box::pin(s)
}

/// Regroup bytes into runs of complete `\n`-terminated lines, each run decoded
/// lossily. A multi-byte character split across reads is rejoined first.
fn lossy_lines<S, B, E>(bytes: S) -> impl Stream<Item = Result<String, E>> + Send
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Send + 'static,
{
    async_stream::stream! {
        let mut bytes = Box::pin(bytes);
        let mut pending: Vec<u8> = Vec::new();
        while let Some(item) = bytes.next().await {
            match item {
                Ok(chunk) => {
                    pending.extend_from_slice(chunk.as_ref());
                    if let Some(end) = pending.iter().rposition(|b| *b == b'\n') {
                        let rest = pending.split_off(end + 1);
                        let complete = std::mem::replace(&mut pending, rest);
                        yield Ok(String::from_utf8_lossy(&complete).into_owned());
                    }
                }
                Err(e) => {
                    yield Err(e);
                    break;
                }
            }
        }
        if !pending.is_empty() {
            yield Ok(String::from_utf8_lossy(&pending).into_owned());
        }
    }
}

/// Concatenate every content delta of an event stream.
pub async fn collect_content(mut events: EventStream) -> Result<String, RelayError> {
    let mut out = String::new();
    while let Some(event) = events.next().await {
        if let Some(delta) = event?.content_delta {
            out.push_str(&delta);
        }
    }
    Ok(out)
}
