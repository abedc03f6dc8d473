//! End-to-end: RelayClient -> relay server -> wiremock upstream.

mod support;

use chatrelay::server::app;
use chatrelay::types::{GenerationOverrides, Message};
use chatrelay::{ChatRouter, RelayClient, RelayError};
use futures_util::StreamExt;
use serde_json::json;
use support::config_for;
use support::stream_fixture::load_fixture;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn spawn_relay(upstream: &MockServer) -> String {
    let router = ChatRouter::from_config(&config_for(&upstream.uri())).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(router)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn chat_concatenates_deltas_and_reports_each_chunk() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_string(load_fixture("groq/chat_stream.sse")),
        )
        .mount(&upstream)
        .await;

    let client = RelayClient::new(spawn_relay(&upstream).await);
    let mut chunks = Vec::new();
    let answer = client
        .chat(
            vec![Message::user("hi")],
            Some(GenerationOverrides::default().with_model("gemma2-9b-it")),
            Some(|delta: &str| chunks.push(delta.to_string())),
        )
        .await
        .unwrap();

    assert_eq!(answer, "Fast language models matter.");
    assert_eq!(chunks, vec!["Fast ", "language ", "models ", "matter."]);
}

#[tokio::test]
async fn chat_stream_yields_single_terminal_event_for_single_shot() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/web/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "done"})))
        .mount(&upstream)
        .await;

    let client = RelayClient::new(spawn_relay(&upstream).await);
    let events: Vec<_> = client
        .chat_stream(
            vec![Message::user("hi")],
            Some(GenerationOverrides::default().with_model("web-chat")),
        )
        .await
        .unwrap()
        .collect()
        .await;

    assert_eq!(events.len(), 1);
    let event = events[0].as_ref().unwrap();
    assert_eq!(event.content_delta.as_deref(), Some("done"));
    assert!(event.is_terminal());
}

#[tokio::test]
async fn relay_failure_is_reported_as_upstream_error() {
    let upstream = MockServer::start().await;
    let client = RelayClient::new(spawn_relay(&upstream).await);
    let err = client
        .chat(
            vec![Message::user("hi")],
            Some(GenerationOverrides::default().with_model("gpt-5")),
            None::<fn(&str)>,
        )
        .await
        .unwrap_err();
    assert_eq!(err.upstream_status(), Some(500));
    assert!(matches!(err, RelayError::UpstreamError { .. }));
}
