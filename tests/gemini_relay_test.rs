//! Gemini relay tests

mod support;

use chatrelay::types::{ChatBody, GenerationOverrides, Message};
use chatrelay::{ChatRouter, RelayError};
use serde_json::json;
use support::stream_fixture::load_fixture;
use support::{collect_body, config_for};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

fn gemini_body(model: &str, messages: Vec<Message>) -> ChatBody {
    ChatBody::new(messages).with_config(GenerationOverrides::default().with_model(model))
}

#[tokio::test]
async fn only_last_message_is_sent_and_reply_is_one_stop_event() {
    let server = MockServer::start().await;
    let reply: serde_json::Value =
        serde_json::from_str(&load_fixture("gemini/generate_content.json")).unwrap();

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash-exp:generateContent"))
        .and(query_param("key", "gemini-test-key"))
        .and(body_json(json!({
            "contents": [{"parts": [{"text": "And its capital?"}]}],
            "generationConfig": {
                "temperature": 1.0,
                "maxOutputTokens": 8192,
                "topP": 0.95,
                "topK": 40
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .expect(1)
        .mount(&server)
        .await;

    let router = ChatRouter::from_config(&config_for(&server.uri())).unwrap();
    let body = gemini_body(
        "gemini-2.0-flash-exp",
        vec![
            Message::user("Tell me about France."),
            Message::assistant("France is a country in Europe."),
            Message::user("And its capital?"),
        ],
    );
    let relayed = collect_body(router.dispatch(body).await.unwrap()).await;

    assert_eq!(
        relayed,
        "data: {\"choices\":[{\"delta\":{\"content\":\"Paris is the capital of France.\"},\"finish_reason\":\"stop\"}]}\n\n"
    );
}

#[tokio::test]
async fn thinking_model_is_unsupported() {
    let server = MockServer::start().await;
    let router = ChatRouter::from_config(&config_for(&server.uri())).unwrap();
    let err = router
        .dispatch(gemini_body(
            "gemini-2.0-flash-thinking-exp-01-21",
            vec![Message::user("hi")],
        ))
        .await
        .err()
        .unwrap();
    assert_eq!(
        err,
        RelayError::UnsupportedModel("gemini-2.0-flash-thinking-exp-01-21".into())
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_candidate_text_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": []}, "finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let router = ChatRouter::from_config(&config_for(&server.uri())).unwrap();
    let err = router
        .dispatch(gemini_body("gemini-1.5-flash", vec![Message::user("hi")]))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, RelayError::MalformedResponse(_)));
}

#[tokio::test]
async fn non_2xx_is_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let router = ChatRouter::from_config(&config_for(&server.uri())).unwrap();
    let err = router
        .dispatch(gemini_body("gemini-1.5-flash", vec![Message::user("hi")]))
        .await
        .err()
        .unwrap();
    assert_eq!(err.upstream_status(), Some(400));
}

#[tokio::test]
async fn empty_history_is_a_validation_error() {
    let server = MockServer::start().await;
    let router = ChatRouter::from_config(&config_for(&server.uri())).unwrap();
    let err = router
        .dispatch(gemini_body("gemini-1.5-flash", vec![]))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, RelayError::ValidationError(_)));
}

#[tokio::test]
async fn missing_key_is_a_configuration_error() {
    let server = MockServer::start().await;
    let mut config = config_for(&server.uri());
    config.gemini.api_key = None;
    let router = ChatRouter::from_config(&config).unwrap();
    let err = router
        .dispatch(gemini_body("gemini-1.5-flash", vec![Message::user("hi")]))
        .await
        .err()
        .unwrap();
    assert!(matches!(err, RelayError::ConfigurationError(_)));
}
