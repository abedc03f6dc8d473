//! HTTP surface
//!
//! - `POST /chat` relays one chat request as `text/event-stream`
//! - `GET /models` lists the registry
//!
//! Every failure before the stream starts is answered with a 500 and the
//! opaque [`GENERIC_USER_MESSAGE`](crate::error::GENERIC_USER_MESSAGE); the
//! detailed error only reaches the server log.

use std::future::Future;
use std::net::SocketAddr;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use tracing::Instrument;

use crate::error::RelayError;
use crate::registry::{self, ModelSummary};
use crate::router::{ChatRouter, prepare};
use crate::types::ChatBody;

pub const EVENT_STREAM_CONTENT_TYPE: &str = "text/event-stream";

/// Build the application with `router` as shared state.
pub fn app(router: ChatRouter) -> axum::Router {
    axum::Router::new()
        .route("/chat", post(chat_handler))
        .route("/models", get(models_handler))
        .with_state(router)
}

/// Bind `addr` and serve until `shutdown` resolves.
pub async fn serve<F>(router: ChatRouter, addr: SocketAddr, shutdown: F) -> Result<(), RelayError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| RelayError::ConfigurationError(format!("failed to bind {addr}: {e}")))?;
    tracing::info!(addr = %addr, "Listening");
    axum::serve(listener, app(router))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| RelayError::HttpError(format!("server error: {e}")))
}

async fn chat_handler(State(router): State<ChatRouter>, body: Bytes) -> Response {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!(
        "chat",
        request_id = %request_id,
        model = tracing::field::Empty
    );

    let result = async {
        let request = match ChatBody::from_slice(&body).and_then(prepare) {
            Ok(request) => request,
            Err(e) => return Err(e),
        };
        tracing::Span::current().record("model", tracing::field::display(&request.model));
        router.dispatch_request(request).await
    }
    .instrument(span.clone())
    .await;

    match result {
        Ok(stream) => (
            [
                (header::CONTENT_TYPE, EVENT_STREAM_CONTENT_TYPE),
                (header::CACHE_CONTROL, "no-cache"),
                (header::CONNECTION, "keep-alive"),
            ],
            Body::from_stream(stream),
        )
            .into_response(),
        Err(e) => {
            span.in_scope(|| {
                tracing::error!(
                    error = %e,
                    category = ?e.category(),
                    upstream_status = ?e.upstream_status(),
                    "Chat request failed"
                );
                if let RelayError::UpstreamError { body: Some(body), .. } = &e {
                    tracing::debug!(upstream_body = %body, "Upstream error body");
                }
            });
            e.into_response()
        }
    }
}

async fn models_handler() -> Json<Vec<ModelSummary>> {
    Json(registry::list_available().iter().map(ModelSummary::from).collect())
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": self.user_message() })),
        )
            .into_response()
    }
}
