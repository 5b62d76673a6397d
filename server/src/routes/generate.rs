//! `POST /api/generate` — validated fan-out streamed back as `data:` records.
//!
//! The response body is an unbounded `text/plain` stream: one encoded
//! [`GenerationResult`] per completed model call, in completion order. The
//! body ends when the fan-out channel closes, i.e. once every requested model
//! has reported exactly once.

use std::convert::Infallible;

use axum::body::Body;
use axum::extract::{Json, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tokio::sync::mpsc;

use events::{GenerationRequest, GenerationResult, encode_event};

use crate::services;
use crate::state::AppState;

/// Request-validation failures. Rejected before any external call is made.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("API key is required")]
    MissingCredential,
    #[error("Prompt and models are required")]
    InvalidRequest,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Reject requests that must not reach the routing API.
pub(crate) fn validate(request: &GenerationRequest) -> Result<(), RequestError> {
    if request.api_key.trim().is_empty() {
        return Err(RequestError::MissingCredential);
    }
    if request.prompt.trim().is_empty() || request.models.is_empty() {
        return Err(RequestError::InvalidRequest);
    }
    Ok(())
}

/// `POST /api/generate` — fan a prompt out to the requested models and stream
/// each result as it completes.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Response, RequestError> {
    validate(&request)?;

    tracing::info!(
        models = request.models.len(),
        prompt_len = request.prompt.len(),
        "generate: request accepted"
    );

    let rx = services::generate::spawn_fan_out(state.router.clone(), request);
    Ok(stream_response(rx))
}

/// Wrap the fan-out channel as a streamed `text/plain` body.
fn stream_response(rx: mpsc::Receiver<GenerationResult>) -> Response {
    let stream = futures::stream::unfold(rx, |mut rx| async move {
        let result = rx.recv().await?;
        Some((Ok::<_, Infallible>(encode_event(&result)), rx))
    });

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(stream),
    )
        .into_response()
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
