//! `POST /api/benchmark` — raw side-by-side completion, no streaming.
//!
//! Unlike `/api/generate` this waits for both models and replies with a
//! single JSON document of raw completion text. Kept for head-to-head latency
//! comparisons where page rendering is irrelevant.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::llm::LlmError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct BenchmarkBody {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    pub prompt: String,
    pub model1: String,
    pub model2: String,
}

#[derive(Serialize, Debug)]
pub struct BenchmarkResponse {
    pub response1: String,
    pub response2: String,
    pub model1: String,
    pub model2: String,
}

type BenchmarkRejection = (StatusCode, Json<Value>);

/// `POST /api/benchmark` — run two raw completions in parallel and return
/// both, or fail the pair as a unit.
pub async fn benchmark(
    State(state): State<AppState>,
    Json(body): Json<BenchmarkBody>,
) -> Result<Json<BenchmarkResponse>, BenchmarkRejection> {
    let fields = [&body.api_key, &body.prompt, &body.model1, &body.model2];
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing required fields" })),
        ));
    }

    let (first, second) = tokio::join!(
        state.router.complete(&body.api_key, &body.model1, &body.prompt),
        state.router.complete(&body.api_key, &body.model2, &body.prompt),
    );

    match (first, second) {
        (Ok(response1), Ok(response2)) => Ok(Json(BenchmarkResponse {
            response1,
            response2,
            model1: body.model1,
            model2: body.model2,
        })),
        (first, second) => {
            tracing::warn!(model1 = %body.model1, model2 = %body.model2, "benchmark: upstream call failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "API request failed",
                    "details": {
                        "model1": failure_detail(first),
                        "model2": failure_detail(second),
                    },
                })),
            ))
        }
    }
}

/// `null` for the model that succeeded, the error text for the one that
/// failed.
fn failure_detail(result: Result<String, LlmError>) -> Value {
    result.err().map_or(Value::Null, |e| Value::String(e.to_string()))
}

#[cfg(test)]
#[path = "benchmark_test.rs"]
mod tests;
