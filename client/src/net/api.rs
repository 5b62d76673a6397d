//! Generation API call and streaming consumption.
//!
//! Browser-side only: real HTTP via `gloo-net`, with the response body read
//! incrementally through a `ReadableStream` reader and drained into panel
//! state chunk by chunk. Gated behind `csr` since it requires a browser
//! environment.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx response or a mid-stream read failure settles every pending
//! panel and raises a single transport notice. Malformed event lines are
//! logged and skipped; they never kill the consumer loop.

#[cfg(feature = "csr")]
use events::{GenerationRequest, StreamDecoder};
#[cfg(feature = "csr")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "csr")]
use crate::net::stream::{self, ChunkOutcome};
#[cfg(feature = "csr")]
use crate::state::panels::PanelsState;
#[cfg(feature = "csr")]
use crate::state::ui::UiState;

/// Submit a run and drain its result stream to completion.
///
/// Success settles the run; any transport failure aborts it and raises one
/// notice. Spawn via `leptos::task::spawn_local`.
#[cfg(feature = "csr")]
pub async fn run_generation(
    request: GenerationRequest,
    run_id: u64,
    panels: RwSignal<PanelsState>,
    ui: RwSignal<UiState>,
) {
    match stream_generation(&request, run_id, panels).await {
        Ok(()) => panels.update(|p| p.finish_run(run_id)),
        Err(message) => {
            leptos::logging::warn!("generation stream failed: {message}");
            panels.update(|p| p.abort_run(run_id));
            ui.update(|u| u.raise_transport(message));
        }
    }
}

#[cfg(feature = "csr")]
async fn stream_generation(
    request: &GenerationRequest,
    run_id: u64,
    panels: RwSignal<PanelsState>,
) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let response = gloo_net::http::Request::post("/api/generate")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(rejection_message(&response).await);
    }

    let body = response
        .body()
        .ok_or_else(|| "response has no body".to_owned())?;
    let reader = body
        .get_reader()
        .dyn_into::<web_sys::ReadableStreamDefaultReader>()
        .map_err(|_| "streaming reads unsupported by this browser".to_owned())?;

    let mut decoder = StreamDecoder::new();
    loop {
        let step = JsFuture::from(reader.read())
            .await
            .map_err(|_| "stream read failed".to_owned())?;

        let done = js_sys::Reflect::get(&step, &"done".into())
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        if done {
            break;
        }

        let value = js_sys::Reflect::get(&step, &"value".into())
            .map_err(|_| "stream chunk unreadable".to_owned())?;
        let bytes = js_sys::Uint8Array::new(&value).to_vec();

        let mut outcome = ChunkOutcome::default();
        panels.update(|p| outcome = stream::drain_chunk(&mut decoder, p, run_id, &bytes));
        log_outcome(&outcome);
    }

    let mut outcome = ChunkOutcome::default();
    panels.update(|p| outcome = stream::drain_end(&mut decoder, p, run_id));
    log_outcome(&outcome);

    Ok(())
}

/// Best-effort extraction of the server's `{"error": …}` rejection body.
#[cfg(feature = "csr")]
async fn rejection_message(response: &gloo_net::http::Response) -> String {
    let status = response.status();
    response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("generation request failed: status {status}"))
}

#[cfg(feature = "csr")]
fn log_outcome(outcome: &ChunkOutcome) {
    for error in &outcome.malformed {
        leptos::logging::warn!("skipping malformed event line: {error}");
    }
    for dropped in &outcome.dropped {
        leptos::logging::log!("dropped result event: {dropped:?}");
    }
}
