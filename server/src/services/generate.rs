//! Generation fan-out — one task per requested model, results in completion
//! order.
//!
//! DESIGN
//! ======
//! Each model call is an independent spawned task racing its siblings; a
//! finished call sends exactly one tagged [`GenerationResult`] into a shared
//! channel the moment it resolves. The channel closes when every task's
//! sender has dropped, so the consumer sees exactly N results and then
//! end-of-stream — no terminator record, no bookkeeping. A failed call is
//! converted to a failed result in place; it never aborts siblings.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use events::{GenerationRequest, GenerationResult};

use crate::llm::ModelRouter;

/// Results waiting for the response body to drain before fan-out tasks park.
const RESULT_BUFFER: usize = 16;

/// Fan a validated request out to the router, one task per model.
///
/// The returned receiver yields one result per requested model in completion
/// order, then closes. Dropping the receiver early lets in-flight calls run
/// to completion; their sends fail silently.
pub fn spawn_fan_out(router: Arc<dyn ModelRouter>, request: GenerationRequest) -> mpsc::Receiver<GenerationResult> {
    let (tx, rx) = mpsc::channel(RESULT_BUFFER);
    let run_id = Uuid::new_v4();

    for (model_index, model) in request.models.into_iter().enumerate() {
        let tx = tx.clone();
        let router = Arc::clone(&router);
        let prompt = request.prompt.clone();
        let api_key = request.api_key.clone();

        tokio::spawn(async move {
            let started = Instant::now();
            let result = match router.generate_page(&api_key, &model, &prompt).await {
                Ok(page) => {
                    info!(%run_id, model_index, %model, elapsed = ?started.elapsed(), "model call completed");
                    GenerationResult::page(model_index, model, page)
                }
                Err(e) => {
                    warn!(%run_id, model_index, %model, elapsed = ?started.elapsed(), error = %e, "model call failed");
                    GenerationResult::failure(model_index, model, e.to_string())
                }
            };
            let _ = tx.send(result).await;
        });
    }

    rx
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
