use super::*;
use crate::state::test_helpers::MockRouter;
use events::GeneratedPage;

fn request(models: &[&str]) -> GenerationRequest {
    GenerationRequest {
        prompt: "calculator".into(),
        models: models.iter().map(|m| (*m).to_owned()).collect(),
        api_key: "sk-or-test".into(),
    }
}

async fn collect(mut rx: mpsc::Receiver<GenerationResult>) -> Vec<GenerationResult> {
    let mut out = Vec::new();
    while let Some(result) = rx.recv().await {
        out.push(result);
    }
    out
}

// =============================================================================
// delivery guarantees
// =============================================================================

#[tokio::test]
async fn one_event_per_model_then_close() {
    let router = Arc::new(MockRouter::new());
    let rx = spawn_fan_out(router, request(&["a/x", "b/y", "c/z"]));

    let results = collect(rx).await;
    assert_eq!(results.len(), 3);

    let mut indexes: Vec<usize> = results.iter().map(|r| r.model_index).collect();
    indexes.sort_unstable();
    assert_eq!(indexes, vec![0, 1, 2]);
}

#[tokio::test]
async fn result_carries_model_identifier_and_page() {
    let router = Arc::new(MockRouter::new());
    let results = collect(spawn_fan_out(router, request(&["a/x"]))).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].model, "a/x");
    assert!(results[0].success);
    assert_eq!(results[0].data, Some(MockRouter::default_page("a/x")));
}

#[tokio::test]
async fn single_model_request_is_supported() {
    let router = Arc::new(MockRouter::new());
    let results = collect(spawn_fan_out(router, request(&["a/x"]))).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].model_index, 0);
}

// =============================================================================
// completion order and failure isolation
// =============================================================================

#[tokio::test(start_paused = true)]
async fn events_arrive_in_completion_order() {
    let page = GeneratedPage { html: "<html>A</html>".into(), title: "A".into() };
    let router = Arc::new(
        MockRouter::new()
            .succeed_after("a/x", 50, page)
            .fail_after("b/y", 200, "connection refused"),
    );

    let results = collect(spawn_fan_out(router, request(&["a/x", "b/y"]))).await;
    assert_eq!(results.len(), 2);

    // a/x resolves first even though b/y was requested alongside it.
    assert_eq!(results[0].model_index, 0);
    assert!(results[0].success);
    assert_eq!(results[0].data.as_ref().unwrap().title, "A");

    assert_eq!(results[1].model_index, 1);
    assert!(!results[1].success);
    assert!(results[1].error.as_deref().unwrap().contains("connection refused"));
}

#[tokio::test(start_paused = true)]
async fn slow_model_does_not_block_fast_ones() {
    let router = Arc::new(
        MockRouter::new()
            .succeed_after("slow/model", 10_000, MockRouter::default_page("slow/model"))
            .succeed_after("fast/model", 10, MockRouter::default_page("fast/model")),
    );

    let mut rx = spawn_fan_out(router, request(&["slow/model", "fast/model"]));

    let first = rx.recv().await.unwrap();
    assert_eq!(first.model, "fast/model");

    let second = rx.recv().await.unwrap();
    assert_eq!(second.model, "slow/model");
    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn failure_does_not_corrupt_sibling_results() {
    let router = Arc::new(
        MockRouter::new()
            .fail_after("bad/model", 5, "rejected credential")
            .succeed_after("good/model", 50, MockRouter::default_page("good/model")),
    );

    let results = collect(spawn_fan_out(router, request(&["good/model", "bad/model"]))).await;
    assert_eq!(results.len(), 2);

    let good = results.iter().find(|r| r.model == "good/model").unwrap();
    assert!(good.success);
    assert_eq!(good.model_index, 0);

    let bad = results.iter().find(|r| r.model == "bad/model").unwrap();
    assert!(!bad.success);
    assert_eq!(bad.model_index, 1);
    assert!(bad.data.is_none());
}

#[tokio::test]
async fn all_models_failing_still_produces_all_events() {
    let router = Arc::new(
        MockRouter::new()
            .fail_after("a/x", 0, "down")
            .fail_after("b/y", 0, "down"),
    );

    let results = collect(spawn_fan_out(router, request(&["a/x", "b/y"]))).await;
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| !r.success));
}

// =============================================================================
// consumer cancellation
// =============================================================================

#[tokio::test(start_paused = true)]
async fn dropping_receiver_does_not_panic_tasks() {
    let router = Arc::new(
        MockRouter::new().succeed_after("a/x", 1_000, MockRouter::default_page("a/x")),
    );
    let rx = spawn_fan_out(Arc::clone(&router) as Arc<dyn ModelRouter>, request(&["a/x"]));
    drop(rx);

    // Let the in-flight task finish; its send fails silently.
    tokio::time::sleep(std::time::Duration::from_millis(2_000)).await;
    assert_eq!(router.calls(), 1);
}
