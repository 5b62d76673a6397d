use super::*;
use events::GeneratedPage;

fn page_event(index: usize, model: &str) -> GenerationResult {
    GenerationResult::page(
        index,
        model,
        GeneratedPage { html: format!("<html>{model}</html>"), title: model.to_owned() },
    )
}

// =============================================================================
// panel collection
// =============================================================================

#[test]
fn default_starts_with_two_distinct_panels() {
    let state = PanelsState::default();
    assert_eq!(state.panels.len(), 2);
    assert_ne!(state.panels[0].id, state.panels[1].id);
    assert!(state.panels.iter().all(|p| p.model == crate::catalog::default_model()));
    assert!(state.panels.iter().all(|p| !p.loading && p.result.is_none()));
}

#[test]
fn add_panel_appends_with_default_model() {
    let mut state = PanelsState::default();
    state.add_panel();
    assert_eq!(state.panels.len(), 3);
    assert_eq!(state.panels[2].model, crate::catalog::default_model());
}

#[test]
fn remove_panel_keeps_siblings_intact() {
    let mut state = PanelsState::default();
    state.add_panel();
    let (first, middle, last) =
        (state.panels[0].id.clone(), state.panels[1].id.clone(), state.panels[2].id.clone());

    assert!(state.remove_panel(&middle));
    let remaining: Vec<&str> = state.panels.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(remaining, vec![first.as_str(), last.as_str()]);
}

#[test]
fn remove_panel_refuses_to_empty_the_collection() {
    let mut state = PanelsState::default();
    let (first, second) = (state.panels[0].id.clone(), state.panels[1].id.clone());

    assert!(state.remove_panel(&first));
    assert!(!state.remove_panel(&second));
    assert_eq!(state.panels.len(), 1);
}

#[test]
fn remove_panel_with_unknown_id_is_a_no_op() {
    let mut state = PanelsState::default();
    assert!(!state.remove_panel("nope"));
    assert_eq!(state.panels.len(), 2);
}

#[test]
fn set_model_touches_only_the_target() {
    let mut state = PanelsState::default();
    let first = state.panels[0].id.clone();

    state.set_model(&first, "x-ai/grok-code-fast-1");
    assert_eq!(state.panels[0].model, "x-ai/grok-code-fast-1");
    assert_eq!(state.panels[1].model, crate::catalog::default_model());
}

// =============================================================================
// begin_run
// =============================================================================

#[test]
fn begin_run_marks_panels_loading_and_returns_models_in_order() {
    let mut state = PanelsState::default();
    let (first, second) = (state.panels[0].id.clone(), state.panels[1].id.clone());
    state.set_model(&first, "a/x");
    state.set_model(&second, "b/y");

    let plan = state.begin_run();
    assert_eq!(plan.models, vec!["a/x".to_owned(), "b/y".to_owned()]);
    assert!(state.panels.iter().all(|p| p.loading && p.result.is_none()));
}

#[test]
fn begin_run_clears_previous_results() {
    let mut state = PanelsState::default();
    let plan = state.begin_run();
    state.apply_result(plan.run_id, &page_event(0, "a/x"));
    state.finish_run(plan.run_id);
    assert!(state.panels[0].result.is_some());

    state.begin_run();
    assert!(state.panels.iter().all(|p| p.result.is_none()));
}

#[test]
fn run_ids_are_monotonic() {
    let mut state = PanelsState::default();
    let first = state.begin_run();
    state.finish_run(first.run_id);
    let second = state.begin_run();
    assert!(second.run_id > first.run_id);
}

// =============================================================================
// apply_result routing
// =============================================================================

#[test]
fn events_route_by_index_not_arrival_order() {
    let mut state = PanelsState::default();
    let plan = state.begin_run();

    // Index 1 completes first.
    assert_eq!(state.apply_result(plan.run_id, &page_event(1, "b/y")), ApplyOutcome::Applied);
    assert!(state.panels[0].loading);
    assert!(!state.panels[1].loading);
    assert_eq!(state.panels[1].result.as_ref().unwrap().model, "b/y");

    assert_eq!(state.apply_result(plan.run_id, &page_event(0, "a/x")), ApplyOutcome::Applied);
    assert!(!state.any_loading());
}

#[test]
fn failure_event_lands_in_its_panel_only() {
    let mut state = PanelsState::default();
    let plan = state.begin_run();

    let failure = GenerationResult::failure(0, "a/x", "network error");
    state.apply_result(plan.run_id, &failure);

    let first = &state.panels[0];
    assert!(!first.loading);
    assert!(!first.result.as_ref().unwrap().success);
    assert!(state.panels[1].loading);
    assert!(state.panels[1].result.is_none());
}

#[test]
fn event_without_active_run_is_dropped() {
    let mut state = PanelsState::default();
    assert_eq!(state.apply_result(1, &page_event(0, "a/x")), ApplyOutcome::StaleRun);
    assert!(state.panels.iter().all(|p| p.result.is_none()));
}

#[test]
fn event_from_stale_run_is_dropped() {
    let mut state = PanelsState::default();
    let old = state.begin_run();
    state.abort_run(old.run_id);
    let new = state.begin_run();

    assert_eq!(state.apply_result(old.run_id, &page_event(0, "a/x")), ApplyOutcome::StaleRun);
    assert!(state.panels[0].result.is_none());

    assert_eq!(state.apply_result(new.run_id, &page_event(0, "a/x")), ApplyOutcome::Applied);
}

#[test]
fn out_of_range_index_is_dropped() {
    let mut state = PanelsState::default();
    let plan = state.begin_run();
    assert_eq!(state.apply_result(plan.run_id, &page_event(7, "g/h")), ApplyOutcome::UnknownIndex);
    assert!(state.panels.iter().all(|p| p.loading));
}

// =============================================================================
// mid-flight mutations
// =============================================================================

#[test]
fn removed_panel_drops_its_late_event_without_resurrecting() {
    let mut state = PanelsState::default();
    let second = state.panels[1].id.clone();
    let plan = state.begin_run();

    assert!(state.remove_panel(&second));
    assert_eq!(state.panels.len(), 1);

    assert_eq!(state.apply_result(plan.run_id, &page_event(1, "b/y")), ApplyOutcome::PanelRemoved);
    assert_eq!(state.panels.len(), 1);
    assert!(state.panel(&second).is_none());

    // The surviving panel's event still routes normally.
    assert_eq!(state.apply_result(plan.run_id, &page_event(0, "a/x")), ApplyOutcome::Applied);
}

#[test]
fn panel_added_mid_flight_does_not_participate() {
    let mut state = PanelsState::default();
    let plan = state.begin_run();

    state.add_panel();
    let added = state.panels[2].id.clone();

    // The run was frozen at two panels; an index for a third is dropped.
    assert_eq!(state.apply_result(plan.run_id, &page_event(2, "c/z")), ApplyOutcome::UnknownIndex);
    let added_panel = state.panel(&added).unwrap();
    assert!(!added_panel.loading);
    assert!(added_panel.result.is_none());
}

// =============================================================================
// settling
// =============================================================================

#[test]
fn abort_run_clears_all_pending_loading_flags() {
    let mut state = PanelsState::default();
    let plan = state.begin_run();
    state.apply_result(plan.run_id, &page_event(0, "a/x"));

    state.abort_run(plan.run_id);
    assert!(!state.any_loading());
    // The already-delivered result survives; the pending panel has none.
    assert!(state.panels[0].result.is_some());
    assert!(state.panels[1].result.is_none());
}

#[test]
fn finish_run_settles_panels_that_never_reported() {
    let mut state = PanelsState::default();
    let plan = state.begin_run();
    state.apply_result(plan.run_id, &page_event(0, "a/x"));

    state.finish_run(plan.run_id);
    assert!(!state.any_loading());
}

#[test]
fn settling_a_stale_run_does_not_disturb_the_current_one() {
    let mut state = PanelsState::default();
    let old = state.begin_run();
    state.finish_run(old.run_id);
    let current = state.begin_run();

    state.abort_run(old.run_id);
    assert!(state.any_loading());
    assert_eq!(state.apply_result(current.run_id, &page_event(0, "a/x")), ApplyOutcome::Applied);
}

#[test]
fn reset_clears_results_and_run() {
    let mut state = PanelsState::default();
    let plan = state.begin_run();
    state.apply_result(plan.run_id, &page_event(0, "a/x"));

    state.reset();
    assert!(!state.any_loading());
    assert!(state.panels.iter().all(|p| p.result.is_none()));
    assert_eq!(state.apply_result(plan.run_id, &page_event(1, "b/y")), ApplyOutcome::StaleRun);
}
