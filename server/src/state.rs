//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the routing-API client as a trait object so route and service tests
//! can substitute a scripted mock.

use std::sync::Arc;

use crate::llm::ModelRouter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the router is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<dyn ModelRouter>,
}

impl AppState {
    #[must_use]
    pub fn new(router: Arc<dyn ModelRouter>) -> Self {
        Self { router }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
