//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the proxy API routes and static file serving under a
//! single Axum router. The built client is served as static files at `/`;
//! everything the browser calls lives under `/api`.

pub mod benchmark;
pub mod generate;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the directory holding the built client assets.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../client/dist"))
}

/// Full application: API routes + static client assets at `/`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(static_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/generate", post(generate::generate))
        .route("/api/benchmark", post(benchmark::benchmark))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
        .fallback_service(assets)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
