mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // The router client carries no credential of its own: the OpenRouter key
    // arrives with each request and is attached per call.
    let config = llm::RouterConfig::from_env();
    tracing::info!(base_url = %config.base_url, "router client configured");
    let router = llm::OpenRouterClient::new(config).expect("router client init failed");

    let state = state::AppState::new(Arc::new(router));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "arena listening");
    axum::serve(listener, app).await.expect("server failed");
}
