//! LLM — OpenRouter routing-API client.
//!
//! DESIGN
//! ======
//! All model traffic goes through a single external routing API; models are
//! addressed by opaque identifiers (`vendor/model`) carried in each request.
//! The credential is user-supplied and attached per call — the server never
//! holds a key of its own. [`ModelRouter`] is the seam that lets the fan-out
//! service and routes run against a scripted mock in tests.

pub mod config;
pub mod openrouter;

pub use config::RouterConfig;
pub use openrouter::OpenRouterClient;

use events::GeneratedPage;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by routing-API calls.
///
/// All variants are per-call: they condemn one model's result, never the
/// batch.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request to the routing API failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The routing API returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The routing API response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// MODEL ROUTER TRAIT
// =============================================================================

/// Async seam over the routing API. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ModelRouter: Send + Sync {
    /// Generate a complete page for one model, constrained to the
    /// `{html, title}` structured-output shape.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the API rejects the
    /// credential, or the structured response is malformed.
    async fn generate_page(&self, api_key: &str, model: &str, prompt: &str) -> Result<GeneratedPage, LlmError>;

    /// Raw text completion for one model (benchmark path, no structured
    /// output).
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the response body is
    /// unreadable.
    async fn complete(&self, api_key: &str, model: &str, prompt: &str) -> Result<String, LlmError>;
}
