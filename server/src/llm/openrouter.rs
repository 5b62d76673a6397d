//! OpenRouter chat-completions client.
//!
//! Thin HTTP wrapper for `/chat/completions`. Page generation pins the reply
//! to the `{html, title}` structured-output schema; the benchmark path sends
//! a plain completion. Pure parsing in `parse_page_response` /
//! `parse_text_response` for testability.

use std::time::Duration;

use serde::Serialize;
use serde_json::{Value, json};

use events::GeneratedPage;

use super::config::{APP_TITLE, RouterConfig};
use super::{LlmError, ModelRouter};

/// Attribution headers recognized by the routing API.
const REFERER_HEADER: &str = "HTTP-Referer";
const TITLE_HEADER: &str = "X-Title";

const BENCHMARK_MAX_TOKENS: u32 = 1000;
const BENCHMARK_TEMPERATURE: f32 = 0.7;

// =============================================================================
// CLIENT
// =============================================================================

pub struct OpenRouterClient {
    http: reqwest::Client,
    base_url: String,
    site_url: String,
}

impl OpenRouterClient {
    /// Build the client from typed config.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client fails to
    /// construct.
    pub fn new(config: RouterConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, site_url: config.site_url })
    }

    async fn send_chat(&self, api_key: &str, body: &ChatRequest<'_>) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .header(REFERER_HEADER, &self.site_url)
            .header(TITLE_HEADER, APP_TITLE)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl ModelRouter for OpenRouterClient {
    async fn generate_page(&self, api_key: &str, model: &str, prompt: &str) -> Result<GeneratedPage, LlmError> {
        let instructions = build_generation_prompt(prompt);
        let messages = [ChatMessage { role: "user", content: &instructions }];
        let body = ChatRequest {
            model,
            messages: &messages,
            max_tokens: None,
            temperature: None,
            response_format: Some(page_response_format()),
        };
        let text = self.send_chat(api_key, &body).await?;
        parse_page_response(&text)
    }

    async fn complete(&self, api_key: &str, model: &str, prompt: &str) -> Result<String, LlmError> {
        let messages = [ChatMessage { role: "user", content: prompt }];
        let body = ChatRequest {
            model,
            messages: &messages,
            max_tokens: Some(BENCHMARK_MAX_TOKENS),
            temperature: Some(BENCHMARK_TEMPERATURE),
            response_format: None,
        };
        let text = self.send_chat(api_key, &body).await?;
        parse_text_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage<'a>],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<Value>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Structured-output contract: exactly `{html, title}`, both strings.
pub(crate) fn page_response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "web_page",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "html": {
                        "type": "string",
                        "description": "Complete HTML code with inline CSS and JavaScript"
                    },
                    "title": {
                        "type": "string",
                        "description": "Short title describing what was created"
                    }
                },
                "required": ["html", "title"],
                "additionalProperties": false
            }
        }
    })
}

/// Wrap the user prompt with the fixed page-generation requirements.
pub(crate) fn build_generation_prompt(prompt: &str) -> String {
    format!(
        "Generate complete HTML, CSS, and JavaScript code for: {prompt}\n\
         \n\
         Requirements:\n\
         - Create a complete, working HTML page\n\
         - Include all CSS styles inline in a <style> tag\n\
         - Include all JavaScript inline in a <script> tag\n\
         - Make it visually appealing and functional\n\
         - The code should work when displayed in an iframe\n\
         - Don't include any external dependencies or CDN links\n\
         - Make it responsive and modern looking"
    )
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

pub(crate) fn parse_page_response(json_text: &str) -> Result<GeneratedPage, LlmError> {
    let content = extract_content(json_text)?
        .ok_or_else(|| LlmError::ApiParse("chat_completions: missing choices[0].message.content".to_string()))?;
    serde_json::from_str::<GeneratedPage>(&content)
        .map_err(|e| LlmError::ApiParse(format!("structured output is not {{html, title}}: {e}")))
}

pub(crate) fn parse_text_response(json_text: &str) -> Result<String, LlmError> {
    Ok(extract_content(json_text)?.unwrap_or_else(|| "No response generated".to_string()))
}

fn extract_content(json_text: &str) -> Result<Option<String>, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    Ok(root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_owned))
}

#[cfg(test)]
#[path = "openrouter_test.rs"]
mod tests;
