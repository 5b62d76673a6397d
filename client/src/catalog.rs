//! Model catalog offered by the panel selectors.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One selectable routing-API model.
pub struct ModelOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Models offered in the panel selectors. The first entry is the default for
/// new panels.
pub const MODELS: &[ModelOption] = &[
    ModelOption { id: "moonshotai/kimi-k2-0905", label: "Kimi K2 0905" },
    ModelOption { id: "x-ai/grok-code-fast-1", label: "Grok Code Fast 1" },
    ModelOption { id: "openai/gpt-5", label: "GPT-5" },
    ModelOption { id: "google/gemini-2.5-flash", label: "Gemini 2.5 Flash" },
    ModelOption { id: "google/gemini-2.5-pro", label: "Gemini 2.5 Pro" },
    ModelOption { id: "meta-llama/llama-4-scout", label: "Llama 4 Scout" },
    ModelOption { id: "qwen/qwen3-coder", label: "Qwen 3 Coder" },
];

/// Prompts offered on empty panels.
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "Create a ping pong game in HTML",
    "Build a calculator with a modern design",
    "Create a todo app with animations",
];

#[must_use]
pub fn default_model() -> &'static str {
    MODELS[0].id
}

/// The model's own name without its vendor prefix, for compact badges.
#[must_use]
pub fn short_name(model: &str) -> &str {
    model.rsplit('/').next().unwrap_or(model)
}
