//! Router configuration parsed from environment variables.

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Attribution title sent to the routing API with every call.
pub const APP_TITLE: &str = "Arena";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Routing-API base URL, without a trailing slash.
    pub base_url: String,
    /// Public URL of this deployment, sent as the attribution referer.
    pub site_url: String,
    pub timeouts: RouterTimeouts,
}

impl RouterConfig {
    /// Build typed router config from environment variables.
    ///
    /// All variables are optional:
    /// - `OPENROUTER_BASE_URL`: routing-API base URL
    /// - `OPENROUTER_SITE_URL`: attribution referer
    /// - `OPENROUTER_REQUEST_TIMEOUT_SECS`: default 300
    /// - `OPENROUTER_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Env-free constructor backing `from_env`; tests feed it a closure.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("OPENROUTER_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let site_url = lookup("OPENROUTER_SITE_URL").unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let timeouts = RouterTimeouts {
            request_secs: parse_u64(
                lookup("OPENROUTER_REQUEST_TIMEOUT_SECS").as_deref(),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_u64(
                lookup("OPENROUTER_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        };

        Self { base_url, site_url, timeouts }
    }
}

fn parse_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
