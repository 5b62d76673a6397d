//! OpenRouter credential with an explicit localStorage lifecycle.
//!
//! The key lives under a fixed storage slot, is loaded once at startup, saved
//! on every edit, and removed when the field is cleared. It is attached to
//! each generation request and never sent anywhere else.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

/// Fixed localStorage slot for the persisted credential.
pub const STORAGE_KEY: &str = "arena_api_key";

/// In-memory credential state.
#[derive(Clone, Debug, Default)]
pub struct CredentialState {
    pub api_key: String,
}

impl CredentialState {
    /// True when a usable (non-blank) credential is set.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Load the persisted credential, empty when absent or outside a browser.
#[must_use]
pub fn load() -> CredentialState {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_default();
        CredentialState { api_key: stored }
    }
    #[cfg(not(feature = "csr"))]
    {
        CredentialState::default()
    }
}

/// Persist the credential. A blank value removes the stored key entirely.
pub fn store(api_key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if api_key.trim().is_empty() {
                let _ = storage.remove_item(STORAGE_KEY);
            } else {
                let _ = storage.set_item(STORAGE_KEY, api_key);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = api_key;
    }
}
