//! Sidebar with the credential field and collapse toggle.

use leptos::prelude::*;

use crate::state::credential::{self, CredentialState};
use crate::state::ui::UiState;

/// Collapsible configuration sidebar.
///
/// The credential is persisted on every edit; clearing the field removes the
/// stored key entirely.
#[component]
pub fn Sidebar() -> impl IntoView {
    let credential = expect_context::<RwSignal<CredentialState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let collapsed = move || ui.get().sidebar_collapsed;

    let on_key_input = move |ev| {
        let value = event_target_value(&ev);
        credential::store(&value);
        credential.update(|c| c.api_key = value);
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <button
                class="sidebar__toggle"
                title="Toggle sidebar"
                on:click=move |_| ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed)
            >
                {move || if collapsed() { "\u{bb}" } else { "\u{ab}" }}
            </button>

            <div class="sidebar__header">
                <span class="sidebar__mark">"\u{26a1}"</span>
                {move || {
                    (!collapsed()).then(|| {
                        view! {
                            <h1 class="sidebar__title">"Arena"</h1>
                            <span class="sidebar__badge">"Beta"</span>
                        }
                    })
                }}
            </div>

            {move || {
                (!collapsed())
                    .then(|| {
                        view! {
                            <div class="sidebar__config">
                                <div class="sidebar__section-label">"Configuration"</div>
                                <label class="sidebar__label" for="api-key">
                                    "OpenRouter API Key"
                                </label>
                                <input
                                    id="api-key"
                                    class="sidebar__input"
                                    type="password"
                                    placeholder="sk-or-..."
                                    prop:value=move || credential.get().api_key
                                    on:input=on_key_input
                                />
                                <p class="sidebar__hint">
                                    "Stored in this browser only and attached to each request."
                                </p>
                            </div>
                        }
                    })
            }}
        </aside>
    }
}
