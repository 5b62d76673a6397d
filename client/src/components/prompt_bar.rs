//! Prompt input bar: textarea, submit, and reset.

use leptos::prelude::*;

use crate::app::{self, PromptText};
use crate::state::credential::CredentialState;
use crate::state::panels::PanelsState;
use crate::state::ui::UiState;

/// Bottom bar driving generation runs.
///
/// Enter submits (Shift+Enter inserts a newline); both buttons disable while
/// a run is in flight.
#[component]
pub fn PromptBar() -> impl IntoView {
    let credential = expect_context::<RwSignal<CredentialState>>();
    let panels = expect_context::<RwSignal<PanelsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let prompt = expect_context::<PromptText>().0;

    let busy = move || panels.with(PanelsState::any_loading);

    let do_submit = move || app::submit_run(credential, panels, ui, prompt);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_submit();
        }
    };

    let on_reset = move |_| {
        prompt.set(String::new());
        panels.update(PanelsState::reset);
        ui.update(UiState::dismiss_notice);
    };

    view! {
        <div class="prompt-bar">
            <button
                class="prompt-bar__reset"
                title="Reset"
                disabled=busy
                on:click=on_reset
            >
                "\u{21ba}"
            </button>
            <textarea
                class="prompt-bar__input"
                placeholder="Type your message..."
                prop:value=move || prompt.get()
                on:input=move |ev| prompt.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button
                class="prompt-bar__send btn btn--primary"
                disabled=busy
                on:click=move |_| do_submit()
            >
                "Send"
            </button>
        </div>
    }
}
