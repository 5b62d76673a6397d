//! Transient notice banner for validation and transport errors.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

/// Single-slot banner above the panel row. Per-model failures never render
/// here; they belong to their panel.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        {move || {
            ui.get()
                .notice
                .map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Validation => "notice notice--validation",
                        NoticeKind::Transport => "notice notice--transport",
                    };
                    view! {
                        <div class=class role="alert">
                            <span class="notice__message">{notice.message}</span>
                            <button
                                class="notice__dismiss"
                                title="Dismiss"
                                on:click=move |_| ui.update(UiState::dismiss_notice)
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
