//! Root application component with shared state contexts.

use leptos::prelude::*;

use crate::components::{ModelPanel, NoticeBanner, PromptBar, Sidebar};
use crate::state::credential::{self, CredentialState};
use crate::state::panels::PanelsState;
use crate::state::ui::UiState;

/// Context wrapper for the shared prompt text, to keep it distinct from any
/// other `RwSignal<String>` a component might provide.
#[derive(Clone, Copy)]
pub struct PromptText(pub RwSignal<String>);

/// Root application component.
///
/// Provides all shared state contexts and lays out the sidebar, panel row,
/// and prompt bar.
#[component]
pub fn App() -> impl IntoView {
    let credential = RwSignal::new(credential::load());
    let panels = RwSignal::new(PanelsState::default());
    let ui = RwSignal::new(UiState::default());
    let prompt = PromptText(RwSignal::new(String::new()));

    provide_context(credential);
    provide_context(panels);
    provide_context(ui);
    provide_context(prompt);

    view! {
        <div class="app">
            <Sidebar/>
            <main class="app__main">
                <NoticeBanner/>
                <div class="app__panels">
                    {move || {
                        panels
                            .get()
                            .panels
                            .iter()
                            .map(|panel| {
                                let panel_id = panel.id.clone();
                                view! { <ModelPanel panel_id=panel_id/> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <PromptBar/>
            </main>
        </div>
    }
}

/// Validate and launch a generation run from the current signals.
///
/// Validation failures raise a notice and leave panel state untouched; the
/// in-flight run (if any) blocks resubmission.
pub(crate) fn submit_run(
    credential: RwSignal<CredentialState>,
    panels: RwSignal<PanelsState>,
    ui: RwSignal<UiState>,
    prompt: RwSignal<String>,
) {
    if !credential.get_untracked().is_present() {
        ui.update(|u| u.raise_validation("Add your OpenRouter API key in the sidebar first"));
        return;
    }
    let text = prompt.get_untracked();
    if text.trim().is_empty() {
        ui.update(|u| u.raise_validation("Type a prompt describing what to build"));
        return;
    }
    if panels.with_untracked(PanelsState::any_loading) {
        return;
    }

    ui.update(|u| u.dismiss_notice());

    let mut plan = None;
    panels.update(|p| plan = Some(p.begin_run()));
    let Some(plan) = plan else { return };

    let request = events::GenerationRequest {
        prompt: text.trim().to_owned(),
        models: plan.models,
        api_key: credential.get_untracked().api_key,
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(crate::net::api::run_generation(request, plan.run_id, panels, ui));
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
    }
}
