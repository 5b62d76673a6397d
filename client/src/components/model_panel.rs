//! One model comparison panel: selector header plus result body.

use leptos::prelude::*;

use crate::app::PromptText;
use crate::catalog;
use crate::components::preview::Preview;
use crate::state::panels::{PanelState, PanelsState};

/// A single panel bound to one entry in the panel store by id.
///
/// The header selects the model and hosts add/remove controls; the body shows
/// whichever of the loading / empty / result states applies.
#[component]
pub fn ModelPanel(panel_id: String) -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelsState>>();
    let prompt = expect_context::<PromptText>().0;

    let id = StoredValue::new(panel_id);
    let panel = move || panels.with(|p| p.panel(&id.get_value()).cloned());

    let can_remove = move || panels.with(|p| p.panels.len() > 1);
    let is_last = move || {
        panels.with(|p| p.panels.last().is_some_and(|last| last.id == id.get_value()))
    };

    let on_model_change = move |ev| {
        let model = event_target_value(&ev);
        panels.update(|p| p.set_model(&id.get_value(), &model));
    };
    let on_remove = move |_| {
        panels.update(|p| {
            p.remove_panel(&id.get_value());
        });
    };
    let on_add = move |_| panels.update(PanelsState::add_panel);

    view! {
        <section class="panel">
            <header class="panel__header">
                <select
                    class="panel__select"
                    prop:value=move || panel().map(|p| p.model).unwrap_or_default()
                    on:change=on_model_change
                >
                    {catalog::MODELS
                        .iter()
                        .map(|option| {
                            view! { <option value=option.id>{option.label}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>

                {move || {
                    panel()
                        .filter(|p| p.loading)
                        .map(|_| view! { <span class="panel__spinner" title="Generating..."></span> })
                }}

                <span class="panel__badge">
                    {move || panel().map(|p| catalog::short_name(&p.model).to_owned()).unwrap_or_default()}
                </span>

                // Add/remove stay available mid-run: the store freezes the
                // in-flight mapping, so a removed panel's late event is
                // dropped and an added panel never joins the current run.
                <div class="panel__controls">
                    {move || {
                        can_remove()
                            .then(|| {
                                view! {
                                    <button class="panel__control" title="Remove panel" on:click=on_remove>
                                        "\u{2212}"
                                    </button>
                                }
                            })
                    }}
                    {move || {
                        is_last()
                            .then(|| {
                                view! {
                                    <button class="panel__control" title="Add panel" on:click=on_add>
                                        "+"
                                    </button>
                                }
                            })
                    }}
                </div>
            </header>

            <div class="panel__body">{move || panel_body(panel(), prompt)}</div>
        </section>
    }
}

/// Render the body for the panel's current lifecycle state.
fn panel_body(panel: Option<PanelState>, prompt: RwSignal<String>) -> AnyView {
    let Some(panel) = panel else {
        // Panel removed between renders; nothing to show.
        return ().into_any();
    };

    if panel.loading {
        return view! { <Preview html=String::new() loading=true/> }.into_any();
    }

    match panel.result {
        Some(result) if result.success => {
            let page = result.data.unwrap_or_else(|| events::GeneratedPage {
                html: String::new(),
                title: String::new(),
            });
            view! { <Preview html=page.html title=page.title/> }.into_any()
        }
        Some(result) => {
            let message = result
                .error
                .unwrap_or_else(|| "Unknown error".to_owned());
            view! {
                <div class="panel__failure">
                    <div class="panel__failure-heading">"Generation Failed"</div>
                    <div class="panel__failure-message">{message}</div>
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="panel__empty">
                <p class="panel__empty-lead">"Click and try one of these prompts:"</p>
                <div class="panel__suggestions">
                    {catalog::EXAMPLE_PROMPTS
                        .iter()
                        .map(|example| {
                            view! {
                                <button
                                    class="panel__suggestion"
                                    on:click=move |_| prompt.set((*example).to_owned())
                                >
                                    {*example}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_any(),
    }
}
