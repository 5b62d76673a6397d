//! Sandboxed preview of a generated page.
//!
//! The iframe runs with `sandbox="allow-scripts"` and no `allow-same-origin`,
//! so generated script executes against an opaque origin: no host storage,
//! no cookies, no parent DOM. Loading, empty, and rendered are three mutually
//! exclusive states.

use leptos::prelude::*;

use crate::util::browser;

/// Preview pane for one panel's generated HTML.
#[component]
pub fn Preview(
    html: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] loading: bool,
) -> impl IntoView {
    if loading {
        return view! {
            <div class="preview preview--placeholder">
                <div class="preview__spinner"></div>
                <p class="preview__placeholder-text">"Generating code..."</p>
            </div>
        }
        .into_any();
    }

    if html.is_empty() {
        return view! {
            <div class="preview preview--placeholder">
                <div class="preview__empty-mark">"\u{1f3a8}"</div>
                <p class="preview__placeholder-text">"Generated code will appear here"</p>
            </div>
        }
        .into_any();
    }

    let html = StoredValue::new(html);
    // Bumping the sequence recreates the iframe, reloading the document from
    // scratch.
    let render_seq = RwSignal::new(0u64);

    view! {
        <div class="preview">
            <div class="preview__toolbar">
                <span class="preview__title">
                    {title.unwrap_or_else(|| "Generated Code".to_owned())}
                </span>
                <div class="preview__actions">
                    <button
                        class="preview__action"
                        title="Re-render"
                        on:click=move |_| render_seq.update(|n| *n += 1)
                    >
                        "\u{21bb}"
                    </button>
                    <button
                        class="preview__action"
                        title="Copy HTML"
                        on:click=move |_| browser::copy_text(&html.get_value())
                    >
                        "\u{2398}"
                    </button>
                    <button
                        class="preview__action"
                        title="Open in new tab"
                        on:click=move |_| browser::open_html(&html.get_value())
                    >
                        "\u{2197}"
                    </button>
                </div>
            </div>
            {move || {
                let _ = render_seq.get();
                view! {
                    <iframe
                        class="preview__frame"
                        sandbox="allow-scripts"
                        srcdoc=html.get_value()
                        title="Generated page preview"
                    ></iframe>
                }
            }}
        </div>
    }
    .into_any()
}
